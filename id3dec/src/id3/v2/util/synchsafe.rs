//! Utilities for working with synchsafe integers
//!
//! A synchsafe integer only uses the low 7 bits of each byte, so the encoded form never contains
//! a byte with its most significant bit set. This keeps tag sizes from being mistaken for MPEG
//! frame syncs.

use crate::error::Result;
use crate::macros::err;

/// An integer that can be converted to and from synchsafe variants
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// # Errors
	///
	/// `self` doesn't fit in <`INTEGER_TYPE::BITS - size_of::<INTEGER_TYPE>()`> bits
	///
	/// # Examples
	///
	/// ```rust
	/// use id3dec::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> id3dec::error::Result<()> {
	/// // Maximum value we can represent in a synchsafe u32
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Each byte should have 7 set bits and an MSB of 0
	/// assert_eq!(synch_number, 0b01111111_01111111_01111111_01111111_u32);
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Unsynchronise a synchsafe integer
	///
	/// The most significant bit of each byte is ignored rather than validated.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3dec::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// // 0x23 fits in 7 bits, so it is the same in both forms
	/// assert_eq!(0x23_u32.unsynch(), 0x23);
	///
	/// assert_eq!(0x0000_0101_u32.unsynch(), 0x81);
	/// ```
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn synch(self) -> Result<Self> {
		// 7 bits are available per byte, shave off 1 bit per byte
		const MAXIMUM_INTEGER: u32 = u32::MAX >> 4;

		if self > MAXIMUM_INTEGER {
			err!(TooMuchData);
		}

		let n = self;
		Ok((n & 0x7F)
			| ((n & (0x7F << 7)) << 1)
			| ((n & (0x7F << 14)) << 2)
			| ((n & (0x7F << 21)) << 3))
	}

	fn unsynch(self) -> Self {
		let u = self;
		((u & 0x7F00_0000) >> 3) | ((u & 0x7F_0000) >> 2) | ((u & 0x7F00) >> 1) | (u & 0x7F)
	}
}

/// Decode a 4-byte, big endian synchsafe integer into its 28-bit value
///
/// # Examples
///
/// ```rust
/// use id3dec::id3::v2::util::synchsafe::decode_synchsafe;
///
/// assert_eq!(decode_synchsafe([0x00, 0x00, 0x02, 0x01]), 0x101);
/// assert_eq!(decode_synchsafe([0x7F, 0x7F, 0x7F, 0x7F]), 0xFFF_FFFF);
/// ```
pub fn decode_synchsafe(bytes: [u8; 4]) -> u32 {
	u32::from_be_bytes(bytes).unsynch()
}
