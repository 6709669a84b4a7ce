use crate::error::{ErrorKind, Id3Error, Result};
use crate::id3::v2::util::synchsafe::SynchsafeInteger;
use crate::macros::{err, try_vec};

use std::io::Read;

use byteorder::{BigEndian, ByteOrder, ReadBytesExt};

/// The marker that opens every ID3v2 tag
pub(crate) const ID3V2_TAG_MARKER: &[u8; 3] = b"ID3";

/// The size of the fixed ID3v2 header
pub(crate) const ID3V2_HEADER_LEN: usize = 10;

/// The ID3v2 version
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Id3v2Version {
	/// ID3v2.2
	V2,
	/// ID3v2.3
	V3,
	/// ID3v2.4
	V4,
}

impl Id3v2Version {
	/// The major version number, as stored in the header
	///
	/// # Examples
	///
	/// ```rust
	/// use id3dec::id3::v2::Id3v2Version;
	///
	/// assert_eq!(Id3v2Version::V3.major(), 3);
	/// ```
	pub fn major(self) -> u8 {
		match self {
			Self::V2 => 2,
			Self::V3 => 3,
			Self::V4 => 4,
		}
	}
}

/// Flags that apply to the entire tag
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Id3v2TagFlags {
	/// Whether or not the tag body has been unsynchronised
	///
	/// NOTE: id3dec does not reverse the unsynchronisation scheme, frames are read as stored.
	pub unsynchronisation: bool,
	/// Whether an extended header follows the tag header
	pub extended_header: bool,
	/// Indicates if the tag is in an experimental stage
	pub experimental: bool,
	/// Indicates that the tag includes a footer
	pub footer: bool,
}

impl Id3v2TagFlags {
	fn parse(flags: u8, version: Id3v2Version) -> Result<Self> {
		// Compression was a flag only used in ID3v2.2 (bit 6).
		// At the time the ID3v2.2 specification was written, a compression scheme wasn't decided.
		// Such tags are meant to be ignored entirely.
		if version == Id3v2Version::V2 && flags & 0x40 == 0x40 {
			err!(V2Compression);
		}

		Ok(Self {
			unsynchronisation: flags & 0x80 == 0x80,
			extended_header: version != Id3v2Version::V2 && flags & 0x40 == 0x40,
			experimental: flags & 0x20 == 0x20,
			footer: flags & 0x10 == 0x10,
		})
	}
}

/// An ID3v2 tag header
///
/// This is immutable once parsed, with the exception of the padding size, which is only known
/// once all frames have been read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Header {
	pub(crate) version: Id3v2Version,
	pub(crate) revision: u8,
	pub(crate) flags: Id3v2TagFlags,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER/FOOTER**)
	pub(crate) size: u32,
	pub(crate) padding_size: u32,
}

impl Id3v2Header {
	/// Read an ID3v2 header from the current position of `reader`
	///
	/// # Errors
	///
	/// * Fewer than 10 bytes are available ([`ErrorKind::TooShort`])
	/// * The tag marker is missing ([`ErrorKind::NoHeader`])
	/// * The major version isn't one of (2, 3, 4) ([`ErrorKind::UnknownMajorVersion`])
	/// * An ID3v2.2 tag is compressed ([`ErrorKind::V2Compression`])
	pub(crate) fn parse<R>(reader: &mut R) -> Result<Self>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 header");

		let mut header = [0; ID3V2_HEADER_LEN];
		reader.read_exact(&mut header)?;

		if &header[..3] != ID3V2_TAG_MARKER {
			err!(NoHeader);
		}

		let version = match header[3] {
			2 => Id3v2Version::V2,
			3 => Id3v2Version::V3,
			4 => Id3v2Version::V4,
			major => err!(UnknownMajorVersion(major, header[4])),
		};

		let flags = Id3v2TagFlags::parse(header[5], version)?;
		let size = BigEndian::read_u32(&header[6..]).unsynch();

		Ok(Self {
			version,
			revision: header[4],
			flags,
			size,
			padding_size: 0,
		})
	}

	/// The tag's version
	pub fn version(&self) -> Id3v2Version {
		self.version
	}

	/// The minor revision of the tag's version
	pub fn revision(&self) -> u8 {
		self.revision
	}

	/// The flags applied to the entire tag
	pub fn flags(&self) -> Id3v2TagFlags {
		self.flags
	}

	/// The declared size of the tag body, excluding the 10 byte header
	pub fn size(&self) -> u32 {
		self.size
	}

	/// The number of padding bytes found after the final frame
	pub fn padding_size(&self) -> u32 {
		self.padding_size
	}

	/// Whether the tag body has been unsynchronised
	pub fn unsynchronised(&self) -> bool {
		self.flags.unsynchronisation
	}

	/// Whether an extended header follows this header
	pub fn has_extended_header(&self) -> bool {
		self.flags.extended_header
	}

	/// Whether the tag is marked as experimental
	pub fn experimental(&self) -> bool {
		self.flags.experimental
	}

	/// Whether the tag declares a footer
	pub fn has_footer(&self) -> bool {
		self.flags.footer
	}
}

/// An ID3v2 extended header
///
/// The contents are kept as an opaque block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedHeader {
	size: u32,
	data: Vec<u8>,
	total_len: u32,
}

impl ExtendedHeader {
	/// The smallest size an extended header can declare
	pub(crate) const MIN_SIZE: u32 = 6;

	/// Read the extended header immediately following the tag header
	///
	/// In ID3v2.3, the declared size excludes the size field itself. In ID3v2.4, it includes it.
	/// Either way, the extended header can't occupy more than `body_size` bytes.
	pub(crate) fn parse<R>(reader: &mut R, version: Id3v2Version, body_size: u32) -> Result<Self>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 extended header");

		let size = reader.read_u32::<BigEndian>().map_err(corrupt)?.unsynch();
		if size < Self::MIN_SIZE {
			err!(CorruptExtendedHeader);
		}

		let (data_len, total_len) = match version {
			Id3v2Version::V4 => (size - 4, size),
			_ => (size, size + 4),
		};

		if total_len > body_size {
			log::debug!(
				"Extended header claims {} bytes, the tag body only has {}",
				total_len,
				body_size
			);
			err!(CorruptExtendedHeader);
		}

		let mut data = try_vec![0; data_len as usize];
		reader.read_exact(&mut data).map_err(corrupt)?;

		Ok(Self {
			size,
			data,
			total_len,
		})
	}

	/// The size declared by the extended header
	pub fn size(&self) -> u32 {
		self.size
	}

	/// The raw contents of the extended header, following the size field
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// The number of bytes the extended header occupies in the tag body, size field included
	pub fn total_len(&self) -> u32 {
		self.total_len
	}
}

fn corrupt(err: std::io::Error) -> Id3Error {
	match err.kind() {
		std::io::ErrorKind::UnexpectedEof => Id3Error::new(ErrorKind::CorruptExtendedHeader),
		_ => Id3Error::from(err),
	}
}
