use crate::error::{ErrorKind, Id3Error, Result};
use crate::macros::err;

use encoding_rs::WINDOWS_1252;

/// The text encoding for use in ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1 (read as its Windows-1252 superset)
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}

	/// The width of the null terminator that ends a string in this encoding
	///
	/// # Examples
	///
	/// ```rust
	/// use id3dec::TextEncoding;
	///
	/// assert_eq!(TextEncoding::Latin1.terminator_len(), 1);
	/// assert_eq!(TextEncoding::UTF16.terminator_len(), 2);
	/// ```
	pub fn terminator_len(self) -> usize {
		match self {
			Self::Latin1 | Self::UTF8 => 1,
			Self::UTF16 | Self::UTF16BE => 2,
		}
	}
}

/// The byte order of UTF-16 text
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash, Default)]
pub(crate) enum Endianness {
	#[default]
	Big,
	Little,
}

impl Endianness {
	fn read_u16(self, bytes: [u8; 2]) -> u16 {
		match self {
			Self::Big => u16::from_be_bytes(bytes),
			Self::Little => u16::from_le_bytes(bytes),
		}
	}

	fn from_bom(bytes: &[u8]) -> Option<Self> {
		match bytes {
			[0xFE, 0xFF, ..] => Some(Self::Big),
			[0xFF, 0xFE, ..] => Some(Self::Little),
			_ => None,
		}
	}
}

/// The encoding of a text payload, resolved from its leading marker byte
///
/// For [`TextEncoding::UTF16`], the byte order is sensed from the byte order mark directly
/// following the marker. With no (or a truncated) byte order mark, big endian is assumed.
#[derive(Debug, Clone, Eq, PartialEq, Copy)]
pub(crate) struct ResolvedEncoding {
	pub(crate) encoding: TextEncoding,
	pub(crate) endianness: Endianness,
}

/// A string located within a payload
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Delimited<'a> {
	/// The string's bytes, without the leading marker (if stripped) and terminator
	pub(crate) content: &'a [u8],
	/// The number of bytes to skip in the scanned slice to reach the next field
	pub(crate) bytes_consumed: usize,
}

impl ResolvedEncoding {
	pub(crate) const LATIN1: Self = Self {
		encoding: TextEncoding::Latin1,
		endianness: Endianness::Big,
	};

	/// Resolve the encoding of `payload`, whose first byte is the encoding marker
	pub(crate) fn from_payload(payload: &[u8]) -> Result<Self> {
		let Some(&marker) = payload.first() else {
			err!(TooShort);
		};

		let Some(encoding) = TextEncoding::from_u8(marker) else {
			err!(UnknownEncoding(marker));
		};

		let mut endianness = Endianness::Big;
		if encoding == TextEncoding::UTF16 {
			endianness = Endianness::from_bom(&payload[1..]).unwrap_or_default();
		}

		Ok(Self {
			encoding,
			endianness,
		})
	}

	pub(crate) fn terminator_len(self) -> usize {
		self.encoding.terminator_len()
	}

	/// Locate the next string in `data` using this encoding's terminator width
	pub(crate) fn delimit(self, data: &[u8], strip_marker: bool) -> Delimited<'_> {
		delimit(data, self.terminator_len(), strip_marker)
	}

	/// Transcode `bytes` to a native string
	pub(crate) fn decode(self, bytes: &[u8]) -> Result<String> {
		let mut text = match self.encoding {
			TextEncoding::Latin1 => latin1_decode(bytes),
			TextEncoding::UTF16 => {
				// Every string in a frame may carry its own BOM, only fall back to the
				// frame's byte order when this one doesn't.
				match Endianness::from_bom(bytes) {
					Some(endianness) => utf16_decode_bytes(&bytes[2..], endianness)?,
					None => utf16_decode_bytes(bytes, self.endianness)?,
				}
			},
			TextEncoding::UTF16BE => utf16_decode_bytes(bytes, Endianness::Big)?,
			TextEncoding::UTF8 => utf8_decode(bytes)?,
		};

		trim_end_nulls(&mut text);
		Ok(text)
	}
}

/// Scan `data` for a terminator of `terminator_len` bytes
///
/// With `strip_marker`, scanning begins at index 1 and the returned content excludes `data[0]`.
///
/// A string that runs off the end of `data` without a terminator extends to the end of `data`.
/// In that case `bytes_consumed` is `data.len()`.
pub(crate) fn delimit(data: &[u8], terminator_len: usize, strip_marker: bool) -> Delimited<'_> {
	let start = usize::from(strip_marker).min(data.len());

	let terminator_pos = match terminator_len {
		1 => data[start..]
			.iter()
			.position(|b| *b == 0)
			.map(|pos| start + pos),
		_ => data[start..]
			.chunks_exact(2)
			.position(|c| c == [0, 0])
			.map(|pos| start + pos * 2),
	};

	match terminator_pos {
		Some(end) => Delimited {
			content: &data[start..end],
			bytes_consumed: end + terminator_len,
		},
		None => Delimited {
			content: &data[start..],
			bytes_consumed: data.len(),
		},
	}
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	WINDOWS_1252
		.decode_without_bom_handling(bytes)
		.0
		.into_owned()
}

pub(crate) fn utf8_decode(bytes: &[u8]) -> Result<String> {
	std::str::from_utf8(bytes)
		.map(str::to_owned)
		.map_err(|_| Id3Error::new(ErrorKind::TextDecode("Expected a UTF-8 string")))
}

pub(crate) fn utf16_decode(words: &[u16]) -> Result<String> {
	String::from_utf16(words)
		.map_err(|_| Id3Error::new(ErrorKind::TextDecode("Given an invalid UTF-16 string")))
}

fn utf16_decode_bytes(bytes: &[u8], endianness: Endianness) -> Result<String> {
	if bytes.is_empty() {
		return Ok(String::new());
	}

	let unverified: Vec<u16> = bytes
		.chunks_exact(2)
		// In ID3v2, it is possible to have multiple UTF-16 strings separated by null.
		// This also makes it possible for us to encounter multiple BOMs in a single string.
		// We must filter them out.
		.filter_map(|c| match *c {
			[0xFF, 0xFE] | [0xFE, 0xFF] => None,
			[a, b] => Some(endianness.read_u16([a, b])),
			_ => None,
		})
		.collect();

	utf16_decode(&unverified)
}

pub(crate) fn trim_end_nulls(text: &mut String) {
	if text.ends_with('\0') {
		let new_len = text.trim_end_matches('\0').len();
		text.truncate(new_len);
	}
}
