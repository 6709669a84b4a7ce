use crate::error::Result;
use crate::id3::v2::{FrameFlags, FrameHeader, FrameId};
use crate::util::text::{ResolvedEncoding, TextEncoding};

/// An `ID3v2` text frame
///
/// This covers all text information frames (`T***` in ID3v2.3/4, `T**` in ID3v2.2), except for the
/// user-defined `TXXX`/`TXX`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the text
	pub encoding: TextEncoding,
	/// The text itself
	pub value: String,
}

impl TextFrame {
	/// Create a frame that was never read from a tag, such as those converted from ID3v1
	pub(crate) fn new(id: FrameId, value: String) -> Self {
		// The encoding marker plus the Latin-1 text
		let size = u32::try_from(value.chars().count() + 1).unwrap_or(u32::MAX);

		Self {
			header: FrameHeader::new(id, FrameFlags::default(), size),
			encoding: TextEncoding::Latin1,
			value,
		}
	}

	/// Decode a text frame payload
	///
	/// Payloads with fewer than 2 bytes hold no text at all, and decode to an empty string.
	pub(crate) fn parse(header: FrameHeader, payload: &[u8]) -> Result<Self> {
		if payload.len() < 2 {
			let encoding = payload
				.first()
				.and_then(|b| TextEncoding::from_u8(*b))
				.unwrap_or(TextEncoding::Latin1);

			return Ok(Self {
				header,
				encoding,
				value: String::new(),
			});
		}

		let resolved = ResolvedEncoding::from_payload(payload)?;
		let text = resolved.delimit(payload, true);

		Ok(Self {
			header,
			encoding: resolved.encoding,
			value: resolved.decode(text.content)?,
		})
	}

	/// Get the frame's header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}
}
