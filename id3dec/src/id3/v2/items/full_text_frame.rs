use crate::error::Result;
use crate::id3::v2::{FrameFlags, FrameHeader, FrameId};
use crate::macros::err;
use crate::util::text::{ResolvedEncoding, TextEncoding, latin1_decode};

/// A frame holding a description and a body
///
/// Comments (`COMM`) and unsynchronised lyrics (`USLT`) additionally carry a language.
/// User defined text (`TXXX`) and URL (`WXXX`) frames do not.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FullTextFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description and body
	pub encoding: TextEncoding,
	/// ISO-639-2 language code, lowercased
	///
	/// The placeholder `"xxx"` is read as `"eng"`.
	pub language: Option<String>,
	/// Content description
	pub description: String,
	/// The actual frame content
	pub content: String,
}

impl FullTextFrame {
	/// Create a comment that was never read from an ID3v2 tag, such as one converted from ID3v1
	pub(crate) fn comment(id: FrameId, content: String) -> Self {
		// Encoding marker, language, empty description terminator, Latin-1 content
		let size = u32::try_from(content.chars().count() + 5).unwrap_or(u32::MAX);

		Self {
			header: FrameHeader::new(id, FrameFlags::default(), size),
			encoding: TextEncoding::Latin1,
			language: None,
			description: String::new(),
			content,
		}
	}

	/// Decode a payload of the form `encoding, language[3], description, body`
	pub(crate) fn parse_with_language(header: FrameHeader, payload: &[u8]) -> Result<Self> {
		let resolved = ResolvedEncoding::from_payload(payload)?;
		if payload.len() < 4 {
			err!(TooShort);
		}

		let mut language = latin1_decode(&payload[1..4]).to_ascii_lowercase();
		if language == "xxx" {
			language = String::from("eng");
		}

		let (description, content) = Self::read_strings(resolved, &payload[4..])?;
		Ok(Self {
			header,
			encoding: resolved.encoding,
			language: Some(language),
			description,
			content,
		})
	}

	/// Decode a payload of the form `encoding, description, body`
	pub(crate) fn parse_described(header: FrameHeader, payload: &[u8]) -> Result<Self> {
		let resolved = ResolvedEncoding::from_payload(payload)?;

		let description = resolved.delimit(payload, true);
		let content = resolved.delimit(&payload[description.bytes_consumed..], false);

		Ok(Self {
			header,
			encoding: resolved.encoding,
			language: None,
			description: resolved.decode(description.content)?,
			content: resolved.decode(content.content)?,
		})
	}

	// Two consecutive strings, with no encoding marker in front of them
	fn read_strings(resolved: ResolvedEncoding, strings: &[u8]) -> Result<(String, String)> {
		let description = resolved.delimit(strings, false);
		let content = resolved.delimit(&strings[description.bytes_consumed..], false);

		Ok((
			resolved.decode(description.content)?,
			resolved.decode(content.content)?,
		))
	}

	/// Get the frame's header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}
}
