use crate::error::Result;
use crate::id3::v2::FrameHeader;
use crate::util::text::ResolvedEncoding;

use data_encoding::HEXLOWER;

/// An `ID3v2` unique file identifier frame (UFID/UFI)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UniqueFileIdentifierFrame {
	pub(crate) header: FrameHeader,
	/// The non-empty owner of the identifier, usually a URL
	pub owner: String,
	/// The binary payload, up to 64 bytes
	pub identifier: Vec<u8>,
}

impl UniqueFileIdentifierFrame {
	/// Decode a UFID payload
	///
	/// The owner is always a null terminated Latin-1 string, with no encoding marker in front.
	pub(crate) fn parse(header: FrameHeader, payload: &[u8]) -> Result<Self> {
		let owner = ResolvedEncoding::LATIN1.delimit(payload, false);

		Ok(Self {
			header,
			owner: ResolvedEncoding::LATIN1.decode(owner.content)?,
			identifier: payload[owner.bytes_consumed..].to_vec(),
		})
	}

	/// Get the frame's header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}

	pub(crate) fn summary(&self) -> String {
		format!("{} ({})", HEXLOWER.encode(&self.identifier), self.owner)
	}
}
