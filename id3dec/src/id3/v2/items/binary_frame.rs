use crate::id3::v2::FrameHeader;

use data_encoding::HEXLOWER;

/// A frame stored as-is
///
/// This is used for every frame that doesn't have a dedicated decoder, such as `PRIV` or `POPM`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryFrame {
	pub(crate) header: FrameHeader,
	/// The frame's payload
	pub data: Vec<u8>,
}

impl BinaryFrame {
	pub(crate) fn new(header: FrameHeader, data: Vec<u8>) -> Self {
		Self { header, data }
	}

	/// Get the frame's header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}

	/// The payload as lowercase hex
	pub fn hex(&self) -> String {
		HEXLOWER.encode(&self.data)
	}
}
