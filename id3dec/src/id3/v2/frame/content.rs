use super::{Frame, FrameHeader};
use crate::error::Result;
use crate::id3::v2::Id3v2Version;
use crate::id3::v2::items::{
	AttachedPictureFrame, BinaryFrame, FullTextFrame, TextFrame, UniqueFileIdentifierFrame,
};
use crate::id3::v2::version::FrameKind;

/// Decode a frame payload with the decoder its table entry names
pub(in crate::id3::v2) fn parse_content(
	header: FrameHeader,
	kind: FrameKind,
	payload: &[u8],
	version: Id3v2Version,
) -> Result<Frame> {
	log::trace!("Decoding frame \"{}\" as {:?}", header.id, kind);

	Ok(match kind {
		FrameKind::Text => Frame::Text(TextFrame::parse(header, payload)?),
		FrameKind::FullText => {
			Frame::FullText(FullTextFrame::parse_with_language(header, payload)?)
		},
		FrameKind::Described => Frame::FullText(FullTextFrame::parse_described(header, payload)?),
		FrameKind::Picture => {
			Frame::Picture(AttachedPictureFrame::parse(header, payload, version)?)
		},
		FrameKind::UniqueFileIdentifier => {
			Frame::UniqueFileIdentifier(UniqueFileIdentifierFrame::parse(header, payload)?)
		},
		FrameKind::Data => Frame::Binary(BinaryFrame::new(header, payload.to_vec())),
	})
}
