pub(super) mod content;

use super::items::{
	AttachedPictureFrame, BinaryFrame, FullTextFrame, TextFrame, UniqueFileIdentifierFrame,
};

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// An `ID3v2` frame ID
///
/// Frame IDs only ever come from the per-version frame tables, so they are always one of the
/// IDs defined by ID3v2.2, ID3v2.3, or ID3v2.4.
#[derive(PartialEq, Clone, Copy, Debug, Eq, Hash)]
pub enum FrameId {
	/// A 4 character `ID3v2.3/4` frame ID
	Valid(&'static str),
	/// A 3 character `ID3v2.2` frame ID
	Outdated(&'static str),
}

impl FrameId {
	pub(crate) fn from_static(id: &'static str) -> Self {
		if id.len() == 3 {
			Self::Outdated(id)
		} else {
			Self::Valid(id)
		}
	}

	/// Whether this frame ID represents an outdated (ID3v2.2) ID
	pub fn is_outdated(&self) -> bool {
		matches!(self, FrameId::Outdated(_))
	}

	/// Extracts the string from the ID
	pub fn as_str(&self) -> &'static str {
		match self {
			FrameId::Valid(v) | FrameId::Outdated(v) => v,
		}
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The raw status and format flags of a frame
///
/// ID3v2.2 frames have no flags, so both bytes are always zero for them. The meaning of the
/// individual bits differs between ID3v2.3 and ID3v2.4.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameFlags {
	/// The status byte (first flag byte)
	pub status: u8,
	/// The format byte (second flag byte)
	pub format: u8,
}

/// An ID3v2 frame header
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameHeader {
	pub(crate) id: FrameId,
	pub(crate) flags: FrameFlags,
	pub(crate) size: u32,
}

impl FrameHeader {
	pub(crate) const fn new(id: FrameId, flags: FrameFlags, size: u32) -> Self {
		Self { id, flags, size }
	}

	/// Get the ID of the frame
	pub fn id(&self) -> FrameId {
		self.id
	}

	/// Get the frame's flags
	pub fn flags(&self) -> FrameFlags {
		self.flags
	}

	/// The declared size of the frame payload
	pub fn size(&self) -> u32 {
		self.size
	}
}

/// Represents an `ID3v2` frame
///
/// Every variant carries its own [`FrameHeader`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
	/// A single string, used by all text information frames
	Text(TextFrame),
	/// A frame with a description and a body, optionally with a language (`COMM`, `USLT`, `TXXX`, ...)
	FullText(FullTextFrame),
	/// Opaque data, used for every frame without a dedicated decoder
	Binary(BinaryFrame),
	/// Represents a "PIC" (ID3v2.2) / "APIC" (ID3v2.3+) frame
	Picture(AttachedPictureFrame),
	/// Represents a "UFI" (ID3v2.2) / "UFID" (ID3v2.3+) frame
	UniqueFileIdentifier(UniqueFileIdentifierFrame),
}

impl Frame {
	/// Get the frame's header
	pub fn header(&self) -> &FrameHeader {
		match self {
			Frame::Text(frame) => &frame.header,
			Frame::FullText(frame) => &frame.header,
			Frame::Binary(frame) => &frame.header,
			Frame::Picture(frame) => &frame.header,
			Frame::UniqueFileIdentifier(frame) => &frame.header,
		}
	}

	/// Get the ID of the frame
	pub fn id(&self) -> FrameId {
		self.header().id
	}

	/// Get the flags for the frame
	pub fn flags(&self) -> FrameFlags {
		self.header().flags
	}

	/// The declared size of the frame payload
	pub fn size(&self) -> u32 {
		self.header().size
	}

	/// A human readable rendering of the frame's value
	///
	/// * Text frames: the text
	/// * Full text frames: the body, not the description
	/// * Binary frames: the data as lowercase hex
	/// * Pictures: a summary of the description, MIME type, and size
	/// * Unique file identifiers: the identifier as lowercase hex, followed by the owner
	pub fn text(&self) -> Cow<'_, str> {
		match self {
			Frame::Text(frame) => Cow::Borrowed(&frame.value),
			Frame::FullText(frame) => Cow::Borrowed(&frame.content),
			Frame::Binary(frame) => Cow::Owned(frame.hex()),
			Frame::Picture(frame) => Cow::Owned(frame.summary()),
			Frame::UniqueFileIdentifier(frame) => Cow::Owned(frame.summary()),
		}
	}

	/// The raw byte rendering of the frame's value
	///
	/// For textual frames, this is the decoded text as UTF-8. For all others, this is the
	/// frame's binary content (image data, identifier, etc.).
	pub fn as_bytes(&self) -> &[u8] {
		match self {
			Frame::Text(frame) => frame.value.as_bytes(),
			Frame::FullText(frame) => frame.content.as_bytes(),
			Frame::Binary(frame) => &frame.data,
			Frame::Picture(frame) => &frame.data,
			Frame::UniqueFileIdentifier(frame) => &frame.identifier,
		}
	}
}

impl Display for Frame {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.text())
	}
}
