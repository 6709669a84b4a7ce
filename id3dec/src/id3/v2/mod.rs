//! ID3v2 items and utilities
//!
//! ## Important notes
//!
//! * Frames are read as stored. Unsynchronised tags (see [`Id3v2Header::unsynchronised`]) are
//!   not reversed, and frame level compression or encryption flags are only exposed through
//!   [`FrameFlags`].
//! * Frame IDs are never upgraded between versions. An ID3v2.2 tag holds `TT2`, an ID3v2.3 tag
//!   holds `TIT2`. Use the canonical accessors on [`Tag`](crate::id3::Tag) to avoid caring about
//!   the difference.
//! * Frames with IDs not defined for the tag's version are skipped.

mod frame;
mod header;
mod items;
pub(crate) mod read;
pub mod util;
mod version;

pub use frame::{Frame, FrameFlags, FrameHeader, FrameId};
pub use header::{ExtendedHeader, Id3v2Header, Id3v2TagFlags, Id3v2Version};
pub use items::{
	AttachedPictureFrame, BinaryFrame, FullTextFrame, TextFrame, UniqueFileIdentifierFrame,
};
pub use version::frame_description;
