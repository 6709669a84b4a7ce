//! ID3v1 items
//!
//! # ID3v1 notes
//!
//! ID3v1 is a fixed 128 byte block at the very end of a stream. It is only read to fill in fields an
//! ID3v2 tag is missing, or when a stream has no ID3v2 tag at all.
//!
//! ## Genres
//!
//! ID3v1 stores the genre as an index into [`GENRES`]. Indices past the end of the list are
//! rejected, unless reading in [`ParsingMode::Relaxed`](crate::config::ParsingMode::Relaxed).

pub(crate) mod constants;
pub(crate) mod read;

pub use constants::GENRES;

use crate::id3::tag::Tag;
use crate::id3::v2::{Frame, FrameId, FullTextFrame, TextFrame};

/// An ID3v1 tag
///
/// ## Conversions
///
/// ### To `Tag`
///
/// Every field becomes a frame with an ID3v2.2 ID, even when it is empty:
///
/// * `title` -> `TT2`
/// * `artist` -> `TP1`
/// * `album` -> `TAL`
/// * `year` -> `TYE`
/// * `genre` -> `TCO` (the *string* at [`GENRES`]\[index\], only when the genre is known)
/// * `comment` -> `COM`
/// * `track_number` -> `TRK` (ID3v1.1 only)
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Id3v1Tag {
	/// Track title, 30 bytes max
	pub title: String,
	/// Track artist, 30 bytes max
	pub artist: String,
	/// Album title, 30 bytes max
	pub album: String,
	/// Release year, 4 bytes max
	pub year: String,
	/// A short comment
	///
	/// A V1 tag has 30 bytes available for this, a V1.1 tag only has 28.
	pub comment: String,
	/// The track number, only present in ID3v1.1 tags
	pub track_number: Option<u8>,
	/// The track's genre, as an index into [`GENRES`]
	pub genre: Option<u8>,
}

impl Id3v1Tag {
	/// The name of the genre, if it is known
	///
	/// # Examples
	///
	/// ```rust
	/// use id3dec::id3::v1::Id3v1Tag;
	///
	/// let tag = Id3v1Tag {
	/// 	genre: Some(17),
	/// 	..Id3v1Tag::default()
	/// };
	/// assert_eq!(tag.genre_name(), Some("Rock"));
	/// ```
	pub fn genre_name(&self) -> Option<&'static str> {
		self.genre
			.and_then(|genre| GENRES.get(usize::from(genre)))
			.copied()
	}
}

impl From<Id3v1Tag> for Tag {
	fn from(input: Id3v1Tag) -> Self {
		let genre_name = input.genre_name();

		let mut frames = vec![
			text_frame("TT2", input.title),
			text_frame("TP1", input.artist),
			text_frame("TAL", input.album),
			text_frame("TYE", input.year),
		];

		if let Some(genre) = genre_name {
			frames.push(text_frame("TCO", String::from(genre)));
		}

		frames.push(Frame::FullText(FullTextFrame::comment(
			FrameId::Outdated("COM"),
			input.comment,
		)));

		if let Some(track_number) = input.track_number {
			frames.push(text_frame("TRK", track_number.to_string()));
		}

		Tag::new(None, None, frames)
	}
}

fn text_frame(id: &'static str, value: String) -> Frame {
	Frame::Text(TextFrame::new(FrameId::Outdated(id), value))
}
