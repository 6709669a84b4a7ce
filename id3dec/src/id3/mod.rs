//! ID3 specific items
//!
//! A stream can hold an ID3v2 tag at its start, an ID3v1 tag at its end, or both. [`read_from`]
//! prefers the ID3v2 tag, and only consults the ID3v1 tag when there's no ID3v2 tag or when the
//! ID3v2 tag lacks one of the core fields (see [`CanonicalFields`]).

mod tag;
pub mod v1;
pub mod v2;

pub use tag::{CanonicalFields, Tag};

use crate::config::ParseOptions;
use crate::error::{ErrorKind, Id3Error, Result};
use v1::Id3v1Tag;
use v2::Id3v2Header;
use v2::read::parse_id3v2;

use std::io::{Read, Seek};

/// Read the ID3 tag from a stream
///
/// The ID3v2 tag is read from the current position of the stream, which should be the start of a
/// candidate tag. If there is no ID3v2 tag there, the ID3v1 tag at the end of the stream is
/// returned.
///
/// When the ID3v2 tag is missing any of the title, artist, album, year, or genre, and
/// [`ParseOptions::fallback_to_id3v1`] is enabled, those fields are filled in from the ID3v1 tag,
/// if one exists. Comments are never taken from the ID3v1 tag in this case.
///
/// # Errors
///
/// * The stream has neither an ID3v2 nor an ID3v1 tag ([`ErrorKind::NoHeader`])
/// * The ID3v2 tag is malformed, see [`ErrorKind`]
/// * The ID3v1 tag is malformed, when there is no ID3v2 tag
///
/// # Examples
///
/// ```rust
/// use id3dec::config::ParseOptions;
/// use std::io::Cursor;
///
/// # fn main() -> id3dec::error::Result<()> {
/// let bytes = [
/// 	b'I', b'D', b'3', 3, 0, 0, 0, 0, 0, 0x11, // Header
/// 	b'T', b'I', b'T', b'2', 0, 0, 0, 7, 0, 0, // Frame header
/// 	0, b'H', b'e', b'l', b'l', b'o', 0, // Frame content
/// ];
///
/// let tag = id3dec::read_from(&mut Cursor::new(bytes), ParseOptions::new())?;
/// assert_eq!(tag.title(), Some("Hello"));
/// # Ok(()) }
/// ```
pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Tag>
where
	R: Read + Seek,
{
	let header = match Id3v2Header::parse(reader) {
		Ok(header) => header,
		Err(err) if is_missing_tag(&err) => {
			log::debug!("No ID3v2 tag found ({err}), falling back to ID3v1");
			return match Id3v1Tag::read_from(reader, parse_options.parsing_mode) {
				Ok(id3v1) => Ok(Tag::from(id3v1)),
				// Neither tag exists, report on the ID3v2 tag
				Err(id3v1_err) if is_missing_tag(&id3v1_err) => Err(err),
				Err(id3v1_err) => Err(id3v1_err),
			};
		},
		Err(err) => return Err(err),
	};

	let mut tag = parse_id3v2(reader, header, parse_options)?;

	if parse_options.fallback_to_id3v1 && tag.missing_core_info() {
		log::debug!("ID3v2 tag is missing core fields, checking for an ID3v1 tag");

		match Id3v1Tag::read_from(reader, parse_options.parsing_mode) {
			Ok(id3v1) => {
				log::debug!("Merging ID3v1 tag");
				tag.merge_missing(&Tag::from(id3v1));
			},
			Err(err) => log::debug!("Unable to use ID3v1 tag: {err}"),
		}
	}

	Ok(tag)
}

/// Read the ID3v2 and ID3v1 tags of a stream separately
///
/// As with [`read_from`], the ID3v2 tag is read from the current position of the stream. Unlike
/// [`read_from`], the tags are not merged. Either tag may be `None`, but not both.
///
/// # Errors
///
/// * The stream has neither an ID3v2 nor an ID3v1 tag ([`ErrorKind::NoHeader`])
/// * The stream has no ID3v1 tag, and ends within the ID3v2 header ([`ErrorKind::TooShort`])
/// * Either tag is malformed, see [`ErrorKind`]
pub fn read_all<R>(reader: &mut R, parse_options: ParseOptions) -> Result<(Option<Tag>, Option<Tag>)>
where
	R: Read + Seek,
{
	let mut id3v2_err = None;
	let id3v2 = match Id3v2Header::parse(reader) {
		Ok(header) => Some(parse_id3v2(reader, header, parse_options)?),
		Err(err) if is_missing_tag(&err) => {
			id3v2_err = Some(err);
			None
		},
		Err(err) => return Err(err),
	};

	let id3v1 = match Id3v1Tag::read_from(reader, parse_options.parsing_mode) {
		Ok(id3v1) => Some(Tag::from(id3v1)),
		Err(err) if is_missing_tag(&err) => None,
		Err(err) => return Err(err),
	};

	if id3v2.is_none() && id3v1.is_none() {
		// Neither tag exists, report on the ID3v2 tag
		return Err(id3v2_err.unwrap_or_else(|| Id3Error::new(ErrorKind::NoHeader)));
	}

	Ok((id3v2, id3v1))
}

// The stream holds no tag of the version being searched for
fn is_missing_tag(err: &Id3Error) -> bool {
	matches!(err.kind(), ErrorKind::NoHeader | ErrorKind::TooShort)
}
