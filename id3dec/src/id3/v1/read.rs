use super::Id3v1Tag;
use super::constants::{GENRES, ID3V1_TAG_LEN, ID3V1_TAG_MARKER};
use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::{err, parse_mode_choice};
use crate::util::text::latin1_decode;

use std::io::{Read, Seek, SeekFrom};

impl Id3v1Tag {
	/// Read the ID3v1 tag at the end of `reader`
	///
	/// The reader is left positioned at the end of the stream.
	pub(crate) fn read_from<R>(reader: &mut R, parse_mode: ParsingMode) -> Result<Self>
	where
		R: Read + Seek,
	{
		log::debug!("Reading ID3v1 tag");

		let stream_len = reader.seek(SeekFrom::End(0))?;
		if stream_len < ID3V1_TAG_LEN as u64 {
			err!(TooShort);
		}

		reader.seek(SeekFrom::End(-(ID3V1_TAG_LEN as i64)))?;

		let mut block = [0; ID3V1_TAG_LEN];
		reader.read_exact(&mut block)?;

		Self::parse(block, parse_mode)
	}

	pub(crate) fn parse(block: [u8; ID3V1_TAG_LEN], parse_mode: ParsingMode) -> Result<Self> {
		if block[..3] != ID3V1_TAG_MARKER {
			err!(NoHeader);
		}

		let fields = &block[3..];

		// Determine the range of the comment (30 bytes for ID3v1 and 28 for ID3v1.1)
		// We check for the null terminator 28 bytes in, and for a non-zero track number after it.
		let (comment_range, track_number) = if fields[122] == 0 && fields[123] != 0 {
			(94_usize..122, Some(fields[123]))
		} else {
			(94..124, None)
		};

		let genre_index = fields[124];
		let genre = if usize::from(genre_index) < GENRES.len() {
			Some(genre_index)
		} else {
			parse_mode_choice!(
				parse_mode,
				RELAXED: {
					log::warn!("ID3v1 genre index {} is out of range, ignoring", genre_index);
					None
				},
				DEFAULT: err!(UnknownGenre(genre_index))
			)
		};

		Ok(Self {
			title: decode_text(&fields[..30]),
			artist: decode_text(&fields[30..60]),
			album: decode_text(&fields[60..90]),
			year: decode_text(&fields[90..94]),
			comment: decode_text(&fields[comment_range]),
			track_number,
			genre,
		})
	}
}

// Fields are padded with trailing zeros
fn decode_text(data: &[u8]) -> String {
	let end = data.iter().rposition(|b| *b != 0).map_or(0, |pos| pos + 1);
	latin1_decode(&data[..end])
}
