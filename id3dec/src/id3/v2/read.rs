use super::frame::content::parse_content;
use super::frame::{Frame, FrameFlags, FrameHeader, FrameId};
use super::header::{ExtendedHeader, Id3v2Header, Id3v2Version};
use super::version::{FrameKind, VersionParams};
use crate::config::{ParseOptions, ParsingMode};
use crate::error::Result;
use crate::id3::tag::Tag;
use crate::macros::{err, parse_mode_choice, try_vec};

use std::io::{Read, Seek, SeekFrom};

use data_encoding::HEXLOWER;

/// Read the body of an ID3v2 tag, following its header
pub(crate) fn parse_id3v2<R>(
	reader: &mut R,
	mut header: Id3v2Header,
	parse_options: ParseOptions,
) -> Result<Tag>
where
	R: Read + Seek,
{
	log::debug!(
		"Parsing ID3v2 tag, size: {}, version: {:?}",
		header.size,
		header.version
	);

	let mut remaining = header.size;

	let mut extended_header = None;
	if header.flags.extended_header {
		let ext = ExtendedHeader::parse(reader, header.version, remaining)?;
		remaining -= ext.total_len();
		extended_header = Some(ext);
	}

	let mut frames = Vec::new();
	let mut frame_reader = FrameReader::new(reader, header.version, remaining, parse_options);
	loop {
		match frame_reader.next_frame()? {
			ParsedFrame::Next(frame) => frames.push(frame),
			// Unknown or undecodable, already consumed
			ParsedFrame::Skip => {},
			ParsedFrame::Padding(padding_size) => {
				header.padding_size = padding_size;
				break;
			},
			ParsedFrame::Eof => break,
		}
	}

	Ok(Tag::new(Some(header), extended_header, frames))
}

pub(crate) enum ParsedFrame {
	Next(Frame),
	Skip,
	/// The rest of the tag is padding, holding the padding size
	Padding(u32),
	Eof,
}

/// Walks the frames of a tag body
///
/// The reader never consumes more than the body size it was created with.
pub(crate) struct FrameReader<'a, R> {
	reader: &'a mut R,
	params: &'static VersionParams,
	parse_options: ParseOptions,
	remaining: u32,
}

impl<'a, R> FrameReader<'a, R>
where
	R: Read + Seek,
{
	pub(crate) fn new(
		reader: &'a mut R,
		version: Id3v2Version,
		body_size: u32,
		parse_options: ParseOptions,
	) -> Self {
		Self {
			reader,
			params: VersionParams::for_version(version),
			parse_options,
			remaining: body_size,
		}
	}

	pub(crate) fn next_frame(&mut self) -> Result<ParsedFrame> {
		if self.remaining == 0 {
			return Ok(ParsedFrame::Eof);
		}

		let mut header = [0; 10];
		let header_len = self.params.header_len();

		self.reader.read_exact(&mut header[..1])?;
		if header[0] == 0 {
			log::trace!("Found {} bytes of padding", self.remaining);
			return self.skip_rest(1);
		}

		if header_len as u32 > self.remaining {
			return self.overrun(1);
		}

		self.reader.read_exact(&mut header[1..header_len])?;

		let id_len = self.params.id_len;
		let size_end = id_len + self.params.size_len;

		let id = &header[..id_len];
		let size = self.params.frame_size(&header[id_len..size_end]);
		let flags = match self.params.flags_len {
			0 => FrameFlags::default(),
			_ => FrameFlags {
				status: header[size_end],
				format: header[size_end + 1],
			},
		};

		log::trace!(
			"Read frame header, ID: {:?}, size: {}",
			String::from_utf8_lossy(id),
			size
		);

		if size > self.remaining - header_len as u32 {
			return self.overrun(header_len);
		}

		self.remaining -= header_len as u32 + size;

		let spec = std::str::from_utf8(id)
			.ok()
			.and_then(|id| self.params.lookup(id));
		let Some(spec) = spec else {
			log::warn!(
				"Unknown frame ID {:?}, skipping {} bytes",
				String::from_utf8_lossy(id),
				size
			);
			self.skip_payload(size)?;
			return Ok(ParsedFrame::Skip);
		};

		if spec.kind == FrameKind::Picture && !self.parse_options.read_cover_art {
			log::trace!("Skipping picture frame");
			self.skip_payload(size)?;
			return Ok(ParsedFrame::Skip);
		}

		let mut payload = try_vec![0; size as usize];
		self.reader.read_exact(&mut payload)?;

		let frame_header = FrameHeader::new(FrameId::from_static(spec.id), flags, size);
		match parse_content(frame_header, spec.kind, &payload, self.params.version) {
			Ok(frame) => Ok(ParsedFrame::Next(frame)),
			Err(err) => {
				if self.parse_options.parsing_mode == ParsingMode::Strict || !err.is_frame_local() {
					return Err(err);
				}

				log::warn!(
					"Failed to decode frame \"{}\", skipping: {}, data: {}",
					spec.id,
					err,
					HEXLOWER.encode(&payload)
				);
				Ok(ParsedFrame::Skip)
			},
		}
	}

	// Consume a payload that won't be decoded, without holding it in memory
	fn skip_payload(&mut self, size: u32) -> Result<()> {
		let size = u64::from(size);
		let skipped = std::io::copy(&mut self.reader.by_ref().take(size), &mut std::io::sink())?;
		if skipped < size {
			err!(TooShort);
		}

		Ok(())
	}

	// A frame that claims more bytes than the tag has left
	fn overrun(&mut self, already_read: usize) -> Result<ParsedFrame> {
		let parse_mode = self.parse_options.parsing_mode;
		parse_mode_choice!(
			parse_mode,
			RELAXED: {
				log::warn!("Frame overruns the tag body, treating the rest of the tag as padding");
				self.skip_rest(already_read)
			},
			DEFAULT: err!(TooShort)
		)
	}

	// Everything left in the body is padding, `already_read` bytes of which have been consumed
	fn skip_rest(&mut self, already_read: usize) -> Result<ParsedFrame> {
		let padding_size = self.remaining;
		let to_skip = i64::from(padding_size) - already_read as i64;

		self.reader.seek(SeekFrom::Current(to_skip))?;
		self.remaining = 0;

		Ok(ParsedFrame::Padding(padding_size))
	}
}
