use crate::error::Result;
use crate::id3::v2::{FrameHeader, Id3v2Version};
use crate::macros::err;
use crate::picture::{MimeType, PictureType};
use crate::util::text::{ResolvedEncoding, TextEncoding, latin1_decode};

/// An `ID3v2` attached picture frame
///
/// This is used for both `PIC` (ID3v2.2) and `APIC` (ID3v2.3/4).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttachedPictureFrame {
	pub(crate) header: FrameHeader,
	/// The encoding of the description
	pub encoding: TextEncoding,
	/// The picture type
	pub picture_type: PictureType,
	/// The picture's MIME type
	pub mime_type: MimeType,
	/// A description of the picture
	pub description: String,
	/// The raw image data
	pub data: Vec<u8>,
}

impl AttachedPictureFrame {
	/// Decode a picture frame payload
	///
	/// # Errors
	///
	/// ID3v2.2:
	///
	/// * The payload is shorter than 7 bytes
	/// * The image format is not "PNG" or "JPG"
	///
	/// ID3v2.3/4:
	///
	/// * The payload ends before the picture type
	pub(crate) fn parse(header: FrameHeader, payload: &[u8], version: Id3v2Version) -> Result<Self> {
		match version {
			Id3v2Version::V2 => Self::parse_v22(header, payload),
			Id3v2Version::V3 | Id3v2Version::V4 => Self::parse_v23(header, payload),
		}
	}

	// encoding, format[3], picture type, description, data
	fn parse_v22(header: FrameHeader, payload: &[u8]) -> Result<Self> {
		if payload.len() < 7 {
			err!(TooShort);
		}

		let resolved = ResolvedEncoding::from_payload(payload)?;

		let format = [payload[1], payload[2], payload[3]];
		let Some(mime_type) = MimeType::from_v22_format(format) else {
			err!(UnknownPictureFormat(latin1_decode(&format)));
		};

		let picture_type = PictureType::from_u8(payload[4]);
		Self::read_description_and_data(header, resolved, mime_type, picture_type, &payload[5..])
	}

	// encoding, MIME type, picture type, description, data
	fn parse_v23(header: FrameHeader, payload: &[u8]) -> Result<Self> {
		let resolved = ResolvedEncoding::from_payload(payload)?;

		// The MIME type is always Latin-1, regardless of the frame's encoding
		let mime = ResolvedEncoding::LATIN1.delimit(payload, true);
		let Some(&picture_type) = payload.get(mime.bytes_consumed) else {
			err!(TooShort);
		};

		let mime_type = MimeType::from_str(&ResolvedEncoding::LATIN1.decode(mime.content)?);
		let picture_type = PictureType::from_u8(picture_type);
		Self::read_description_and_data(
			header,
			resolved,
			mime_type,
			picture_type,
			&payload[mime.bytes_consumed + 1..],
		)
	}

	fn read_description_and_data(
		header: FrameHeader,
		resolved: ResolvedEncoding,
		mime_type: MimeType,
		picture_type: PictureType,
		rest: &[u8],
	) -> Result<Self> {
		let description = resolved.delimit(rest, false);

		Ok(Self {
			header,
			encoding: resolved.encoding,
			picture_type,
			mime_type,
			description: resolved.decode(description.content)?,
			data: rest[description.bytes_consumed..].to_vec(),
		})
	}

	/// Get the frame's header
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}

	pub(crate) fn summary(&self) -> String {
		format!(
			"{} of type {} ({} bytes)",
			self.description,
			self.mime_type,
			self.data.len()
		)
	}
}
