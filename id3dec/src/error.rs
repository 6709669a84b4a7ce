//! Contains the errors that can arise within id3dec
//!
//! The primary error is [`Id3Error`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, Id3Error>`
pub type Result<T> = std::result::Result<T, Id3Error>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Structural errors, these abort the current decode
	/// The source was exhausted before a mandatory field or payload could be read
	TooShort,
	/// The expected magic marker (`"ID3"` or `"TAG"`) is absent
	///
	/// This is not a corruption signal. It means the source has no tag of the requested version,
	/// and the caller should try the other version (or treat the file as having no metadata).
	NoHeader,
	/// The extended header is truncated or declares a size below the minimum of 6 bytes
	CorruptExtendedHeader,
	/// The container declares a major version outside of (2, 3, 4)
	UnknownMajorVersion(u8, u8),
	/// An ID3v2.2 tag with its compression flag set
	///
	/// At the time the ID3v2.2 specification was written, a compression scheme wasn't decided.
	/// As such, it is recommended to ignore the tag entirely.
	V2Compression,

	// Frame-level errors, these only cost the frame they occur in
	/// A text payload starts with an encoding marker outside of `0..=3`
	UnknownEncoding(u8),
	/// An ID3v2.2 picture frame with a format other than `"PNG"` or `"JPG"`
	UnknownPictureFormat(String),
	/// Errors that arise while decoding text
	TextDecode(&'static str),

	// ID3v1
	/// The ID3v1 genre index is outside of [`GENRES`](crate::id3::v1::GENRES)
	UnknownGenre(u8),

	// Resource limits
	/// Attempting to read an abnormally large amount of data
	TooMuchData,
	/// Failure to allocate enough memory
	Alloc(TryReserveError),

	/// Represents all other cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// Errors that could occur within id3dec
pub struct Id3Error {
	pub(crate) kind: ErrorKind,
}

impl Id3Error {
	/// Create an `Id3Error` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3dec::error::{ErrorKind, Id3Error};
	///
	/// let no_header = Id3Error::new(ErrorKind::NoHeader);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3dec::error::{ErrorKind, Id3Error};
	///
	/// let no_header = Id3Error::new(ErrorKind::NoHeader);
	/// if let ErrorKind::NoHeader = no_header.kind() {
	/// 	println!("This file has no metadata");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	/// Whether this error only invalidates a single frame
	///
	/// Frame-local errors are raised while decoding a payload that has already been read in full,
	/// so the frame iterator is still positioned correctly and can move on to the next frame.
	pub fn is_frame_local(&self) -> bool {
		matches!(
			self.kind,
			ErrorKind::UnknownEncoding(_)
				| ErrorKind::UnknownPictureFormat(_)
				| ErrorKind::TextDecode(_)
				| ErrorKind::TooShort
		)
	}
}

impl std::error::Error for Id3Error {}

impl Debug for Id3Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<std::io::Error> for Id3Error {
	fn from(input: std::io::Error) -> Self {
		// A short read is a format problem, not an I/O problem
		if input.kind() == std::io::ErrorKind::UnexpectedEof {
			return Self {
				kind: ErrorKind::TooShort,
			};
		}

		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<TryReserveError> for Id3Error {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}

impl Display for Id3Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),
			ErrorKind::Alloc(ref err) => write!(f, "{err}"),

			ErrorKind::TooShort => write!(f, "Invalid file: too short"),
			ErrorKind::NoHeader => write!(f, "Invalid file: missing tag header"),
			ErrorKind::CorruptExtendedHeader => {
				write!(f, "Invalid file: extended header is too short")
			},
			ErrorKind::UnknownMajorVersion(major, minor) => write!(
				f,
				"Found an invalid version (v{major}.{minor}), expected any major revision in: (2, \
				 3, 4)"
			),
			ErrorKind::V2Compression => write!(f, "Encountered a compressed ID3v2.2 tag"),
			ErrorKind::UnknownEncoding(byte) => {
				write!(f, "Unknown text encoding marker: {byte:#04x}")
			},
			ErrorKind::UnknownPictureFormat(ref format) => {
				write!(f, "Picture: Found unexpected format \"{format}\"")
			},
			ErrorKind::TextDecode(message) => write!(f, "Text decoding: {message}"),
			ErrorKind::UnknownGenre(index) => write!(f, "Unknown ID3v1 genre index: {index}"),
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read an abnormally large amount of data"
			),
		}
	}
}
