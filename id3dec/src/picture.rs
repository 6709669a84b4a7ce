//! Picture types and formats found in attached picture frames

use std::fmt::{Display, Formatter};

/// MIME types for pictures.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum MimeType {
	/// PNG image
	Png,
	/// JPEG image
	Jpeg,
	/// TIFF image
	Tiff,
	/// BMP image
	Bmp,
	/// GIF image
	Gif,
	/// Some unknown MIME type
	Unknown(String),
}

impl MimeType {
	/// Get a `MimeType` from a string
	///
	/// # Examples
	///
	/// ```rust
	/// use id3dec::picture::MimeType;
	///
	/// assert_eq!(MimeType::from_str("image/jpeg"), MimeType::Jpeg);
	/// assert_eq!(
	/// 	MimeType::from_str("image/webp"),
	/// 	MimeType::Unknown(String::from("image/webp"))
	/// );
	/// ```
	#[must_use]
	#[allow(clippy::should_implement_trait)] // Infallible in contrast to FromStr
	pub fn from_str(mime_type: &str) -> Self {
		match mime_type {
			"image/jpeg" | "image/jpg" => Self::Jpeg,
			"image/png" => Self::Png,
			"image/tiff" => Self::Tiff,
			"image/bmp" => Self::Bmp,
			"image/gif" => Self::Gif,
			_ => Self::Unknown(mime_type.to_owned()),
		}
	}

	/// Get a `MimeType` from an ID3v2.2 image format
	///
	/// ID3v2.2 only defines `"PNG"` and `"JPG"`, anything else is `None`.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3dec::picture::MimeType;
	///
	/// assert_eq!(MimeType::from_v22_format(*b"JPG"), Some(MimeType::Jpeg));
	/// assert_eq!(MimeType::from_v22_format(*b"GIF"), None);
	/// ```
	pub fn from_v22_format(format: [u8; 3]) -> Option<Self> {
		match &format {
			b"PNG" => Some(Self::Png),
			b"JPG" => Some(Self::Jpeg),
			_ => None,
		}
	}

	/// Get a &str from a `MimeType`
	///
	/// # Examples
	///
	/// ```rust
	/// use id3dec::picture::MimeType;
	///
	/// assert_eq!(MimeType::Png.as_str(), "image/png");
	/// ```
	pub fn as_str(&self) -> &str {
		match self {
			Self::Jpeg => "image/jpeg",
			Self::Png => "image/png",
			Self::Tiff => "image/tiff",
			Self::Bmp => "image/bmp",
			Self::Gif => "image/gif",
			Self::Unknown(unknown) => unknown,
		}
	}
}

impl Display for MimeType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

macro_rules! picture_types {
	($($variant:ident = $value:literal => $description:literal),+ $(,)?) => {
		/// The picture type, according to ID3v2 APIC
		#[allow(missing_docs)]
		#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
		pub enum PictureType {
			$($variant,)+
			Undefined(u8),
		}

		impl PictureType {
			/// Get a `PictureType` from a u8 according to ID3v2 APIC
			pub fn from_u8(byte: u8) -> Self {
				match byte {
					$($value => Self::$variant,)+
					i => Self::Undefined(i),
				}
			}

			/// Get a `u8` from a `PictureType` according to ID3v2 APIC
			pub fn as_u8(self) -> u8 {
				match self {
					$(Self::$variant => $value,)+
					Self::Undefined(i) => i,
				}
			}

			/// A human readable description of the picture type
			///
			/// # Examples
			///
			/// ```rust
			/// use id3dec::picture::PictureType;
			///
			/// assert_eq!(PictureType::from_u8(3).description(), Some("Cover (front)"));
			/// assert_eq!(PictureType::from_u8(200).description(), None);
			/// ```
			pub fn description(self) -> Option<&'static str> {
				match self {
					$(Self::$variant => Some($description),)+
					Self::Undefined(_) => None,
				}
			}
		}
	};
}

picture_types! {
	Other = 0 => "Other",
	Icon = 1 => "32x32 pixels 'file icon' (PNG only)",
	OtherIcon = 2 => "Other file icon",
	CoverFront = 3 => "Cover (front)",
	CoverBack = 4 => "Cover (back)",
	Leaflet = 5 => "Leaflet page",
	Media = 6 => "Media (e.g. label side of CD)",
	LeadArtist = 7 => "Lead artist/lead performer/soloist",
	Artist = 8 => "Artist/performer",
	Conductor = 9 => "Conductor",
	Band = 10 => "Band/Orchestra",
	Composer = 11 => "Composer",
	Lyricist = 12 => "Lyricist/text writer",
	RecordingLocation = 13 => "Recording Location",
	DuringRecording = 14 => "During recording",
	DuringPerformance = 15 => "During performance",
	ScreenCapture = 16 => "Movie/video screen capture",
	BrightFish = 17 => "A bright coloured fish",
	Illustration = 18 => "Illustration",
	BandLogo = 19 => "Band/artist logotype",
	PublisherLogo = 20 => "Publisher/Studio logotype",
}

impl Display for PictureType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.description() {
			Some(description) => f.write_str(description),
			None => write!(f, "Undefined ({})", self.as_u8()),
		}
	}
}
