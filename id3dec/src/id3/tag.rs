use crate::id3::v2::{ExtendedHeader, Frame, Id3v2Header};

/// The canonical roles a frame can fill
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Role {
	Title,
	Artist,
	Album,
	Year,
	Genre,
	Comment,
}

impl Role {
	fn of(id: &str) -> Option<Self> {
		match id {
			"TT2" | "TIT2" => Some(Self::Title),
			"TP1" | "TPE1" => Some(Self::Artist),
			"TAL" | "TALB" => Some(Self::Album),
			"TYE" | "TYER" | "TDRC" => Some(Self::Year),
			"TCO" | "TCON" => Some(Self::Genre),
			"COM" | "COMM" => Some(Self::Comment),
			_ => None,
		}
	}
}

/// The version independent view of a tag's core fields
///
/// This is derived from a list of frames, recognizing both the ID3v2.2 and ID3v2.3/4 spelling of
/// every role:
///
/// | Role    | IDs                        |
/// |---------|----------------------------|
/// | title   | `TT2`, `TIT2`              |
/// | artist  | `TP1`, `TPE1`              |
/// | album   | `TAL`, `TALB`              |
/// | year    | `TYE`, `TYER`, `TDRC`      |
/// | genre   | `TCO`, `TCON`              |
/// | comment | `COM`, `COMM` (all of them)|
///
/// When a single valued role appears more than once, the last frame wins.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct CanonicalFields {
	title: Option<String>,
	artist: Option<String>,
	album: Option<String>,
	year: Option<String>,
	genre: Option<String>,
	comments: Vec<String>,
}

impl CanonicalFields {
	/// Derive the canonical fields from an ordered list of frames
	///
	/// # Examples
	///
	/// ```rust
	/// use id3dec::id3::CanonicalFields;
	///
	/// let fields = CanonicalFields::from_frames(&[]);
	/// assert!(fields.missing_core_info());
	/// assert!(fields.comments().is_empty());
	/// ```
	pub fn from_frames(frames: &[Frame]) -> Self {
		let mut fields = Self::default();

		for frame in frames {
			let Some(role) = Role::of(frame.id().as_str()) else {
				continue;
			};

			let value = frame.text().into_owned();
			match role {
				Role::Title => fields.title = Some(value),
				Role::Artist => fields.artist = Some(value),
				Role::Album => fields.album = Some(value),
				Role::Year => fields.year = Some(value),
				Role::Genre => fields.genre = Some(value),
				Role::Comment => fields.comments.push(value),
			}
		}

		fields
	}

	/// Whether any of the title, artist, album, year, or genre are unset
	pub fn missing_core_info(&self) -> bool {
		self.title.is_none()
			|| self.artist.is_none()
			|| self.album.is_none()
			|| self.year.is_none()
			|| self.genre.is_none()
	}

	/// Adopt the values of `other` for every single valued role that is unset
	///
	/// Comments are left untouched.
	pub fn merge_missing(&mut self, other: &CanonicalFields) {
		fn fill(dst: &mut Option<String>, src: Option<&String>) {
			if dst.is_none() {
				*dst = src.cloned();
			}
		}

		fill(&mut self.title, other.title.as_ref());
		fill(&mut self.artist, other.artist.as_ref());
		fill(&mut self.album, other.album.as_ref());
		fill(&mut self.year, other.year.as_ref());
		fill(&mut self.genre, other.genre.as_ref());
	}

	/// The title
	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	/// The artist
	pub fn artist(&self) -> Option<&str> {
		self.artist.as_deref()
	}

	/// The album
	pub fn album(&self) -> Option<&str> {
		self.album.as_deref()
	}

	/// The year
	pub fn year(&self) -> Option<&str> {
		self.year.as_deref()
	}

	/// The genre, as stored
	pub fn genre(&self) -> Option<&str> {
		self.genre.as_deref()
	}

	/// The bodies of every comment frame, in tag order
	pub fn comments(&self) -> &[String] {
		&self.comments
	}
}

/// A decoded ID3 tag
///
/// This holds every frame that was successfully decoded, in the order they were read. Tags read
/// from ID3v1 have no header, and hold text frames using the ID3v2.2 IDs (`TT2`, `TP1`, ...).
///
/// ## Canonical fields
///
/// The accessors [`Tag::title`], [`Tag::artist`], [`Tag::album`], [`Tag::year`], [`Tag::genre`],
/// and [`Tag::comments`] work the same regardless of the version that was read. See
/// [`CanonicalFields`] for the IDs each one is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
	header: Option<Id3v2Header>,
	extended_header: Option<ExtendedHeader>,
	frames: Vec<Frame>,
	fields: CanonicalFields,
}

impl Tag {
	pub(crate) fn new(
		header: Option<Id3v2Header>,
		extended_header: Option<ExtendedHeader>,
		frames: Vec<Frame>,
	) -> Self {
		let fields = CanonicalFields::from_frames(&frames);
		Self {
			header,
			extended_header,
			frames,
			fields,
		}
	}

	/// The ID3v2 header, `None` for tags read from ID3v1
	pub fn header(&self) -> Option<&Id3v2Header> {
		self.header.as_ref()
	}

	/// The ID3v2 extended header, if the tag had one
	pub fn extended_header(&self) -> Option<&ExtendedHeader> {
		self.extended_header.as_ref()
	}

	/// All frames, in the order they were read
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Get the first frame with the ID `id`
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use id3dec::config::ParseOptions;
	///
	/// # fn main() -> id3dec::error::Result<()> {
	/// let tag = id3dec::read_from_path("foo.mp3", ParseOptions::new())?;
	/// if let Some(frame) = tag.get("TBPM") {
	/// 	println!("BPM: {frame}");
	/// }
	/// # Ok(()) }
	/// ```
	pub fn get(&self, id: &str) -> Option<&Frame> {
		self.frames.iter().find(|frame| frame.id().as_str() == id)
	}

	/// Get every frame with the ID `id`, in the order they were read
	pub fn get_all<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Frame> + 'a {
		self.frames.iter().filter(move |frame| frame.id().as_str() == id)
	}

	/// The number of frames in the tag
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Whether the tag holds no frames
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// The canonical fields
	pub fn fields(&self) -> &CanonicalFields {
		&self.fields
	}

	/// The title
	pub fn title(&self) -> Option<&str> {
		self.fields.title()
	}

	/// The artist
	pub fn artist(&self) -> Option<&str> {
		self.fields.artist()
	}

	/// The album
	pub fn album(&self) -> Option<&str> {
		self.fields.album()
	}

	/// The year
	pub fn year(&self) -> Option<&str> {
		self.fields.year()
	}

	/// The genre
	pub fn genre(&self) -> Option<&str> {
		self.fields.genre()
	}

	/// The bodies of every comment frame, in tag order
	pub fn comments(&self) -> &[String] {
		self.fields.comments()
	}

	/// Whether any of the title, artist, album, year, or genre are unset
	pub fn missing_core_info(&self) -> bool {
		self.fields.missing_core_info()
	}

	/// Fill in the canonical fields this tag lacks from `other`
	///
	/// Only the canonical view is affected, the frames of `other` are not added to this tag.
	pub(crate) fn merge_missing(&mut self, other: &Tag) {
		self.fields.merge_missing(&other.fields);
	}
}
