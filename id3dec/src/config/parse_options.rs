/// The parsing strictness mode
///
/// This can be set with [`ParseOptions::parsing_mode`].
///
/// # Examples
///
/// ```rust,no_run
/// use id3dec::config::{ParseOptions, ParsingMode};
///
/// # fn main() -> id3dec::error::Result<()> {
/// // We only want to read spec-compliant inputs
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// let tag = id3dec::read_from_path("foo.mp3", parsing_options)?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode a frame's text - The entire tag is discarded
	/// * ID3v1 genre index out of range - The ID3v1 tag is discarded
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode a frame's text - The frame is dropped, and the parser moves on
	/// * A frame declaring more bytes than the tag has left - The entire tag is discarded
	#[default]
	BestAttempt,
	/// Least eager to error, may produce partial output
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode a frame's text - The frame is dropped, and the parser moves on
	/// * A frame declaring more bytes than the tag has left - Reading stops, and the frames decoded
	///   so far are kept
	/// * ID3v1 genre index out of range - The genre is left unset
	Relaxed,
}

/// Options to control how id3dec parses a file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) read_cover_art: bool,
	pub(crate) fallback_to_id3v1: bool,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	read_cover_art: true,
	/// 	fallback_to_id3v1: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3dec::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			read_cover_art: true,
			fallback_to_id3v1: true,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use id3dec::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// Whether or not to read cover art
	///
	/// Skipped picture frames still count toward the bytes consumed from the tag.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3dec::config::ParseOptions;
	///
	/// // Reading cover art is expensive, and I do not need it!
	/// let parsing_options = ParseOptions::new().read_cover_art(false);
	/// ```
	pub fn read_cover_art(&mut self, read_cover_art: bool) -> Self {
		self.read_cover_art = read_cover_art;
		*self
	}

	/// Whether or not to fill missing fields from a trailing ID3v1 tag
	///
	/// When an ID3v2 tag lacks any of the title, artist, album, year, or genre, the ID3v1 tag at
	/// the end of the stream (if any) is read, and its values are adopted for the missing fields.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3dec::config::ParseOptions;
	///
	/// // Only trust the ID3v2 tag
	/// let parsing_options = ParseOptions::new().fallback_to_id3v1(false);
	/// ```
	pub fn fallback_to_id3v1(&mut self, fallback_to_id3v1: bool) -> Self {
		self.fallback_to_id3v1 = fallback_to_id3v1;
		*self
	}
}
