//! Read ID3v1 and ID3v2 tags.
//!
//! id3dec decodes the ID3 tags found in MP3 (and other) files: ID3v2.2, ID3v2.3, and ID3v2.4 tags
//! at the start of a stream, and ID3v1/ID3v1.1 tags at the end of one.
//!
//! # Examples
//!
//! ## Reading a file
//!
//! ```rust,no_run
//! # fn main() -> id3dec::error::Result<()> {
//! use id3dec::config::ParseOptions;
//!
//! let tag = id3dec::read_from_path("test.mp3", ParseOptions::new())?;
//!
//! println!("Title: {:?}", tag.title());
//! for comment in tag.comments() {
//! 	println!("Comment: {comment}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Using an existing reader
//!
//! ```rust,no_run
//! # fn main() -> id3dec::error::Result<()> {
//! use id3dec::config::{ParseOptions, ParsingMode};
//! use std::fs::File;
//!
//! let mut file = File::open("test.mp3")?;
//!
//! // Fail on any frame that can't be decoded
//! let parse_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
//! let tag = id3dec::read_from(&mut file, parse_options)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Accessing frames
//!
//! ```rust,no_run
//! # fn main() -> id3dec::error::Result<()> {
//! use id3dec::config::ParseOptions;
//! use id3dec::id3::v2::Frame;
//!
//! let tag = id3dec::read_from_path("test.mp3", ParseOptions::new())?;
//!
//! for frame in tag.frames() {
//! 	if let Frame::Picture(picture) = frame {
//! 		println!("{} ({} bytes)", picture.picture_type, picture.data.len());
//! 	}
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Important format-specific notes
//!
//! See the [`id3`] module, and the modules within it.

pub mod config;
pub mod error;
pub mod id3;
pub(crate) mod macros;
pub mod picture;
mod util;

pub use id3::{read_all, read_from};
pub use util::text::TextEncoding;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::id3::Tag;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read the ID3 tag from a path
///
/// See [`read_from`] for how the tag is found.
///
/// # Errors
///
/// * `path` does not exist or can't be opened
/// * See [`read_from`]
///
/// # Examples
///
/// ```rust,no_run
/// use id3dec::config::ParseOptions;
///
/// # fn main() -> id3dec::error::Result<()> {
/// let tag = id3dec::read_from_path("test.mp3", ParseOptions::new())?;
/// # Ok(()) }
/// ```
pub fn read_from_path<P>(path: P, parse_options: ParseOptions) -> Result<Tag>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	log::debug!("Reading ID3 tag from {}", path.display());

	let mut reader = BufReader::new(File::open(path)?);
	read_from(&mut reader, parse_options)
}
