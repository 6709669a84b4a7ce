use crate::util::{audio, id3v1_tag};
use id3dec::config::{ParseOptions, ParsingMode};
use id3dec::error::ErrorKind;
use id3dec::id3::v2::Frame;

use std::io::Cursor;

fn file_with_id3v1(id3v1: &[u8]) -> Cursor<Vec<u8>> {
	let mut bytes = audio();
	bytes.extend_from_slice(id3v1);
	Cursor::new(bytes)
}

#[test_log::test]
fn read() {
	let id3v1 = id3v1_tag("Title", "Artist", "Album", "1999", "Comment", 7, 17);

	let tag = id3dec::read_from(&mut file_with_id3v1(&id3v1), ParseOptions::new()).unwrap();

	assert!(tag.header().is_none());
	assert_eq!(tag.title(), Some("Title"));
	assert_eq!(tag.artist(), Some("Artist"));
	assert_eq!(tag.album(), Some("Album"));
	assert_eq!(tag.year(), Some("1999"));
	assert_eq!(tag.genre(), Some("Rock"));
	assert_eq!(tag.comments(), ["Comment"]);

	// ID3v1 fields are exposed with the ID3v2.2 IDs
	assert_eq!(tag.get("TRK").unwrap().to_string(), "7");
	assert!(tag.get("TT2").unwrap().id().is_outdated());
}

#[test_log::test]
fn id3v1_0_comment() {
	let mut id3v1 = id3v1_tag("Title", "", "", "", "", 0, 0);
	// A full 30 byte comment, no track number
	id3v1[97..127].copy_from_slice(b"This comment is thirty chars!!");

	let tag = id3dec::read_from(&mut file_with_id3v1(&id3v1), ParseOptions::new()).unwrap();
	assert_eq!(tag.comments(), ["This comment is thirty chars!!"]);
	assert!(tag.get("TRK").is_none());

	// Empty fields are still present
	assert_eq!(tag.artist(), Some(""));
	assert_eq!(tag.genre(), Some("Blues"));
}

#[test_log::test]
fn latin1_fields() {
	let mut id3v1 = id3v1_tag("", "", "", "", "", 1, 0);
	id3v1[3..8].copy_from_slice(b"Caf\xE9!");

	let tag = id3dec::read_from(&mut file_with_id3v1(&id3v1), ParseOptions::new()).unwrap();
	assert_eq!(tag.title(), Some("Café!"));

	let Some(Frame::Text(title)) = tag.get("TT2") else {
		panic!("Expected a text frame");
	};
	assert_eq!(title.value, "Café!");
}

#[test_log::test]
fn unknown_genre() {
	let id3v1 = id3v1_tag("Title", "Artist", "Album", "1999", "", 0, 200);

	let err = id3dec::read_from(&mut file_with_id3v1(&id3v1), ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnknownGenre(200)));

	let tag = id3dec::read_from(
		&mut file_with_id3v1(&id3v1),
		ParseOptions::new().parsing_mode(ParsingMode::Relaxed),
	)
	.unwrap();
	assert_eq!(tag.title(), Some("Title"));
	assert_eq!(tag.genre(), None);
	assert!(tag.get("TCO").is_none());
}

#[test_log::test]
fn short_untagged_stream() {
	let bytes = vec![0x55; 64];

	let err = id3dec::read_from(&mut Cursor::new(bytes), ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NoHeader));
}

#[test_log::test]
fn id3v1_only_file() {
	// Nothing but the ID3v1 tag itself
	let id3v1 = id3v1_tag("Only", "", "", "", "", 0, 12);

	let tag = id3dec::read_from(&mut Cursor::new(id3v1), ParseOptions::new()).unwrap();
	assert_eq!(tag.title(), Some("Only"));
	assert_eq!(tag.genre(), Some("Other"));
}
