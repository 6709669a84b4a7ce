use crate::util::{audio, frame, id3v1_tag, id3v2_tag, temp_file};
use id3dec::config::ParseOptions;

use std::io::Cursor;

fn file(id3v2: &[u8], id3v1: &[u8]) -> Cursor<Vec<u8>> {
	let mut bytes = id3v2.to_vec();
	bytes.extend(audio());
	bytes.extend_from_slice(id3v1);
	Cursor::new(bytes)
}

fn id3v1() -> Vec<u8> {
	id3v1_tag("v1 title", "v1 artist", "v1 album", "1970", "v1 comment", 1, 8)
}

#[test_log::test]
fn fill_missing_genre() {
	let id3v2 = id3v2_tag(
		3,
		&[
			frame(3, "TIT2", b"\x00v2 title"),
			frame(3, "TPE1", b"\x00v2 artist"),
			frame(3, "TALB", b"\x00v2 album"),
			frame(3, "TYER", b"\x002001"),
		],
		64,
	);

	let tag = id3dec::read_from(&mut file(&id3v2, &id3v1()), ParseOptions::new()).unwrap();

	assert_eq!(tag.title(), Some("v2 title"));
	assert_eq!(tag.artist(), Some("v2 artist"));
	assert_eq!(tag.album(), Some("v2 album"));
	assert_eq!(tag.year(), Some("2001"));
	assert_eq!(tag.genre(), Some("Jazz"));
	assert!(!tag.missing_core_info());

	// Only the canonical fields are filled, the ID3v1 frames aren't added
	assert_eq!(tag.len(), 4);
	assert!(tag.get("TCO").is_none());
	assert_eq!(tag.header().unwrap().padding_size(), 64);
}

#[test_log::test]
fn complete_id3v2_ignores_id3v1() {
	let id3v2 = id3v2_tag(
		4,
		&[
			frame(4, "TIT2", b"\x03v2 title"),
			frame(4, "TPE1", b"\x03v2 artist"),
			frame(4, "TALB", b"\x03v2 album"),
			frame(4, "TDRC", b"\x032001-05-06"),
			frame(4, "TCON", b"\x03Ambient"),
		],
		0,
	);

	let tag = id3dec::read_from(&mut file(&id3v2, &id3v1()), ParseOptions::new()).unwrap();

	assert_eq!(tag.title(), Some("v2 title"));
	assert_eq!(tag.year(), Some("2001-05-06"));
	assert_eq!(tag.genre(), Some("Ambient"));
	assert!(tag.comments().is_empty());
}

#[test_log::test]
fn comments_not_merged() {
	let id3v2 = id3v2_tag(2, &[frame(2, "TT2", b"\x00v2 title")], 0);

	let tag = id3dec::read_from(&mut file(&id3v2, &id3v1()), ParseOptions::new()).unwrap();

	assert_eq!(tag.title(), Some("v2 title"));
	assert_eq!(tag.artist(), Some("v1 artist"));
	assert_eq!(tag.album(), Some("v1 album"));
	assert_eq!(tag.year(), Some("1970"));
	assert_eq!(tag.genre(), Some("Jazz"));

	// The ID3v2 tag has no comments, but the ID3v1 comment is still not taken
	assert!(tag.comments().is_empty());
}

#[test_log::test]
fn fallback_disabled() {
	let id3v2 = id3v2_tag(3, &[frame(3, "TIT2", b"\x00v2 title")], 0);

	let tag = id3dec::read_from(
		&mut file(&id3v2, &id3v1()),
		ParseOptions::new().fallback_to_id3v1(false),
	)
	.unwrap();

	assert_eq!(tag.title(), Some("v2 title"));
	assert_eq!(tag.artist(), None);
	assert_eq!(tag.genre(), None);
	assert!(tag.missing_core_info());
}

#[test_log::test]
fn unusable_id3v1() {
	// An ID3v1 tag with an invalid genre doesn't affect the ID3v2 tag
	let id3v2 = id3v2_tag(3, &[frame(3, "TIT2", b"\x00v2 title")], 0);
	let id3v1 = id3v1_tag("v1 title", "v1 artist", "", "", "", 0, 0xFF);

	let tag = id3dec::read_from(&mut file(&id3v2, &id3v1), ParseOptions::new()).unwrap();
	assert_eq!(tag.title(), Some("v2 title"));
	assert_eq!(tag.artist(), None);
}

#[test_log::test]
fn read_all() {
	let id3v2 = id3v2_tag(3, &[frame(3, "TIT2", b"\x00v2 title")], 16);

	let mut bytes = id3v2.clone();
	bytes.extend(audio());
	bytes.extend(id3v1());
	let mut file = temp_file(&bytes);

	let (v2, v1) = id3dec::read_all(&mut file, ParseOptions::new()).unwrap();
	let (v2, v1) = (v2.unwrap(), v1.unwrap());

	// Nothing is merged
	assert_eq!(v2.title(), Some("v2 title"));
	assert_eq!(v2.artist(), None);
	assert_eq!(v1.title(), Some("v1 title"));
	assert_eq!(v1.comments(), ["v1 comment"]);

	// Either tag may be missing
	let mut only_id3v2 = id3v2;
	only_id3v2.extend(audio());
	let (v2, v1) = id3dec::read_all(&mut Cursor::new(only_id3v2), ParseOptions::new()).unwrap();
	assert!(v2.is_some());
	assert!(v1.is_none());
}
