use crate::util::{audio, frame, id3v2_tag, temp_file};
use id3dec::TextEncoding;
use id3dec::config::{GlobalOptions, ParseOptions, ParsingMode, apply_global_options};
use id3dec::error::ErrorKind;
use id3dec::id3::v2::{Frame, Id3v2Version};
use id3dec::picture::{MimeType, PictureType};

use std::io::{Cursor, Seek as _, SeekFrom};

#[test_log::test]
fn read_single_title() {
	#[rustfmt::skip]
	let mut bytes = vec![
		0x49, 0x44, 0x33, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x23,
		0x54, 0x49, 0x54, 0x32, 0x00, 0x00, 0x00, 0x06, 0x00, 0x00,
		0x00, 0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x00,
	];
	bytes.resize(10 + 0x23, 0);

	let tag = id3dec::read_from(&mut Cursor::new(bytes), ParseOptions::new()).unwrap();

	let header = tag.header().unwrap();
	assert_eq!(header.version(), Id3v2Version::V3);
	assert_eq!(header.size(), 35);

	assert_eq!(tag.title(), Some("Hello"));
	assert_eq!(tag.len(), 1);

	// 16 bytes of frame, the rest is padding
	assert_eq!(header.padding_size(), 19);
}

#[test_log::test]
fn too_short() {
	let bytes = [b'I', b'D', b'3', 3, 0];

	let err = id3dec::read_from(&mut Cursor::new(bytes), ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TooShort));

	let err = id3dec::read_all(&mut Cursor::new(bytes), ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TooShort));
}

#[test_log::test]
fn no_tags() {
	let err = id3dec::read_from(&mut Cursor::new(audio()), ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NoHeader));

	let err = id3dec::read_all(&mut Cursor::new(audio()), ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NoHeader));
}

#[test_log::test]
fn unknown_major_version() {
	let mut bytes = id3v2_tag(3, &[frame(3, "TIT2", b"\x00Title")], 0);
	bytes[3] = 5;

	let err = id3dec::read_from(&mut Cursor::new(bytes), ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnknownMajorVersion(5, 0)));
}

#[test_log::test]
fn oversized_frame() {
	let mut title = frame(3, "TIT2", b"\x00Title");
	// Claim 0x100 more bytes than there are
	title[6] = 1;

	let bytes = id3v2_tag(3, &[title], 4);
	let err = id3dec::read_from(&mut Cursor::new(bytes), ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TooShort));
}

#[test_log::test]
fn skip_unknown_frames() {
	for (major, title, unknown, artist) in [
		(2, "TT2", "XYZ", "TP1"),
		(3, "TIT2", "XYZW", "TPE1"),
		(4, "TIT2", "XYZW", "TPE1"),
	] {
		let bytes = id3v2_tag(
			major,
			&[
				frame(major, title, b"\x00Title"),
				frame(major, unknown, b"\x00\x01\x02\x03"),
				frame(major, artist, b"\x00Artist"),
			],
			0,
		);

		let tag = id3dec::read_from(&mut Cursor::new(bytes), ParseOptions::new()).unwrap();
		assert_eq!(tag.len(), 2);
		assert_eq!(tag.title(), Some("Title"));
		assert_eq!(tag.artist(), Some("Artist"));
		assert!(tag.get(unknown).is_none());
	}
}

#[test_log::test]
fn padding_accounts_for_body() {
	let frames = [
		frame(4, "TIT2", b"\x03Title"),
		frame(4, "TPE1", b"\x03Artist"),
		frame(4, "TALB", b"\x03Album"),
	];
	let frames_len: usize = frames.iter().map(Vec::len).sum();

	let mut bytes = id3v2_tag(4, &frames, 100);
	bytes.extend(audio());

	let mut reader = Cursor::new(bytes);
	let (id3v2, id3v1) = id3dec::read_all(&mut reader, ParseOptions::new()).unwrap();
	assert!(id3v1.is_none());

	let tag = id3v2.unwrap();
	let header = tag.header().unwrap();
	assert_eq!(header.padding_size(), 100);

	let consumed: u32 = tag.frames().iter().map(|frame| 10 + frame.size()).sum();
	assert_eq!(consumed as usize, frames_len);
	assert_eq!(consumed + header.padding_size(), header.size());
}

#[test_log::test]
fn text_encodings() {
	let latin1 = frame(3, "TIT2", b"\x00Caf\xE9");
	let utf16 = frame(
		3,
		"TIT2",
		&[0x01, 0xFF, 0xFE, b'C', 0x00, b'a', 0x00, b'f', 0x00, 0xE9, 0x00, 0x00, 0x00],
	);
	let utf16_be = frame(
		4,
		"TIT2",
		&[0x02, 0x00, b'C', 0x00, b'a', 0x00, b'f', 0x00, 0xE9],
	);
	let utf8 = frame(4, "TIT2", "\x03Café".as_bytes());

	for (major, frame, encoding) in [
		(3, latin1, TextEncoding::Latin1),
		(3, utf16, TextEncoding::UTF16),
		(4, utf16_be, TextEncoding::UTF16BE),
		(4, utf8, TextEncoding::UTF8),
	] {
		let bytes = id3v2_tag(major, &[frame], 0);
		let tag = id3dec::read_from(&mut Cursor::new(bytes), ParseOptions::new()).unwrap();

		assert_eq!(tag.title(), Some("Café"));
		let Some(Frame::Text(text)) = tag.get("TIT2") else {
			panic!("Expected a text frame");
		};
		assert_eq!(text.encoding, encoding);
	}
}

#[test_log::test]
fn comments_in_order() {
	let bytes = id3v2_tag(
		3,
		&[
			frame(3, "COMM", b"\x00engfirst\x00One"),
			frame(3, "TIT2", b"\x00Title"),
			frame(3, "COMM", b"\x00XXXsecond\x00Two"),
		],
		10,
	);

	let tag = id3dec::read_from(&mut Cursor::new(bytes), ParseOptions::new()).unwrap();
	assert_eq!(tag.comments(), ["One", "Two"]);

	let descriptions: Vec<_> = tag
		.get_all("COMM")
		.map(|frame| match frame {
			Frame::FullText(comment) => {
				(comment.language.clone().unwrap(), comment.description.clone())
			},
			_ => unreachable!(),
		})
		.collect();
	assert_eq!(
		descriptions,
		[
			(String::from("eng"), String::from("first")),
			(String::from("eng"), String::from("second"))
		]
	);
}

#[test_log::test]
fn pictures() {
	let mut pic = b"\x00PNG\x03Front\x00".to_vec();
	pic.extend_from_slice(b"\x89PNG\r\n\x1a\n");

	let mut apic = b"\x00image/jpeg\x00\x04Back\x00".to_vec();
	apic.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xE0]);

	for (major, frame) in [(2, frame(2, "PIC", &pic)), (3, frame(3, "APIC", &apic))] {
		let bytes = id3v2_tag(major, &[frame], 0);
		let tag = id3dec::read_from(&mut Cursor::new(bytes), ParseOptions::new()).unwrap();

		let Some(Frame::Picture(picture)) = tag.frames().first() else {
			panic!("Expected a picture frame");
		};

		if major == 2 {
			assert_eq!(picture.mime_type, MimeType::Png);
			assert_eq!(picture.picture_type, PictureType::CoverFront);
			assert_eq!(picture.description, "Front");
			assert_eq!(picture.data, b"\x89PNG\r\n\x1a\n");
		} else {
			assert_eq!(picture.mime_type, MimeType::Jpeg);
			assert_eq!(picture.picture_type, PictureType::CoverBack);
			assert_eq!(picture.description, "Back");
			assert_eq!(picture.data, [0xFF, 0xD8, 0xFF, 0xE0]);
		}
	}
}

#[test_log::test]
fn unknown_v22_picture_format() {
	let bytes = id3v2_tag(
		2,
		&[
			frame(2, "PIC", b"\x00GIF\x03\x00GIF89a"),
			frame(2, "TT2", b"\x00Title"),
		],
		0,
	);

	let tag = id3dec::read_from(&mut Cursor::new(bytes.clone()), ParseOptions::new()).unwrap();
	assert_eq!(tag.len(), 1);
	assert_eq!(tag.title(), Some("Title"));

	let err = id3dec::read_from(
		&mut Cursor::new(bytes),
		ParseOptions::new().parsing_mode(ParsingMode::Strict),
	)
	.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnknownPictureFormat(format) if format == "GIF"));
}

#[test_log::test]
fn unique_file_identifier() {
	let bytes = id3v2_tag(
		4,
		&[frame(4, "UFID", b"http://musicbrainz.org\x00\xDE\xAD\xBE\xEF")],
		0,
	);

	let tag = id3dec::read_from(&mut Cursor::new(bytes), ParseOptions::new()).unwrap();
	let Some(Frame::UniqueFileIdentifier(ufid)) = tag.get("UFID") else {
		panic!("Expected a unique file identifier frame");
	};

	assert_eq!(ufid.owner, "http://musicbrainz.org");
	assert_eq!(ufid.identifier, [0xDE, 0xAD, 0xBE, 0xEF]);
	assert_eq!(tag.get("UFID").unwrap().to_string(), "deadbeef (http://musicbrainz.org)");
}

#[test_log::test]
fn opaque_frames() {
	let bytes = id3v2_tag(3, &[frame(3, "MCDI", &[0x01, 0xAB])], 0);

	let tag = id3dec::read_from(&mut Cursor::new(bytes), ParseOptions::new()).unwrap();
	let mcdi = tag.get("MCDI").unwrap();

	assert!(matches!(mcdi, Frame::Binary(_)));
	assert_eq!(mcdi.as_bytes(), [0x01, 0xAB]);
	assert_eq!(mcdi.text(), "01ab");
}

#[test_log::test]
fn read_from_path() {
	let mut bytes = id3v2_tag(4, &[frame(4, "TIT2", b"\x03From a file")], 32);
	bytes.extend(audio());

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("test.mp3");
	std::fs::write(&path, &bytes).unwrap();

	let tag = id3dec::read_from_path(&path, ParseOptions::new()).unwrap();
	assert_eq!(tag.title(), Some("From a file"));

	let err = id3dec::read_from_path(dir.path().join("missing.mp3"), ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Io(_)));
}

#[test_log::test]
fn read_from_file_position() {
	// A tag embedded after some unrelated data
	let mut bytes = b"LIST\x00\x00\x00\x00id3 ".to_vec();
	let tag_start = bytes.len() as u64;
	bytes.extend(id3v2_tag(3, &[frame(3, "TIT2", b"\x00Title")], 0));
	let mut file = temp_file(&bytes);

	// Reading starts at the current position
	file.seek(SeekFrom::Start(tag_start)).unwrap();
	let tag = id3dec::read_from(&mut file, ParseOptions::new()).unwrap();
	assert_eq!(tag.title(), Some("Title"));

	file.seek(SeekFrom::Start(tag_start)).unwrap();
	let (id3v2, id3v1) = id3dec::read_all(&mut file, ParseOptions::new()).unwrap();
	assert_eq!(id3v2.unwrap().title(), Some("Title"));
	assert!(id3v1.is_none());

	// The stream isn't rewound, there's no tag at the start of it
	file.rewind().unwrap();
	let err = id3dec::read_from(&mut file, ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NoHeader));
}

#[test_log::test]
fn allocation_limit() {
	let bytes = id3v2_tag(3, &[frame(3, "TIT2", b"\x00A long title")], 0);

	// Global options are per-thread, this doesn't affect other tests
	apply_global_options(GlobalOptions::new().allocation_limit(8));

	let err = id3dec::read_from(&mut Cursor::new(bytes.clone()), ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TooMuchData));

	apply_global_options(GlobalOptions::default());
	let tag = id3dec::read_from(&mut Cursor::new(bytes), ParseOptions::new()).unwrap();
	assert_eq!(tag.title(), Some("A long title"));
}

#[test_log::test]
fn skipped_frames_within_allocation_limit() {
	let mut apic = b"\x00image/png\x00\x03\x00".to_vec();
	apic.resize(64, 0xAB);

	let with_art = id3v2_tag(
		3,
		&[frame(3, "APIC", &apic), frame(3, "TIT2", b"\x00Title")],
		0,
	);
	let with_unknown = id3v2_tag(
		3,
		&[frame(3, "XYZW", &[0xCD; 64]), frame(3, "TIT2", b"\x00Title")],
		0,
	);

	apply_global_options(GlobalOptions::new().allocation_limit(32));

	// Frames that are never decoded are never held in memory
	let no_art = ParseOptions::new().read_cover_art(false);
	let tag = id3dec::read_from(&mut Cursor::new(with_art.clone()), no_art).unwrap();
	assert_eq!(tag.title(), Some("Title"));
	assert_eq!(tag.len(), 1);

	let tag = id3dec::read_from(&mut Cursor::new(with_unknown), ParseOptions::new()).unwrap();
	assert_eq!(tag.title(), Some("Title"));
	assert_eq!(tag.len(), 1);

	// A picture that is decoded still has to fit
	let err = id3dec::read_from(&mut Cursor::new(with_art), ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TooMuchData));

	apply_global_options(GlobalOptions::default());
}
