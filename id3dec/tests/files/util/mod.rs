use std::fs::File;
use std::io::{Seek as _, Write as _};

/// Build a single frame in the layout of the ID3v2 major version `major`
pub fn frame(major: u8, id: &str, payload: &[u8]) -> Vec<u8> {
	let len = payload.len() as u32;

	let mut bytes = id.as_bytes().to_vec();
	match major {
		2 => bytes.extend_from_slice(&len.to_be_bytes()[1..]),
		3 => bytes.extend_from_slice(&len.to_be_bytes()),
		_ => bytes.extend_from_slice(&synchsafe(len)),
	}

	if major != 2 {
		// Status and format flags
		bytes.extend_from_slice(&[0, 0]);
	}

	bytes.extend_from_slice(payload);
	bytes
}

/// Build an ID3v2 tag holding `frames`, followed by `padding` zero bytes
pub fn id3v2_tag(major: u8, frames: &[Vec<u8>], padding: usize) -> Vec<u8> {
	let mut body = frames.concat();
	body.resize(body.len() + padding, 0);

	let mut tag = vec![b'I', b'D', b'3', major, 0, 0];
	tag.extend_from_slice(&synchsafe(body.len() as u32));
	tag.extend(body);
	tag
}

/// Build an ID3v1.1 tag
pub fn id3v1_tag(
	title: &str,
	artist: &str,
	album: &str,
	year: &str,
	comment: &str,
	track: u8,
	genre: u8,
) -> Vec<u8> {
	fn field(tag: &mut Vec<u8>, value: &str, len: usize) {
		let start = tag.len();
		tag.extend_from_slice(value.as_bytes());
		tag.resize(start + len, 0);
	}

	let mut tag = b"TAG".to_vec();
	field(&mut tag, title, 30);
	field(&mut tag, artist, 30);
	field(&mut tag, album, 30);
	field(&mut tag, year, 4);
	field(&mut tag, comment, 28);
	tag.push(0);
	tag.push(track);
	tag.push(genre);

	assert_eq!(tag.len(), 128);
	tag
}

/// Some bytes that could pass for MPEG audio, to sit between the tags
pub fn audio() -> Vec<u8> {
	let mut audio = vec![0xFF, 0xFB, 0x90, 0x64];
	audio.resize(417, 0x55);
	audio
}

/// Write `content` to a new temporary file
pub fn temp_file(content: &[u8]) -> File {
	let mut file = tempfile::tempfile().unwrap();
	file.write_all(content).unwrap();
	file.rewind().unwrap();

	file
}

fn synchsafe(n: u32) -> [u8; 4] {
	assert!(n <= 0x0FFF_FFFF);
	[
		((n >> 21) & 0x7F) as u8,
		((n >> 14) & 0x7F) as u8,
		((n >> 7) & 0x7F) as u8,
		(n & 0x7F) as u8,
	]
}
