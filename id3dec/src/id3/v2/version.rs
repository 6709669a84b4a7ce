//! Per-version layout parameters and frame tables
//!
//! Each ID3v2 major version is described by a single immutable [`VersionParams`], so the frame
//! reader itself never has to branch on the version.

use super::header::Id3v2Version;
use super::util::synchsafe::SynchsafeInteger;

use byteorder::{BigEndian, ByteOrder};

/// How a frame's payload is decoded
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum FrameKind {
	/// A single string
	Text,
	/// A language code, a description, and a body
	FullText,
	/// A description and a body
	Described,
	/// Opaque bytes
	Data,
	/// An attached picture
	Picture,
	/// An owner and an opaque identifier
	UniqueFileIdentifier,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct FrameSpec {
	pub(crate) id: &'static str,
	pub(crate) kind: FrameKind,
	pub(crate) description: &'static str,
}

impl FrameSpec {
	const fn new(id: &'static str, kind: FrameKind, description: &'static str) -> Self {
		Self {
			id,
			kind,
			description,
		}
	}
}

/// The on-disk frame layout of a single ID3v2 major version
#[derive(Debug)]
pub(crate) struct VersionParams {
	pub(crate) version: Id3v2Version,
	pub(crate) id_len: usize,
	pub(crate) size_len: usize,
	pub(crate) flags_len: usize,
	pub(crate) synchsafe_size: bool,
	frames: &'static [FrameSpec],
}

impl VersionParams {
	pub(crate) fn for_version(version: Id3v2Version) -> &'static Self {
		match version {
			Id3v2Version::V2 => &V22,
			Id3v2Version::V3 => &V23,
			Id3v2Version::V4 => &V24,
		}
	}

	/// The size of a frame header in this version
	pub(crate) const fn header_len(&self) -> usize {
		self.id_len + self.size_len + self.flags_len
	}

	/// Decode a frame size field
	///
	/// `bytes` must be exactly `size_len` bytes long.
	pub(crate) fn frame_size(&self, bytes: &[u8]) -> u32 {
		match bytes.len() {
			3 => BigEndian::read_u24(bytes),
			4 if self.synchsafe_size => BigEndian::read_u32(bytes).unsynch(),
			4 => BigEndian::read_u32(bytes),
			_ => 0,
		}
	}

	/// Find the table entry for `id`
	pub(crate) fn lookup(&self, id: &str) -> Option<&'static FrameSpec> {
		self.frames
			.binary_search_by(|spec| spec.id.cmp(id))
			.ok()
			.map(|idx| &self.frames[idx])
	}
}

/// Get the human readable description of a frame ID in a given version
///
/// Returns `None` if `id` is not a frame defined for `version`. Frames with such IDs are skipped
/// when reading.
///
/// # Examples
///
/// ```rust
/// use id3dec::id3::v2::{Id3v2Version, frame_description};
///
/// assert_eq!(frame_description(Id3v2Version::V2, "TT2"), Some("Title/Songname/Content description"));
///
/// // `TIT2` is the ID3v2.3/4 spelling
/// assert_eq!(frame_description(Id3v2Version::V2, "TIT2"), None);
/// ```
pub fn frame_description(version: Id3v2Version, id: &str) -> Option<&'static str> {
	VersionParams::for_version(version)
		.lookup(id)
		.map(|spec| spec.description)
}

static V22: VersionParams = VersionParams {
	version: Id3v2Version::V2,
	id_len: 3,
	size_len: 3,
	flags_len: 0,
	synchsafe_size: false,
	frames: V22_FRAMES,
};

static V23: VersionParams = VersionParams {
	version: Id3v2Version::V3,
	id_len: 4,
	size_len: 4,
	flags_len: 2,
	synchsafe_size: false,
	frames: V23_FRAMES,
};

static V24: VersionParams = VersionParams {
	version: Id3v2Version::V4,
	id_len: 4,
	size_len: 4,
	flags_len: 2,
	synchsafe_size: true,
	frames: V24_FRAMES,
};

// The tables are binary searched, keep them sorted

// ID3v2.2
static V22_FRAMES: &[FrameSpec] = &[
	FrameSpec::new("BUF", FrameKind::Data, "Recommended buffer size"),
	FrameSpec::new("CNT", FrameKind::Data, "Play counter"),
	FrameSpec::new("COM", FrameKind::FullText, "Comments"),
	FrameSpec::new("CRA", FrameKind::Data, "Audio encryption"),
	FrameSpec::new("CRM", FrameKind::Data, "Encrypted meta frame"),
	FrameSpec::new("EQU", FrameKind::Data, "Equalization"),
	FrameSpec::new("ETC", FrameKind::Data, "Event timing codes"),
	FrameSpec::new("GEO", FrameKind::Data, "General encapsulated object"),
	FrameSpec::new("IPL", FrameKind::Data, "Involved people list"),
	FrameSpec::new("LNK", FrameKind::Data, "Linked information"),
	FrameSpec::new("MCI", FrameKind::Data, "Music CD identifier"),
	FrameSpec::new("MLL", FrameKind::Data, "MPEG location lookup table"),
	FrameSpec::new("PIC", FrameKind::Picture, "Attached picture"),
	FrameSpec::new("POP", FrameKind::Data, "Popularimeter"),
	FrameSpec::new("REV", FrameKind::Data, "Reverb"),
	FrameSpec::new("RVA", FrameKind::Data, "Relative volume adjustment"),
	FrameSpec::new("SLT", FrameKind::Data, "Synchronized lyric/text"),
	FrameSpec::new("STC", FrameKind::Data, "Synced tempo codes"),
	FrameSpec::new("TAL", FrameKind::Text, "Album/Movie/Show title"),
	FrameSpec::new("TBP", FrameKind::Text, "BPM (Beats Per Minute)"),
	FrameSpec::new("TCM", FrameKind::Text, "Composer"),
	FrameSpec::new("TCO", FrameKind::Text, "Content type"),
	FrameSpec::new("TCR", FrameKind::Text, "Copyright message"),
	FrameSpec::new("TDA", FrameKind::Text, "Date"),
	FrameSpec::new("TDY", FrameKind::Text, "Playlist delay"),
	FrameSpec::new("TEN", FrameKind::Text, "Encoded by"),
	FrameSpec::new("TFT", FrameKind::Text, "File type"),
	FrameSpec::new("TIM", FrameKind::Text, "Time"),
	FrameSpec::new("TKE", FrameKind::Text, "Initial key"),
	FrameSpec::new("TLA", FrameKind::Text, "Language(s)"),
	FrameSpec::new("TLE", FrameKind::Text, "Length"),
	FrameSpec::new("TMT", FrameKind::Text, "Media type"),
	FrameSpec::new("TOA", FrameKind::Text, "Original artist(s)/performer(s)"),
	FrameSpec::new("TOF", FrameKind::Text, "Original filename"),
	FrameSpec::new("TOL", FrameKind::Text, "Original lyricist(s)/text writer(s)"),
	FrameSpec::new("TOR", FrameKind::Text, "Original release year"),
	FrameSpec::new("TOT", FrameKind::Text, "Original album/Movie/Show title"),
	FrameSpec::new("TP1", FrameKind::Text, "Lead artist(s)/Lead performer(s)/Soloist(s)/Performing group"),
	FrameSpec::new("TP2", FrameKind::Text, "Band/Orchestra/Accompaniment"),
	FrameSpec::new("TP3", FrameKind::Text, "Conductor/Performer refinement"),
	FrameSpec::new("TP4", FrameKind::Text, "Interpreted, remixed, or otherwise modified by"),
	FrameSpec::new("TPA", FrameKind::Text, "Part of a set"),
	FrameSpec::new("TPB", FrameKind::Text, "Publisher"),
	FrameSpec::new("TRC", FrameKind::Text, "ISRC (International Standard Recording Code)"),
	FrameSpec::new("TRD", FrameKind::Text, "Recording dates"),
	FrameSpec::new("TRK", FrameKind::Text, "Track number/Position in set"),
	FrameSpec::new("TSI", FrameKind::Text, "Size"),
	FrameSpec::new("TSS", FrameKind::Text, "Software/hardware and settings used for encoding"),
	FrameSpec::new("TT1", FrameKind::Text, "Content group description"),
	FrameSpec::new("TT2", FrameKind::Text, "Title/Songname/Content description"),
	FrameSpec::new("TT3", FrameKind::Text, "Subtitle/Description refinement"),
	FrameSpec::new("TXT", FrameKind::Text, "Lyricist/text writer"),
	FrameSpec::new("TXX", FrameKind::Described, "User defined text information frame"),
	FrameSpec::new("TYE", FrameKind::Text, "Year"),
	FrameSpec::new("UFI", FrameKind::UniqueFileIdentifier, "Unique file identifier"),
	FrameSpec::new("ULT", FrameKind::FullText, "Unsynchronized lyric/text transcription"),
	FrameSpec::new("WAF", FrameKind::Data, "Official audio file webpage"),
	FrameSpec::new("WAR", FrameKind::Data, "Official artist/performer webpage"),
	FrameSpec::new("WAS", FrameKind::Data, "Official audio source webpage"),
	FrameSpec::new("WCM", FrameKind::Data, "Commercial information"),
	FrameSpec::new("WCP", FrameKind::Data, "Copyright/Legal information"),
	FrameSpec::new("WPB", FrameKind::Data, "Publishers official webpage"),
	FrameSpec::new("WXX", FrameKind::Described, "User defined URL link frame"),
];

// ID3v2.3
static V23_FRAMES: &[FrameSpec] = &[
	FrameSpec::new("AENC", FrameKind::Data, "Audio encryption"),
	FrameSpec::new("APIC", FrameKind::Picture, "Attached picture"),
	FrameSpec::new("COMM", FrameKind::FullText, "Comments"),
	FrameSpec::new("COMR", FrameKind::Data, "Commercial frame"),
	FrameSpec::new("ENCR", FrameKind::Data, "Encryption method registration"),
	FrameSpec::new("EQUA", FrameKind::Data, "Equalization"),
	FrameSpec::new("ETCO", FrameKind::Data, "Event timing codes"),
	FrameSpec::new("GEOB", FrameKind::Data, "General encapsulated object"),
	FrameSpec::new("GRID", FrameKind::Data, "Group identification registration"),
	FrameSpec::new("IPLS", FrameKind::Data, "Involved people list"),
	FrameSpec::new("LINK", FrameKind::Data, "Linked information"),
	FrameSpec::new("MCDI", FrameKind::Data, "Music CD identifier"),
	FrameSpec::new("MLLT", FrameKind::Data, "MPEG location lookup table"),
	FrameSpec::new("OWNE", FrameKind::Data, "Ownership frame"),
	FrameSpec::new("PCNT", FrameKind::Data, "Play counter"),
	FrameSpec::new("POPM", FrameKind::Data, "Popularimeter"),
	FrameSpec::new("POSS", FrameKind::Data, "Position synchronisation frame"),
	FrameSpec::new("PRIV", FrameKind::Data, "Private frame"),
	FrameSpec::new("RBUF", FrameKind::Data, "Recommended buffer size"),
	FrameSpec::new("RVAD", FrameKind::Data, "Relative volume adjustment"),
	FrameSpec::new("RVRB", FrameKind::Data, "Reverb"),
	FrameSpec::new("SYLT", FrameKind::Data, "Synchronized lyric/text"),
	FrameSpec::new("SYTC", FrameKind::Data, "Synchronized tempo codes"),
	FrameSpec::new("TALB", FrameKind::Text, "Album/Movie/Show title"),
	FrameSpec::new("TBPM", FrameKind::Text, "BPM (beats per minute)"),
	FrameSpec::new("TCOM", FrameKind::Text, "Composer"),
	FrameSpec::new("TCON", FrameKind::Text, "Content type"),
	FrameSpec::new("TCOP", FrameKind::Text, "Copyright message"),
	FrameSpec::new("TDAT", FrameKind::Text, "Date"),
	FrameSpec::new("TDLY", FrameKind::Text, "Playlist delay"),
	FrameSpec::new("TENC", FrameKind::Text, "Encoded by"),
	FrameSpec::new("TEXT", FrameKind::Text, "Lyricist/Text writer"),
	FrameSpec::new("TFLT", FrameKind::Text, "File type"),
	FrameSpec::new("TIME", FrameKind::Text, "Time"),
	FrameSpec::new("TIT1", FrameKind::Text, "Content group description"),
	FrameSpec::new("TIT2", FrameKind::Text, "Title/songname/content description"),
	FrameSpec::new("TIT3", FrameKind::Text, "Subtitle/Description refinement"),
	FrameSpec::new("TKEY", FrameKind::Text, "Initial key"),
	FrameSpec::new("TLAN", FrameKind::Text, "Language(s)"),
	FrameSpec::new("TLEN", FrameKind::Text, "Length"),
	FrameSpec::new("TMED", FrameKind::Text, "Media type"),
	FrameSpec::new("TOAL", FrameKind::Text, "Original album/movie/show title"),
	FrameSpec::new("TOFN", FrameKind::Text, "Original filename"),
	FrameSpec::new("TOLY", FrameKind::Text, "Original lyricist(s)/text writer(s)"),
	FrameSpec::new("TOPE", FrameKind::Text, "Original artist(s)/performer(s)"),
	FrameSpec::new("TORY", FrameKind::Text, "Original release year"),
	FrameSpec::new("TOWN", FrameKind::Text, "File owner/licensee"),
	FrameSpec::new("TPE1", FrameKind::Text, "Lead performer(s)/Soloist(s)"),
	FrameSpec::new("TPE2", FrameKind::Text, "Band/orchestra/accompaniment"),
	FrameSpec::new("TPE3", FrameKind::Text, "Conductor/performer refinement"),
	FrameSpec::new("TPE4", FrameKind::Text, "Interpreted, remixed, or otherwise modified by"),
	FrameSpec::new("TPOS", FrameKind::Text, "Part of a set"),
	FrameSpec::new("TPUB", FrameKind::Text, "Publisher"),
	FrameSpec::new("TRCK", FrameKind::Text, "Track number/Position in set"),
	FrameSpec::new("TRDA", FrameKind::Text, "Recording dates"),
	FrameSpec::new("TRSN", FrameKind::Text, "Internet radio station name"),
	FrameSpec::new("TRSO", FrameKind::Text, "Internet radio station owner"),
	FrameSpec::new("TSIZ", FrameKind::Text, "Size"),
	FrameSpec::new("TSRC", FrameKind::Text, "ISRC (international standard recording code)"),
	FrameSpec::new("TSSE", FrameKind::Text, "Software/Hardware and settings used for encoding"),
	FrameSpec::new("TXXX", FrameKind::Described, "User defined text information frame"),
	FrameSpec::new("TYER", FrameKind::Text, "Year"),
	FrameSpec::new("UFID", FrameKind::UniqueFileIdentifier, "Unique file identifier"),
	FrameSpec::new("USER", FrameKind::Data, "Terms of use"),
	FrameSpec::new("USLT", FrameKind::FullText, "Unsynchronised lyric/text transcription"),
	FrameSpec::new("WCOM", FrameKind::Data, "Commercial information"),
	FrameSpec::new("WCOP", FrameKind::Data, "Copyright/Legal information"),
	FrameSpec::new("WOAF", FrameKind::Data, "Official audio file webpage"),
	FrameSpec::new("WOAR", FrameKind::Data, "Official artist/performer webpage"),
	FrameSpec::new("WOAS", FrameKind::Data, "Official audio source webpage"),
	FrameSpec::new("WORS", FrameKind::Data, "Official Internet radio station homepage"),
	FrameSpec::new("WPAY", FrameKind::Data, "Payment"),
	FrameSpec::new("WPUB", FrameKind::Data, "Publishers official webpage"),
	FrameSpec::new("WXXX", FrameKind::Described, "User defined URL link frame"),
];

// ID3v2.4, `TYER` is kept as many taggers still write it
static V24_FRAMES: &[FrameSpec] = &[
	FrameSpec::new("AENC", FrameKind::Data, "Audio encryption"),
	FrameSpec::new("APIC", FrameKind::Picture, "Attached picture"),
	FrameSpec::new("ASPI", FrameKind::Data, "Audio seek point index"),
	FrameSpec::new("COMM", FrameKind::FullText, "Comments"),
	FrameSpec::new("COMR", FrameKind::Data, "Commercial frame"),
	FrameSpec::new("ENCR", FrameKind::Data, "Encryption method registration"),
	FrameSpec::new("EQU2", FrameKind::Data, "Equalisation (2)"),
	FrameSpec::new("ETCO", FrameKind::Data, "Event timing codes"),
	FrameSpec::new("GEOB", FrameKind::Data, "General encapsulated object"),
	FrameSpec::new("GRID", FrameKind::Data, "Group identification registration"),
	FrameSpec::new("LINK", FrameKind::Data, "Linked information"),
	FrameSpec::new("MCDI", FrameKind::Data, "Music CD identifier"),
	FrameSpec::new("MLLT", FrameKind::Data, "MPEG location lookup table"),
	FrameSpec::new("OWNE", FrameKind::Data, "Ownership frame"),
	FrameSpec::new("PCNT", FrameKind::Data, "Play counter"),
	FrameSpec::new("POPM", FrameKind::Data, "Popularimeter"),
	FrameSpec::new("POSS", FrameKind::Data, "Position synchronisation frame"),
	FrameSpec::new("PRIV", FrameKind::Data, "Private frame"),
	FrameSpec::new("RBUF", FrameKind::Data, "Recommended buffer size"),
	FrameSpec::new("RVA2", FrameKind::Data, "Relative volume adjustment (2)"),
	FrameSpec::new("RVRB", FrameKind::Data, "Reverb"),
	FrameSpec::new("SEEK", FrameKind::Data, "Seek frame"),
	FrameSpec::new("SIGN", FrameKind::Data, "Signature frame"),
	FrameSpec::new("SYLT", FrameKind::Data, "Synchronized lyric/text"),
	FrameSpec::new("SYTC", FrameKind::Data, "Synchronized tempo codes"),
	FrameSpec::new("TALB", FrameKind::Text, "Album/Movie/Show title"),
	FrameSpec::new("TBPM", FrameKind::Text, "BPM (beats per minute)"),
	FrameSpec::new("TCOM", FrameKind::Text, "Composer"),
	FrameSpec::new("TCON", FrameKind::Text, "Content type"),
	FrameSpec::new("TCOP", FrameKind::Text, "Copyright message"),
	FrameSpec::new("TDEN", FrameKind::Text, "Encoding time"),
	FrameSpec::new("TDLY", FrameKind::Text, "Playlist delay"),
	FrameSpec::new("TDOR", FrameKind::Text, "Original release time"),
	FrameSpec::new("TDRC", FrameKind::Text, "Recording time"),
	FrameSpec::new("TDRL", FrameKind::Text, "Release time"),
	FrameSpec::new("TDTG", FrameKind::Text, "Tagging time"),
	FrameSpec::new("TENC", FrameKind::Text, "Encoded by"),
	FrameSpec::new("TEXT", FrameKind::Text, "Lyricist/Text writer"),
	FrameSpec::new("TFLT", FrameKind::Text, "File type"),
	FrameSpec::new("TIPL", FrameKind::Text, "Involved people list"),
	FrameSpec::new("TIT1", FrameKind::Text, "Content group description"),
	FrameSpec::new("TIT2", FrameKind::Text, "Title/songname/content description"),
	FrameSpec::new("TIT3", FrameKind::Text, "Subtitle/Description refinement"),
	FrameSpec::new("TKEY", FrameKind::Text, "Initial key"),
	FrameSpec::new("TLAN", FrameKind::Text, "Language(s)"),
	FrameSpec::new("TLEN", FrameKind::Text, "Length"),
	FrameSpec::new("TMCL", FrameKind::Text, "Musician credits list"),
	FrameSpec::new("TMED", FrameKind::Text, "Media type"),
	FrameSpec::new("TMOO", FrameKind::Text, "Mood"),
	FrameSpec::new("TOAL", FrameKind::Text, "Original album/movie/show title"),
	FrameSpec::new("TOFN", FrameKind::Text, "Original filename"),
	FrameSpec::new("TOLY", FrameKind::Text, "Original lyricist(s)/text writer(s)"),
	FrameSpec::new("TOPE", FrameKind::Text, "Original artist(s)/performer(s)"),
	FrameSpec::new("TOWN", FrameKind::Text, "File owner/licensee"),
	FrameSpec::new("TPE1", FrameKind::Text, "Lead performer(s)/Soloist(s)"),
	FrameSpec::new("TPE2", FrameKind::Text, "Band/orchestra/accompaniment"),
	FrameSpec::new("TPE3", FrameKind::Text, "Conductor/performer refinement"),
	FrameSpec::new("TPE4", FrameKind::Text, "Interpreted, remixed, or otherwise modified by"),
	FrameSpec::new("TPOS", FrameKind::Text, "Part of a set"),
	FrameSpec::new("TPRO", FrameKind::Text, "Produced notice"),
	FrameSpec::new("TPUB", FrameKind::Text, "Publisher"),
	FrameSpec::new("TRCK", FrameKind::Text, "Track number/Position in set"),
	FrameSpec::new("TRSN", FrameKind::Text, "Internet radio station name"),
	FrameSpec::new("TRSO", FrameKind::Text, "Internet radio station owner"),
	FrameSpec::new("TSOA", FrameKind::Text, "Album sort order"),
	FrameSpec::new("TSOP", FrameKind::Text, "Performer sort order"),
	FrameSpec::new("TSOT", FrameKind::Text, "Title sort order"),
	FrameSpec::new("TSRC", FrameKind::Text, "ISRC (international standard recording code)"),
	FrameSpec::new("TSSE", FrameKind::Text, "Software/Hardware and settings used for encoding"),
	FrameSpec::new("TSST", FrameKind::Text, "Set subtitle"),
	FrameSpec::new("TXXX", FrameKind::Described, "User defined text information frame"),
	FrameSpec::new("TYER", FrameKind::Text, "Year"),
	FrameSpec::new("UFID", FrameKind::UniqueFileIdentifier, "Unique file identifier"),
	FrameSpec::new("USER", FrameKind::Data, "Terms of use"),
	FrameSpec::new("USLT", FrameKind::FullText, "Unsynchronised lyric/text transcription"),
	FrameSpec::new("WCOM", FrameKind::Data, "Commercial information"),
	FrameSpec::new("WCOP", FrameKind::Data, "Copyright/Legal information"),
	FrameSpec::new("WOAF", FrameKind::Data, "Official audio file webpage"),
	FrameSpec::new("WOAR", FrameKind::Data, "Official artist/performer webpage"),
	FrameSpec::new("WOAS", FrameKind::Data, "Official audio source webpage"),
	FrameSpec::new("WORS", FrameKind::Data, "Official Internet radio station homepage"),
	FrameSpec::new("WPAY", FrameKind::Data, "Payment"),
	FrameSpec::new("WPUB", FrameKind::Data, "Publishers official webpage"),
	FrameSpec::new("WXXX", FrameKind::Described, "User defined URL link frame"),
];

#[cfg(test)]
mod tests {
	use super::{FrameKind, VersionParams};
	use crate::id3::v2::header::Id3v2Version;

	#[test_log::test]
	fn tables_are_sorted() {
		for version in [Id3v2Version::V2, Id3v2Version::V3, Id3v2Version::V4] {
			let params = VersionParams::for_version(version);
			assert_eq!(params.version, version);
			assert!(
				params.frames.windows(2).all(|w| w[0].id < w[1].id),
				"{version:?} frame table is out of order"
			);
			assert!(params.frames.iter().all(|spec| spec.id.len() == params.id_len));
		}
	}

	#[test_log::test]
	fn lookup() {
		let v2 = VersionParams::for_version(Id3v2Version::V2);
		assert_eq!(v2.lookup("TT2").unwrap().kind, FrameKind::Text);
		assert_eq!(v2.lookup("PIC").unwrap().kind, FrameKind::Picture);
		assert!(v2.lookup("TIT2").is_none());

		let v3 = VersionParams::for_version(Id3v2Version::V3);
		assert_eq!(v3.lookup("COMM").unwrap().kind, FrameKind::FullText);
		assert_eq!(v3.lookup("TXXX").unwrap().kind, FrameKind::Described);
		assert_eq!(v3.lookup("UFID").unwrap().kind, FrameKind::UniqueFileIdentifier);
		assert_eq!(v3.lookup("PRIV").unwrap().kind, FrameKind::Data);
		assert!(v3.lookup("TDRC").is_none());

		let v4 = VersionParams::for_version(Id3v2Version::V4);
		assert_eq!(v4.lookup("TDRC").unwrap().kind, FrameKind::Text);
		assert!(v4.lookup("XXXX").is_none());
	}

	#[test_log::test]
	fn frame_sizes() {
		let v2 = VersionParams::for_version(Id3v2Version::V2);
		assert_eq!(v2.header_len(), 6);
		assert_eq!(v2.frame_size(&[0x01, 0x02, 0x03]), 0x01_0203);

		let v3 = VersionParams::for_version(Id3v2Version::V3);
		assert_eq!(v3.header_len(), 10);
		assert_eq!(v3.frame_size(&[0x00, 0x00, 0x01, 0x00]), 0x100);

		// The same bytes are synchsafe in ID3v2.4
		let v4 = VersionParams::for_version(Id3v2Version::V4);
		assert_eq!(v4.frame_size(&[0x00, 0x00, 0x01, 0x00]), 0x80);
	}
}
