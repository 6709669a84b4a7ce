mod attached_picture_frame;
mod binary_frame;
mod full_text_frame;
mod text_frame;
mod unique_file_identifier;

pub use attached_picture_frame::AttachedPictureFrame;
pub use binary_frame::BinaryFrame;
pub use full_text_frame::FullTextFrame;
pub use text_frame::TextFrame;
pub use unique_file_identifier::UniqueFileIdentifierFrame;
