//! ドメイン層（純粋な値と変換。I/O を持たない）

pub mod dump_parser;
pub mod feedback;
pub mod profile;

pub use dump_parser::parse;
pub use feedback::{render_document, FeedbackItem};
pub use profile::{filter_records, ProfileRecord};
