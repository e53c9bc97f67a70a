pub mod raw_reader;

pub use raw_reader::{collapse_spaces, parse_delimited, RawDocument, RawReader};
