pub mod file;
pub mod parse;

pub use file::{check_file_type, read_file_to_text};
pub use parse::parse;
