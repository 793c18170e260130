pub mod error;
pub mod limits;
pub mod record;
pub mod upload;

pub use error::{Result, UuidCsvError};
pub use limits::{CSV_EXTENSION, MAX_RECORDS, MIN_RECORDS};
pub use record::{Record, Stats};
pub use upload::UploadState;
