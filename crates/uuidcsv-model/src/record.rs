use serde::{Deserialize, Serialize};

/// One input line's validation result.
///
/// `position` is the 1-based line number in the original file, including a
/// stripped header row when one was detected. Within one parse result the
/// positions are unique and strictly increase by 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub position: usize,
    pub value: String,
    pub is_valid: bool,
}

/// Aggregate statistics derived from a record list.
///
/// `percentage` is the valid share rounded to the nearest integer, 0 when the
/// list is empty. Stats are recomputed on demand, never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub percentage: u32,
}
