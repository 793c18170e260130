//! UUID textual format check.

use std::sync::LazyLock;

use regex::Regex;

/// Canonical hyphenated UUID form: 8-4-4-4-12 hex digit groups, version
/// nibble in 1-5, variant nibble in 8/9/a/b. Case-insensitive.
static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("invalid UUID regex")
});

/// Test whether `value` is a well-formed UUID.
///
/// Leading and trailing whitespace is ignored; empty input is invalid. No
/// other normalization is applied, so braces or quotes around the value make
/// it invalid.
pub fn format_check(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    UUID_REGEX.is_match(trimmed)
}
