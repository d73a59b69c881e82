//! Line-oriented value extraction from markup documents.
//!
//! Both repository documents keep one value per line, so a value is found by
//! locating the line that carries a marker substring and stripping the markup
//! around it.

use regex::Regex;
use std::sync::LazyLock;

/// A tag span: shortest `<...>` with no nested `<`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<]+?>").expect("valid regex"));

/// Length of a `YYYY-MM-DD` date prefix.
const DATE_PREFIX_LEN: usize = 10;

/// Remove every well-formed tag span. Unbalanced brackets are left alone.
///
/// # Examples
/// ```
/// use se_corpus::extract::remove_tags;
///
/// assert_eq!(remove_tags("<dc:title id=\"title\">Emma</dc:title>"), "Emma");
/// assert_eq!(remove_tags("3 < 4"), "3 < 4");
/// ```
#[must_use]
pub fn remove_tags(text: &str) -> String {
    TAG_PATTERN.replace_all(text, "").into_owned()
}

/// Trim surrounding whitespace, then remove tag spans.
#[must_use]
pub fn strip_and_remove_tags(line: &str) -> String {
    remove_tags(line.trim())
}

/// First line of `text` that contains `marker`.
#[must_use]
pub fn first_line_containing<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    text.lines().find(|line| line.contains(marker))
}

/// Reduce an ISO-8601 timestamp to its date prefix.
///
/// Input shorter than ten characters is returned whole.
///
/// # Examples
/// ```
/// use se_corpus::extract::reformat_time_string;
///
/// assert_eq!(reformat_time_string("2021-05-12T22:13:51Z"), "2021-05-12");
/// assert_eq!(reformat_time_string("2021"), "2021");
/// ```
#[must_use]
pub fn reformat_time_string(time: &str) -> String {
    time.chars().take(DATE_PREFIX_LEN).collect()
}

/// Drop the last character, if any.
#[must_use]
pub fn drop_last_char(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next_back();
    chars.as_str()
}
