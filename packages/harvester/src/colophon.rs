//! Colophon (`colophon.xhtml`) parsing.
//!
//! The colophon names the painting used for the cover, on a line such as
//! `<i epub:type="se:name.visual-art.painting">The Starry Night</i>.`

use reqwest::blocking::Client;

use crate::config::colophon_url;
use crate::extract::{drop_last_char, first_line_containing, strip_and_remove_tags};
use crate::http::fetch_document;

/// Marks the line naming the cover painting.
pub const PAINTING_MARKER: &str = r#"epub:type="se:name.visual-art.painting""#;

/// Name of the cover painting, or empty when the colophon has none.
///
/// The sentence punctuation that follows the name is dropped.
///
/// # Examples
/// ```
/// use se_corpus::colophon::parse_painting;
///
/// let colophon = r#"<p epub:type="se:name.visual-art.painting">The Starry Night</p>."#;
/// assert_eq!(parse_painting(colophon), "The Starry Night");
/// assert_eq!(parse_painting("<p>No painting here.</p>"), "");
/// ```
#[must_use]
pub fn parse_painting(text: &str) -> String {
    match first_line_containing(text, PAINTING_MARKER) {
        Some(line) => {
            let cleaned = strip_and_remove_tags(line);
            tracing::trace!("found painting in colophon.xhtml");
            drop_last_char(&cleaned).to_string()
        }
        None => {
            tracing::debug!("no painting found in colophon");
            String::new()
        }
    }
}

/// Download a repository's colophon. Missing documents yield an empty string.
pub fn download_colophon(client: &Client, repo_url: &str) -> String {
    match fetch_document(client, &colophon_url(repo_url)) {
        Some(text) => {
            tracing::trace!(repo = repo_url, "found colophon.xhtml");
            text
        }
        None => {
            tracing::info!(repo = repo_url, "no colophon.xhtml found");
            String::new()
        }
    }
}
