//! Repository discovery through the paginated listing endpoint.
//!
//! Listing pages are scanned for `"full_name":"owner/name"` tokens rather
//! than deserialized, so a page only needs to carry those tokens.

use regex::Regex;
use reqwest::blocking::Client;
use std::sync::LazyLock;

use crate::config::SourceConfig;
use crate::error::Result;
use crate::http::fetch_listing_page;
use crate::types::RepoRef;

/// `"full_name":"owner/name"`, tolerating whitespace around the colon.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FULL_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""full_name"\s*:\s*"([^"]+)""#).expect("valid regex"));

/// Extract repository references from one listing page, in page order.
///
/// # Examples
/// ```
/// use se_corpus::listing::extract_repo_refs;
///
/// let body = r#"[{"id":1,"full_name":"standardebooks/jane-austen_emma","private":false}]"#;
/// let repos = extract_repo_refs(body);
/// assert_eq!(repos.len(), 1);
/// assert_eq!(repos[0].name, "jane-austen_emma");
/// ```
#[must_use]
pub fn extract_repo_refs(body: &str) -> Vec<RepoRef> {
    FULL_NAME_PATTERN
        .captures_iter(body)
        .filter_map(|caps| {
            let full_name = caps.get(1)?.as_str();
            let repo = RepoRef::parse(full_name);
            if repo.is_none() {
                tracing::debug!(full_name, "skipping malformed repository name");
            }
            repo
        })
        .collect()
}

/// Whether a listing body signals that there are no further pages.
#[must_use]
pub fn is_last_page(body: &str, min_page_len: usize) -> bool {
    body.chars().count() < min_page_len
}

/// Walk the listing pages and return repository base URLs in discovery order.
///
/// Pagination stops at the first page whose body is shorter than
/// `source.min_page_len`, at the first page that names no repository, or
/// after `source.max_pages` pages.
pub fn list_repositories(client: &Client, source: &SourceConfig) -> Result<Vec<String>> {
    tracing::info!("looking for repos...");

    let mut repo_urls = Vec::new();
    let mut page: u32 = 0;

    loop {
        if source.max_pages.is_some_and(|max| page >= max) {
            tracing::debug!(max_pages = page, "page limit reached");
            break;
        }
        page += 1;

        let url = source.listing_page_url(page);
        tracing::debug!(url = %url, "checking listing page");
        let body = fetch_listing_page(client, &url, page)?;

        if is_last_page(&body, source.min_page_len) {
            break;
        }

        let repos = extract_repo_refs(&body);
        if repos.is_empty() {
            tracing::debug!(page, "listing page names no repositories");
            break;
        }

        for repo in repos {
            let repo_url = source.repo_base_url(&repo);
            tracing::trace!(repo_url = %repo_url, "found repo");
            repo_urls.push(repo_url);
        }
    }

    tracing::debug!(count = repo_urls.len(), "repos found");
    Ok(repo_urls)
}
