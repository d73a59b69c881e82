//! HTTP client wrapper for the listing endpoint and raw repository files.
//!
//! Requests are sequential and never retried. The transport's default
//! timeout behavior is kept.

use reqwest::blocking::Client;

use crate::error::{HarvesterError, Result};

/// User agent string identifying this harvester. The GitHub API rejects
/// requests without one.
const USER_AGENT: &str = concat!("se-corpus/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
pub fn create_client() -> Result<Client> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

/// Fetch one listing page as raw text.
///
/// Transport failures and non-success statuses are errors: reading them as
/// an empty page would silently truncate the corpus.
pub fn fetch_listing_page(client: &Client, url: &str, page: u32) -> Result<String> {
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(HarvesterError::ListingStatus { page, status });
    }
    Ok(response.text()?)
}

/// Fetch a repository document, or `None` if it is not available.
///
/// A non-success status means the document does not exist. Transport
/// failures end up the same way but are logged as warnings.
pub fn fetch_document(client: &Client, url: &str) -> Option<String> {
    let response = match client.get(url).send() {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(url, error = %e, "request failed, treating document as missing");
            return None;
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::trace!(url, status = %status, "document not available");
        return None;
    }

    match response.text() {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!(url, error = %e, "failed to read body, treating document as missing");
            None
        }
    }
}
