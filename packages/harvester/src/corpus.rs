//! Corpus harvesting service that ties listing, fetching and parsing together.

use reqwest::blocking::Client;

use crate::colophon::{download_colophon, parse_painting};
use crate::config::SourceConfig;
use crate::error::Result;
use crate::http::create_client;
use crate::listing::list_repositories;
use crate::opf::{download_opf, parse_opf};
use crate::types::{BookRecord, Corpus};

/// Progress of a harvest, reported after each repository.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    /// 1-based position of the repository just processed.
    pub index: usize,
    /// Number of repositories discovered.
    pub total: usize,
    pub repo_url: &'a str,
}

/// Fetch and parse both documents of one repository.
///
/// Never fails: a document that cannot be fetched leaves its fields empty.
pub fn record_from_repo_url(client: &Client, repo_url: &str) -> BookRecord {
    let opf = download_opf(client, repo_url);
    let colophon = download_colophon(client, repo_url);
    parse_opf(&opf).with_painting(parse_painting(&colophon))
}

/// Build the corpus: one record per discovered repository, in discovery order.
pub fn complete_corpus<F>(
    client: &Client,
    source: &SourceConfig,
    mut on_progress: F,
) -> Result<Corpus>
where
    F: FnMut(Progress<'_>),
{
    let repo_urls = list_repositories(client, source)?;
    let total = repo_urls.len();

    let mut corpus = Vec::with_capacity(total);
    for (i, repo_url) in repo_urls.iter().enumerate() {
        corpus.push(record_from_repo_url(client, repo_url));
        tracing::trace!(repo = %repo_url, "got metadata");
        on_progress(Progress {
            index: i + 1,
            total,
            repo_url,
        });
    }

    Ok(corpus)
}

/// Harvest the corpus with a fresh client and no progress reporting.
pub fn harvest_corpus(source: &SourceConfig) -> Result<Corpus> {
    source.validate()?;
    let client = create_client()?;
    complete_corpus(&client, source, |_| {})
}
