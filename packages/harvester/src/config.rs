//! Configuration constants, run configuration and validation functions.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{HarvesterError, Result};
use crate::types::RepoRef;

/// Paginated repository listing of the Standard Ebooks organization.
pub const LISTING_URL: &str = "https://api.github.com/users/standardebooks/repos";

/// Host serving raw repository files.
pub const RAW_HOST_URL: &str = "https://raw.github.com";

/// Repositories requested per listing page.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Listing bodies shorter than this many characters end pagination.
///
/// An empty page from the listing API is `[]` plus whitespace, while any page
/// carrying a repository entry is several kilobytes long.
pub const DEFAULT_MIN_PAGE_LEN: usize = 100;

/// Path of the package-metadata document below a repository base URL.
pub const CONTENT_OPF_PATH: &str = "/master/src/epub/content.opf";

/// Path of the colophon document below a repository base URL.
pub const COLOPHON_PATH: &str = "/master/src/epub/text/colophon.xhtml";

/// File name prefix used when the output path is a directory.
pub const OUTPUT_FILE_PREFIX: &str = "se_corpus";

/// Absolute http(s) URL.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HTTP_URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/]+\S*$").expect("valid regex"));

/// Console verbosity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Print nothing but fatal errors.
    Quiet,
    /// Progress and missing-document notices.
    #[default]
    Normal,
    /// Adds listing pages and per-repository notices.
    Verbose,
    /// Adds every discovered repository and document.
    VeryVerbose,
}

impl Verbosity {
    /// Build from CLI flags. `quiet` wins over any number of `-v`.
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::VeryVerbose,
        }
    }

    /// Default `tracing` filter directive for this tier.
    #[must_use]
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "info",
            Self::Verbose => "debug",
            Self::VeryVerbose => "trace",
        }
    }

    #[must_use]
    pub fn is_quiet(&self) -> bool {
        matches!(self, Self::Quiet)
    }
}

/// Where the corpus is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Listing endpoint, without query string.
    pub listing_url: String,
    /// Raw-content host prefix for repository documents.
    pub raw_host: String,
    /// Repositories per listing page.
    pub per_page: u32,
    /// Body length below which a listing page counts as the last one.
    pub min_page_len: usize,
    /// Hard stop after this many listing pages.
    pub max_pages: Option<u32>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            listing_url: LISTING_URL.to_string(),
            raw_host: RAW_HOST_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            min_page_len: DEFAULT_MIN_PAGE_LEN,
            max_pages: None,
        }
    }
}

impl SourceConfig {
    /// Check that both endpoints are absolute http(s) URLs.
    pub fn validate(&self) -> Result<()> {
        validate_url(&self.listing_url)?;
        validate_url(&self.raw_host)
    }

    /// URL of one listing page. Pages start at 1.
    ///
    /// # Examples
    /// ```
    /// use se_corpus::config::SourceConfig;
    ///
    /// let source = SourceConfig::default();
    /// assert_eq!(
    ///     source.listing_page_url(2),
    ///     "https://api.github.com/users/standardebooks/repos?per_page=100&page=2"
    /// );
    /// ```
    #[must_use]
    pub fn listing_page_url(&self, page: u32) -> String {
        format!("{}?per_page={}&page={page}", self.listing_url, self.per_page)
    }

    /// Base URL under which a repository's raw files live.
    #[must_use]
    pub fn repo_base_url(&self, repo: &RepoRef) -> String {
        format!("{}/{}", self.raw_host.trim_end_matches('/'), repo.full_name())
    }
}

/// URL of the package-metadata document for a repository base URL.
#[must_use]
pub fn content_opf_url(repo_url: &str) -> String {
    format!("{repo_url}{CONTENT_OPF_PATH}")
}

/// URL of the colophon document for a repository base URL.
#[must_use]
pub fn colophon_url(repo_url: &str) -> String {
    format!("{repo_url}{COLOPHON_PATH}")
}

/// Validate that `url` is an absolute http(s) URL.
///
/// # Examples
/// ```
/// use se_corpus::config::validate_url;
///
/// assert!(validate_url("https://raw.github.com").is_ok());
/// assert!(validate_url("raw.github.com").is_err());
/// ```
pub fn validate_url(url: &str) -> Result<()> {
    if HTTP_URL_PATTERN.is_match(url) {
        Ok(())
    } else {
        Err(HarvesterError::InvalidUrl(url.to_string()))
    }
}

/// Immutable settings for one run, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub verbosity: Verbosity,
    pub output_path: PathBuf,
}

/// Name of the CSV file written when the output path is a directory.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use se_corpus::config::default_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(default_file_name(date), "se_corpus-2024-03-09.csv");
/// ```
#[must_use]
pub fn default_file_name(today: NaiveDate) -> String {
    format!("{OUTPUT_FILE_PREFIX}-{}.csv", today.format("%Y-%m-%d"))
}

/// Resolve the file to write.
///
/// An existing directory gets a dated `se_corpus-YYYY-MM-DD.csv` inside it;
/// anything else is used as given.
#[must_use]
pub fn resolve_output_path(path: &Path, today: NaiveDate) -> PathBuf {
    if path.is_dir() {
        path.join(default_file_name(today))
    } else {
        path.to_path_buf()
    }
}

/// Fail early when the output file's directory does not exist.
pub fn validate_output_path(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };
    if !parent.is_dir() {
        return Err(HarvesterError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", parent.display()),
        )));
    }
    Ok(())
}
