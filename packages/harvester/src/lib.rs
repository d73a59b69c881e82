//! Standard Ebooks corpus harvester.
//!
//! This crate walks the repository listing of the Standard Ebooks
//! organization, pulls each book's package metadata (`content.opf`) and
//! colophon (`colophon.xhtml`), extracts bibliographic fields from them and
//! writes the result as a CSV table.
//!
//! # Example
//!
//! ```
//! use se_corpus::{opf::parse_opf, table::corpus_to_string};
//!
//! let opf = r##"<meta property="file-as" refines="#title">Emma</meta>"##;
//! let record = parse_opf(opf);
//! assert_eq!(record.title, "Emma");
//!
//! let csv = corpus_to_string(&[record]).unwrap();
//! assert!(csv.starts_with("Title,Author,SE subject,"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Endpoints, run configuration and validation
//! - [`types`]: Repository references and bibliographic records
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client for the listing and raw documents
//! - [`extract`]: Line-pattern extraction and date normalization
//! - [`opf`]: Package-metadata document parsing
//! - [`colophon`]: Colophon painting extraction
//! - [`listing`]: Paginated repository discovery
//! - [`corpus`]: Harvest orchestration
//! - [`table`]: CSV output
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod colophon;
pub mod config;
pub mod corpus;
pub mod error;
pub mod extract;
pub mod http;
pub mod listing;
pub mod opf;
pub mod table;
pub mod types;

// Re-export main functions
pub use corpus::{complete_corpus, harvest_corpus};
pub use table::write_corpus;

// Re-export commonly used items
pub use config::{RunConfig, SourceConfig, Verbosity};
pub use error::{HarvesterError, Result};
pub use types::{BookRecord, Corpus, Field, RepoRef};
