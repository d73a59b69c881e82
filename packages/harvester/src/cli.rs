//! Command-line interface for the corpus harvester.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{
    resolve_output_path, validate_output_path, RunConfig, SourceConfig, Verbosity,
    DEFAULT_MIN_PAGE_LEN, DEFAULT_PER_PAGE, LISTING_URL, RAW_HOST_URL,
};
use crate::corpus::complete_corpus;
use crate::error::Result;
use crate::http::create_client;
use crate::table::write_corpus;

/// Harvest bibliographic metadata from every Standard Ebooks repository into a CSV file.
#[derive(Debug, Parser)]
#[command(name = "se-corpus")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output CSV file, or a directory to write se_corpus-YYYY-MM-DD.csv into
    pub output: PathBuf,

    /// Verbose output (-v), very verbose output (-vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print nothing but errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Repository listing endpoint
    #[arg(long, default_value = LISTING_URL)]
    pub listing_url: String,

    /// Host serving raw repository files
    #[arg(long, default_value = RAW_HOST_URL)]
    pub raw_host: String,

    /// Repositories requested per listing page
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,

    /// Listing bodies shorter than this many characters end pagination
    #[arg(long, default_value_t = DEFAULT_MIN_PAGE_LEN)]
    pub min_page_len: usize,

    /// Stop after this many listing pages
    #[arg(long)]
    pub max_pages: Option<u32>,
}

impl Cli {
    #[must_use]
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            verbosity: Verbosity::from_flags(self.quiet, self.verbose),
            output_path: self.output.clone(),
        }
    }

    #[must_use]
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig {
            listing_url: self.listing_url.clone(),
            raw_host: self.raw_host.clone(),
            per_page: self.per_page,
            min_page_len: self.min_page_len,
            max_pages: self.max_pages,
        }
    }
}

/// Run a harvest as described by the parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    let run_config = cli.run_config();
    let source = cli.source_config();
    harvest_command(&run_config, &source)
}

/// Execute the harvest: list, fetch, parse, write.
fn harvest_command(run_config: &RunConfig, source: &SourceConfig) -> Result<()> {
    // Validate everything before making HTTP requests
    source.validate()?;
    let output_path =
        resolve_output_path(&run_config.output_path, chrono::Local::now().date_naive());
    validate_output_path(&output_path)?;

    let quiet = run_config.verbosity.is_quiet();
    if !quiet {
        println!(
            "{} {}",
            style("Harvesting").bold(),
            style(&source.listing_url).cyan()
        );
    }

    // Logs already report progress in verbose modes
    let pb = if run_config.verbosity == Verbosity::Normal {
        let pb = ProgressBar::new(0);
        #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("valid template"),
        );
        pb.set_message("Listing repositories...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    let client = create_client()?;
    let corpus = match complete_corpus(&client, source, |progress| {
        pb.set_length(progress.total as u64);
        pb.set_position(progress.index as u64);
        let name = progress.repo_url.rsplit('/').next().unwrap_or_default();
        pb.set_message(name.to_string());
    }) {
        Ok(corpus) => corpus,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Writing CSV...");
    if let Err(e) = write_corpus(&corpus, &output_path) {
        pb.finish_and_clear();
        return Err(e);
    }
    pb.finish_and_clear();

    if !quiet {
        let paintings = corpus.iter().filter(|r| !r.painting.is_empty()).count();
        println!("  Repositories: {}", style(corpus.len()).green());
        println!("  With painting: {paintings}");
        println!();
        println!(
            "{} {}",
            style("Saved to:").green().bold(),
            output_path.display()
        );
    }

    Ok(())
}
