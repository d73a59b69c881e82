//! CLI entry point for the corpus harvester.

use clap::Parser;
use se_corpus::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    // Usage errors and --help exit here, before any network activity
    let cli = Cli::parse();
    let verbosity = cli.run_config().verbosity;

    // Default level follows -q/-v/-vv; RUST_LOG takes precedence
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
