//! CSV table output for the corpus.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::types::BookRecord;

/// Write the header row and one row per record to `writer`.
///
/// Values containing commas, quotes or line breaks are quoted so the table
/// reads back unchanged.
pub fn render_corpus<W: Write>(writer: W, corpus: &[BookRecord]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.serialize(BookRecord::header())?;
    for record in corpus {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render the corpus to a CSV string.
pub fn corpus_to_string(corpus: &[BookRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    render_corpus(&mut buffer, corpus)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the corpus to `path`, creating or truncating the file.
pub fn write_corpus(corpus: &[BookRecord], path: &Path) -> Result<()> {
    tracing::trace!(path = %path.display(), rows = corpus.len() + 1, "writing csv file");
    let file = File::create(path)?;
    render_corpus(file, corpus)
}
