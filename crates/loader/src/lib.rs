//! Statement input loading for Soapbox.
//!
//! Input files arrive in whatever shape someone last exported: CSV/TSV with
//! a header row, text blocks keyed by statement IDs, or plain prose. Format
//! detection runs as an ordered chain — tabular, then blocks, then the whole
//! file as a single statement — with each detector returning either a
//! populated list or "no match" and falling through to the next.

mod blocks;
mod tabular;

use std::path::Path;

use soapbox_core::{LoaderError, Statement};
use tracing::debug;

/// Load statements from an input file, auto-detecting the format.
///
/// Returns an empty list only when the file is empty after trimming; the
/// caller decides whether that is fatal.
pub fn load(path: &Path) -> Result<Vec<Statement>, LoaderError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoaderError::ReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(load_str(&content))
}

/// Run the detector chain over already-read content.
pub fn load_str(content: &str) -> Vec<Statement> {
    if let Some(statements) = tabular::detect(content) {
        debug!(count = statements.len(), "Parsed tabular input");
        return statements;
    }

    if let Some(statements) = blocks::detect(content) {
        debug!(count = statements.len(), "Parsed block-delimited input");
        return statements;
    }

    whole_file(content)
}

/// Last-resort detector: the entire file as one statement with id "S1".
fn whole_file(content: &str) -> Vec<Statement> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    vec![Statement::new("S1", trimmed)]
}
