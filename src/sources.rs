//! Load-source reading and content-file validation.
//!
//! The repository contract only requires an ordered sequence of raw
//! records; this module supplies the one concrete encoding the CLI ships
//! with, a JSON array of `{id, category, question, answer}` objects.
//! Record order in the file is the load order, which fixes per-category
//! listing order and the first-seen order of categories.
//!
//! I/O and parse failures surface as `anyhow` errors with the offending
//! path attached; integrity violations are the repository's typed
//! [`Error`](crate::error::Error) and are reported separately by
//! [`run_check`].

use std::path::Path;

use anyhow::{Context, Result};

use crate::models::RawEntry;
use crate::repository::Repository;

/// Read an ordered JSON array of raw records from a file.
pub fn read_records(path: &Path) -> Result<Vec<RawEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;

    let records: Vec<RawEntry> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse content file: {}", path.display()))?;

    Ok(records)
}

/// CLI entry point — load a content file and report its integrity.
///
/// Prints entry and category counts on success; on an integrity violation
/// prints the error and exits non-zero, matching the load contract that a
/// repository either fully constructs or does not exist.
pub fn run_check(path: &Path) -> Result<()> {
    let records = read_records(path)?;

    let repo = match Repository::load(records) {
        Ok(repo) => repo,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "ok: {} entries across {} categories",
        repo.len(),
        repo.categories().count()
    );
    Ok(())
}
