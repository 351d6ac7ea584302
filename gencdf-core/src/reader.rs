use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{extract_value, CdfOptions, Distribution};
use gencdf_common::Result;

/// Single forward pass over the input: one value extracted and recorded
/// per non-comment line. Line numbers in diagnostics are 1-based.
pub fn ingest<R: BufRead>(reader: R, opts: &CdfOptions) -> Result<Distribution> {
    let mut dist = Distribution::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(value) = extract_value(&line, idx + 1, opts)? {
            dist.record(value);
        }
    }
    Ok(dist)
}

/// Ingest from a file. The handle is scoped to this call and closed on
/// every exit path, including parse failures.
pub fn ingest_file(path: &Path, opts: &CdfOptions) -> Result<Distribution> {
    let file = File::open(path)?;
    ingest(BufReader::new(file), opts)
}
