use crate::CdfOptions;
use gencdf_common::{CdfError, Result};

/// Pull the configured column out of one input line.
///
/// Comment lines (prefix match after trimming) and blank lines yield
/// `None` and contribute nothing downstream. Malformed lines are fatal:
/// a missing column or a non-numeric token aborts the whole run rather
/// than being skipped silently, with the 1-based line number in the
/// diagnostic. Column indices in errors are reported 1-based to match
/// the CLI surface.
pub fn extract_value(line: &str, line_no: usize, opts: &CdfOptions) -> Result<Option<f64>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !opts.comment_prefix.is_empty() && trimmed.starts_with(&opts.comment_prefix) {
        return Ok(None);
    }
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let token = *tokens.get(opts.column).ok_or(CdfError::Column {
        line: line_no,
        column: opts.column + 1,
        tokens: tokens.len(),
    })?;
    let value: f64 = token.parse().map_err(|_| CdfError::Number {
        line: line_no,
        token: token.to_owned(),
    })?;
    // NaN/inf would poison the sorted walk; treat them as parse failures
    if !value.is_finite() {
        return Err(CdfError::Number {
            line: line_no,
            token: token.to_owned(),
        });
    }
    Ok(Some(value))
}
