//! Bulk input file loading
//!
//! Reads the logical row shape the validator expects: column A = address,
//! column B = token amount, row 1 a header. Binary spreadsheet formats are
//! out of scope; operators export to comma-separated text first.

use crate::domain::{DisburseError, DistributionRequest, Result};
use std::fs;
use std::path::Path;

/// Load raw distribution rows from a two-column file
///
/// The header row is skipped and blank lines are ignored. A row is never
/// dropped for bad content: an unparseable amount is mapped to NaN so the
/// validator reports the row instead of this loader silently eating it.
pub fn load_rows(path: impl AsRef<Path>) -> Result<Vec<DistributionRequest>> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|e| {
        DisburseError::Input(format!("Failed to read input file {}: {}", path.display(), e))
    })?;

    let rows: Vec<DistributionRequest> = contents
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect();

    tracing::info!(
        path = %path.display(),
        count = rows.len(),
        "Loaded distribution rows"
    );

    Ok(rows)
}

fn parse_line(line: &str) -> DistributionRequest {
    let mut columns = line.splitn(2, ',');
    let address = columns.next().unwrap_or("").trim().to_string();
    let amount = columns
        .next()
        .map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(f64::NAN);

    DistributionRequest::new(address, amount)
}
