use crate::error::{Error, Result};
use crate::types::{Dataset, RawRecord};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub total_rows: usize,
    /// Rows whose ordinal came from their position in the source.
    pub backfilled_ordinals: usize,
}

/// Parse a JSON array of `{no?, country, mobile, computer}` objects.
pub fn parse_dataset(json: &str) -> Result<(Dataset, LoadReport)> {
    let raw: Vec<RawRecord> = serde_json::from_str(json)?;
    let report = LoadReport {
        total_rows: raw.len(),
        backfilled_ordinals: raw.iter().filter(|r| r.no.unwrap_or(0) == 0).count(),
    };
    let dataset = Dataset::from_raw(raw)?;
    Ok((dataset, report))
}

/// Read and validate the dataset file. Any failure, including a file that is
/// well-formed but empty, becomes [`Error::DatasetLoad`]; no partial dataset
/// is ever returned.
pub fn load_dataset(path: &Path) -> Result<(Dataset, LoadReport)> {
    let load_err = |reason: String| Error::DatasetLoad {
        path: path.to_path_buf(),
        reason,
    };
    let text = std::fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
    let (dataset, report) = parse_dataset(&text).map_err(|e| load_err(e.to_string()))?;
    tracing::info!(
        path = %path.display(),
        rows = report.total_rows,
        backfilled = report.backfilled_ordinals,
        "loaded dataset"
    );
    Ok((dataset, report))
}
