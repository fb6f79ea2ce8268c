//! CSV export of the full dataset.
//!
//! The export always reflects the complete dataset in source order, whatever
//! the table is currently filtered to.

use crate::error::{Error, Result};
use crate::types::{Dataset, Record};
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use std::path::{Path, PathBuf};

pub const EXPORT_FILE_NAME: &str = "data_statistika.csv";
pub const EXPORT_MIME: &str = "text/csv";
pub const HEADER: [&str; 4] = ["no", "country", "mobile", "computer"];

/// Render `no,country,mobile,computer` plus one row per record.
///
/// Rows are `\n`-separated with no trailing newline. Numbers use their
/// shortest natural form (`80`, `55.9`); text fields are quoted only when
/// they contain a delimiter, quote or line break.
pub fn to_csv(dataset: &Dataset) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());
    wtr.write_record(HEADER)?;
    for r in dataset {
        wtr.write_record([
            r.ordinal.to_string(),
            r.country.clone(),
            r.mobile.to_string(),
            r.computer.to_string(),
        ])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))?;
    let mut text = String::from_utf8(bytes)
        .map_err(|e| Error::InvalidArgument(format!("export is not UTF-8: {e}")))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Parse text produced by [`to_csv`] back into records.
pub fn from_csv(text: &str) -> Result<Vec<Record>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let headers = rdr.headers()?.clone();
    if headers.iter().ne(HEADER) {
        return Err(Error::InvalidArgument(format!(
            "unexpected CSV header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }
    let mut out = Vec::new();
    for row in rdr.deserialize::<Record>() {
        out.push(row?);
    }
    Ok(out)
}

/// Write the export into `dir` under [`EXPORT_FILE_NAME`].
pub fn write_export(dataset: &Dataset, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, to_csv(dataset)?)?;
    tracing::info!(path = %path.display(), rows = dataset.len(), "exported dataset");
    Ok(path)
}
