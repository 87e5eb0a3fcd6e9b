use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use tracing::info;

use crate::data::table::TableModel;

/// Load a CSV file into a table model. The first record is the header
/// row; every following record is a data row. Fields load as the
/// display strings they are — no type coercion happens here, the sort
/// comparator reads cell text live.
pub fn load_csv_to_table<P: AsRef<Path>>(path: P) -> Result<TableModel> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open CSV file {}", path.display()))?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("failed to read CSV headers from {}", path.display()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.with_context(|| format!("bad CSV record in {}", path.display()))?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    info!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "loaded CSV table"
    );
    Ok(TableModel::new(headers, rows))
}
