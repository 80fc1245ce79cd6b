//! CSV loading into a `BinaryTable`.

use crate::error::Result;
use crate::table::{BinaryTable, TransactionBits};
use polars::prelude::*;
use std::path::Path;

/// Reads a headed CSV where each column is an item. Cells equal to `marker`
/// mark the item as present; every other value, and empty cells, as absent.
pub fn load_csv(path: impl AsRef<Path>, marker: &str) -> Result<BinaryTable> {
    let path = path.as_ref();
    // schema inference over zero rows reads every column as text
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let num_transactions = df.height();
    let mut names = Vec::with_capacity(df.width());
    let mut columns = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        names.push(column.name().to_string());
        let values = column.as_materialized_series().str()?;
        let bits: TransactionBits = values
            .into_iter()
            .map(|cell| cell == Some(marker))
            .collect();
        columns.push(bits);
    }

    tracing::debug!(
        path = %path.display(),
        items = names.len(),
        transactions = num_transactions,
        "loaded transaction table"
    );
    BinaryTable::from_columns(names, columns, num_transactions)
}
