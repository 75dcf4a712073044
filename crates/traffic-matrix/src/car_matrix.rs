//! Car-count matrix pivot.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::DataFrame;
use traffic_common::{
    Key, LabeledMatrix, Result, TableError, key_values, numeric_values, require_columns,
};

const OPERATION: &str = "generate_car_matrix";

/// Pivot `id_1` x `id_2` pairs into a matrix of `car` values.
///
/// Rows are the sorted distinct `id_1` values and columns the sorted
/// distinct `id_2` values. Pairs absent from the input stay `NaN`. After the
/// pivot, cell `(i, i)` is set to 0 for every position present on both
/// axes. Zeroing is positional, so the result is only a true self-pair
/// diagonal when both axes carry the same labels.
///
/// # Errors
///
/// - [`TableError::MissingColumn`] if `id_1`, `id_2` or `car` is absent
/// - [`TableError::DuplicateEntry`] if a pair appears twice
pub fn generate_car_matrix(df: &DataFrame) -> Result<LabeledMatrix> {
    require_columns(df, OPERATION, &["id_1", "id_2", "car"])?;
    let sources = key_values(df, OPERATION, "id_1")?;
    let targets = key_values(df, OPERATION, "id_2")?;
    let cars = numeric_values(df, OPERATION, "car")?;

    tracing::debug!(rows = df.height(), "building car matrix");

    let rows = sorted_distinct(&sources);
    let columns = sorted_distinct(&targets);
    let row_pos = positions(&rows);
    let col_pos = positions(&columns);

    let mut matrix = LabeledMatrix::filled(rows, columns, f64::NAN);
    let mut seen = BTreeSet::new();
    for ((source, target), car) in sources.iter().zip(&targets).zip(cars) {
        let cell = (row_pos[source], col_pos[target]);
        if !seen.insert(cell) {
            return Err(TableError::DuplicateEntry {
                operation: OPERATION,
                row: source.to_string(),
                column: target.to_string(),
            });
        }
        matrix.set(cell.0, cell.1, car);
    }

    if !matrix.is_square() {
        tracing::warn!(
            rows = matrix.rows().len(),
            columns = matrix.columns().len(),
            "id_1 and id_2 label sets differ; diagonal is zeroed by position"
        );
    }
    let (height, width) = matrix.shape();
    for i in 0..height.min(width) {
        matrix.set(i, i, 0.0);
    }

    tracing::info!(size = height, "car matrix built");
    Ok(matrix)
}

fn sorted_distinct(keys: &[Key]) -> Vec<Key> {
    keys.iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn positions(labels: &[Key]) -> BTreeMap<Key, usize> {
    labels.iter().cloned().enumerate().map(|(i, k)| (k, i)).collect()
}
