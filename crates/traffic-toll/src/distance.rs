//! Distance matrix construction and unrolling.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use traffic_common::{
    Key, LabeledMatrix, Result, TableError, key_values, numeric_values, require_columns,
    round_half_even,
};

/// Build a symmetric distance matrix from `id_start`/`id_end`/`distance` rows.
///
/// Labels are the sorted union of both id columns. The diagonal is 0 and
/// each input row sets both `(start, end)` and `(end, start)`; a later row
/// overwrites an earlier one for the same pair.
///
/// Cumulative distances are then propagated along the label order: for
/// `i >= 2` and `j` from `i - 2` down to 0, cell `(i, j)` becomes
/// `(i - 1, j) + (i, i - 1)` rounded to one decimal and is mirrored into
/// `(j, i)`. Each cell depends on the one computed before it, so the loop
/// order is fixed. Propagated cells replace any direct value at that
/// position.
pub fn calculate_distance_matrix(df: &DataFrame) -> Result<LabeledMatrix> {
    const OPERATION: &str = "calculate_distance_matrix";
    require_columns(df, OPERATION, &["id_start", "id_end", "distance"])?;
    let starts = key_values(df, OPERATION, "id_start")?;
    let ends = key_values(df, OPERATION, "id_end")?;
    let distances = numeric_values(df, OPERATION, "distance")?;

    let labels: Vec<Key> = starts
        .iter()
        .chain(&ends)
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let position: BTreeMap<Key, usize> = labels
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, k)| (k, i))
        .collect();
    let n = labels.len();

    tracing::debug!(rows = df.height(), ids = n, "building distance matrix");

    let mut matrix = LabeledMatrix::square(labels, 0.0);
    for ((start, end), distance) in starts.iter().zip(&ends).zip(distances) {
        let (i, j) = (position[start], position[end]);
        matrix.set(i, j, distance);
        matrix.set(j, i, distance);
    }

    for i in 2..n {
        for j in (0..=i - 2).rev() {
            let value = round_half_even(matrix.at(i - 1, j) + matrix.at(i, i - 1), 1);
            matrix.set(i, j, value);
            matrix.set(j, i, value);
        }
    }

    tracing::info!(size = n, "distance matrix built");
    Ok(matrix)
}

/// Flatten a square matrix into one row per ordered off-diagonal pair.
///
/// Rows come out in nested label order (outer `id_start`, inner `id_end`),
/// giving `n * (n - 1)` rows with columns `id_start`, `id_end`, `distance`.
///
/// # Errors
///
/// [`TableError::ShapeMismatch`] unless both axes carry the same labels.
pub fn unroll_distance_matrix(matrix: &LabeledMatrix) -> Result<DataFrame> {
    const OPERATION: &str = "unroll_distance_matrix";
    if !matrix.is_square() {
        let (rows, columns) = matrix.shape();
        return Err(TableError::ShapeMismatch {
            operation: OPERATION,
            rows,
            columns,
        });
    }

    let labels = matrix.rows();
    let n = labels.len();
    let capacity = n * n.saturating_sub(1);
    let mut starts = Vec::with_capacity(capacity);
    let mut ends = Vec::with_capacity(capacity);
    let mut distances = Vec::with_capacity(capacity);

    for (i, start) in labels.iter().enumerate() {
        for (j, end) in labels.iter().enumerate() {
            if i == j {
                continue;
            }
            starts.push(start.clone());
            ends.push(end.clone());
            distances.push(matrix.at(i, j));
        }
    }

    tracing::debug!(rows = distances.len(), "distance matrix unrolled");

    let columns: Vec<Column> = vec![
        Key::column("id_start", &starts),
        Key::column("id_end", &ends),
        Series::new("distance".into(), distances).into(),
    ];
    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_propagates_along_chain() {
        let df = df! {
            "id_start" => &[1i64, 2],
            "id_end" => &[2i64, 3],
            "distance" => &[10.0, 20.0],
        }
        .unwrap();

        let m = calculate_distance_matrix(&df).unwrap();

        assert_eq!(m.get(&Key::from(1), &Key::from(3)), Some(30.0));
        assert_eq!(m.get(&Key::from(3), &Key::from(1)), Some(30.0));
        assert_eq!(m.get(&Key::from(2), &Key::from(2)), Some(0.0));
    }

    #[test]
    fn test_longer_chain_rounds_sums() {
        let df = df! {
            "id_start" => &[100i64, 101, 102, 103],
            "id_end" => &[101i64, 102, 103, 104],
            "distance" => &[1.1, 2.2, 3.3, 4.4],
        }
        .unwrap();

        let m = calculate_distance_matrix(&df).unwrap();

        assert_eq!(m.at(4, 0), 11.0);
        assert_eq!(m.at(0, 4), 11.0);
        assert_eq!(m.at(3, 1), 5.5);
        assert_eq!(m.at(1, 0), 1.1);
    }

    #[test]
    fn test_ids_sort_numerically() {
        let df = df! {
            "id_start" => &[9i64, 10],
            "id_end" => &[10i64, 11],
            "distance" => &[1.0, 2.0],
        }
        .unwrap();

        let m = calculate_distance_matrix(&df).unwrap();
        assert_eq!(m.rows(), &[Key::from(9), Key::from(10), Key::from(11)]);
    }

    #[test]
    fn test_unroll_skips_diagonal() {
        let labels = vec![Key::from(1), Key::from(2), Key::from(3)];
        let m = LabeledMatrix::from_rows(
            labels.clone(),
            labels,
            vec![
                vec![0.0, 1.0, 2.0],
                vec![1.0, 0.0, 3.0],
                vec![2.0, 3.0, 0.0],
            ],
        )
        .unwrap();

        let df = unroll_distance_matrix(&m).unwrap();

        assert_eq!(df.height(), 6);
        let starts = df.column("id_start").unwrap().i64().unwrap();
        let ends = df.column("id_end").unwrap().i64().unwrap();
        let distance = df.column("distance").unwrap().f64().unwrap();
        assert_eq!((starts.get(0), ends.get(0), distance.get(0)), (Some(1), Some(2), Some(1.0)));
        assert_eq!((starts.get(3), ends.get(3), distance.get(3)), (Some(2), Some(3), Some(3.0)));
        assert_eq!((starts.get(5), ends.get(5), distance.get(5)), (Some(3), Some(2), Some(3.0)));
    }

    #[test]
    fn test_unroll_rejects_rectangular() {
        let m = LabeledMatrix::filled(vec![Key::from(1)], vec![Key::from(1), Key::from(2)], 0.0);
        let err = unroll_distance_matrix(&m).unwrap_err();
        assert!(matches!(err, TableError::ShapeMismatch { rows: 1, columns: 2, .. }));
    }
}
