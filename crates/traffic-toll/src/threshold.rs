//! Reference-relative distance filter.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;
use traffic_common::{Key, Result, TableError, key_values, mean, numeric_values, require_columns};

use crate::config::ThresholdOptions;

/// `id_start` values with a row distance within 10% of the reference mean.
///
/// See [`find_ids_within_threshold_with`].
pub fn find_ids_within_ten_percentage_threshold(
    df: &DataFrame,
    reference_id: &Key,
) -> Result<Vec<Key>> {
    find_ids_within_threshold_with(df, reference_id, &ThresholdOptions::default())
}

/// Collect `id_start` values whose rows lie near the reference mean.
///
/// The mean is taken over the `distance` of rows whose `id_start` equals
/// `reference_id`. Every row in the table whose own `distance` falls within
/// `[mean * (1 - tolerance), mean * (1 + tolerance)]` contributes its
/// `id_start`. The filter is per row, not per-id average. The result is
/// sorted and de-duplicated.
///
/// # Errors
///
/// [`TableError::EmptySelection`] if no row has `reference_id` as `id_start`.
pub fn find_ids_within_threshold_with(
    df: &DataFrame,
    reference_id: &Key,
    options: &ThresholdOptions,
) -> Result<Vec<Key>> {
    const OPERATION: &str = "find_ids_within_ten_percentage_threshold";
    require_columns(df, OPERATION, &["id_start", "distance"])?;
    let starts = key_values(df, OPERATION, "id_start")?;
    let distances = numeric_values(df, OPERATION, "distance")?;

    let reference: Vec<f64> = starts
        .iter()
        .zip(&distances)
        .filter(|(start, _)| *start == reference_id)
        .map(|(_, distance)| *distance)
        .collect();
    let average = mean(&reference).ok_or_else(|| TableError::EmptySelection {
        operation: OPERATION,
        column: "distance".to_string(),
    })?;
    let lower = average * (1.0 - options.tolerance);
    let upper = average * (1.0 + options.tolerance);

    let ids: BTreeSet<Key> = starts
        .into_iter()
        .zip(distances)
        .filter(|(_, distance)| *distance >= lower && *distance <= upper)
        .map(|(start, _)| start)
        .collect();

    tracing::debug!(
        reference = %reference_id,
        mean = average,
        lower,
        upper,
        selected = ids.len(),
        "ids filtered by distance threshold"
    );
    Ok(ids.into_iter().collect())
}
