//! Mean-based row and group filters.

use polars::prelude::{DataFrame, DataType, IntoLazy, col, lit};
use traffic_common::{Key, Result, TableError, key_values, mean, numeric_values, require_columns};

use crate::config::AggregationOptions;

/// Row positions whose `bus` value exceeds twice the column mean, ascending.
pub fn get_bus_indexes(df: &DataFrame) -> Result<Vec<usize>> {
    get_bus_indexes_with(df, &AggregationOptions::default())
}

/// [`get_bus_indexes`] with an explicit mean multiplier.
///
/// # Errors
///
/// [`TableError::EmptySelection`] on an empty table, since the mean is
/// undefined.
pub fn get_bus_indexes_with(df: &DataFrame, options: &AggregationOptions) -> Result<Vec<usize>> {
    const OPERATION: &str = "get_bus_indexes";
    require_columns(df, OPERATION, &["bus"])?;
    let buses = numeric_values(df, OPERATION, "bus")?;
    let average = mean(&buses).ok_or_else(|| TableError::EmptySelection {
        operation: OPERATION,
        column: "bus".to_string(),
    })?;
    let cutoff = options.bus_mean_multiplier * average;

    let indexes: Vec<usize> = buses
        .iter()
        .enumerate()
        .filter(|(_, bus)| **bus > cutoff)
        .map(|(idx, _)| idx)
        .collect();

    tracing::debug!(mean = average, cutoff, selected = indexes.len(), "bus indexes filtered");
    Ok(indexes)
}

/// Routes whose mean `truck` value exceeds 7, in ascending order.
pub fn filter_routes(df: &DataFrame) -> Result<Vec<Key>> {
    filter_routes_with(df, &AggregationOptions::default())
}

/// [`filter_routes`] with an explicit threshold.
pub fn filter_routes_with(df: &DataFrame, options: &AggregationOptions) -> Result<Vec<Key>> {
    const OPERATION: &str = "filter_routes";
    require_columns(df, OPERATION, &["route", "truck"])?;
    // Validates both columns before aggregation so nulls fail fast.
    key_values(df, OPERATION, "route")?;
    numeric_values(df, OPERATION, "truck")?;

    let means = df
        .clone()
        .lazy()
        .group_by([col("route")])
        .agg([col("truck").cast(DataType::Float64).mean().alias("truck_mean")])
        .filter(col("truck_mean").gt(lit(options.truck_mean_threshold)))
        .collect()?;

    let mut routes = key_values(&means, OPERATION, "route")?;
    routes.sort();

    tracing::debug!(
        threshold = options.truck_mean_threshold,
        selected = routes.len(),
        "routes filtered"
    );
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_bus_indexes_above_twice_mean() {
        // mean = 10, cutoff = 20
        let df = df! { "bus" => &[1.0, 2.0, 25.0, 0.0, 20.0, 12.0] }.unwrap();
        assert_eq!(get_bus_indexes(&df).unwrap(), vec![2]);
    }

    #[test]
    fn test_bus_indexes_empty_when_uniform() {
        let df = df! { "bus" => &[3i64, 3, 3] }.unwrap();
        assert!(get_bus_indexes(&df).unwrap().is_empty());
    }

    #[test]
    fn test_bus_indexes_reject_empty_table() {
        let df = df! { "bus" => Vec::<f64>::new() }.unwrap();
        let err = get_bus_indexes(&df).unwrap_err();
        assert!(matches!(err, TableError::EmptySelection { .. }));
    }

    #[test]
    fn test_routes_with_high_truck_mean() {
        let df = df! {
            "route" => &["B", "A", "A", "C", "B"],
            "truck" => &[10i64, 8, 7, 1, 6],
        }
        .unwrap();
        // A: 7.5, B: 8.0, C: 1.0
        let routes = filter_routes(&df).unwrap();
        assert_eq!(routes, vec![Key::from("A"), Key::from("B")]);
    }

    #[test]
    fn test_routes_threshold_is_strict() {
        let df = df! {
            "route" => &["A", "A"],
            "truck" => &[7.0, 7.0],
        }
        .unwrap();
        assert!(filter_routes(&df).unwrap().is_empty());

        let options = AggregationOptions::default().with_truck_mean_threshold(6.5);
        assert_eq!(filter_routes_with(&df, &options).unwrap(), vec![Key::from("A")]);
    }

    #[test]
    fn test_routes_require_truck() {
        let df = df! { "route" => &["A"] }.unwrap();
        let err = filter_routes(&df).unwrap_err();
        assert!(matches!(err, TableError::MissingColumn { ref column, .. } if column == "truck"));
    }
}
