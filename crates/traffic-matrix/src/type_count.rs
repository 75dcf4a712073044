//! Car volume categorization.

use std::collections::BTreeMap;
use std::fmt;

use polars::prelude::DataFrame;
use traffic_common::{Result, numeric_values, require_columns};

use crate::config::AggregationOptions;

const OPERATION: &str = "get_type_count";

/// Volume category of a `car` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarType {
    Low,
    Medium,
    High,
}

impl CarType {
    /// Classify with the default bounds (15 and 25).
    pub fn classify(car: f64) -> Self {
        Self::classify_with(car, &AggregationOptions::default())
    }

    /// Classify against `options`, first match wins.
    ///
    /// `NaN` satisfies neither bound and therefore lands in [`CarType::High`].
    pub fn classify_with(car: f64, options: &AggregationOptions) -> Self {
        if car <= options.low_max {
            Self::Low
        } else if car <= options.medium_max {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Count rows per car category, keyed by label in ascending order.
///
/// Only categories that occur are present. The input table is not modified.
pub fn get_type_count(df: &DataFrame) -> Result<BTreeMap<&'static str, usize>> {
    get_type_count_with(df, &AggregationOptions::default())
}

/// [`get_type_count`] with explicit category bounds.
pub fn get_type_count_with(
    df: &DataFrame,
    options: &AggregationOptions,
) -> Result<BTreeMap<&'static str, usize>> {
    require_columns(df, OPERATION, &["car"])?;
    let cars = numeric_values(df, OPERATION, "car")?;

    let mut counts = BTreeMap::new();
    for car in cars {
        *counts
            .entry(CarType::classify_with(car, options).label())
            .or_insert(0) += 1;
    }

    tracing::debug!(rows = df.height(), categories = counts.len(), "car types counted");
    Ok(counts)
}
