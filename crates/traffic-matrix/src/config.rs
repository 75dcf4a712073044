//! Tunable thresholds for the aggregation operations.

use serde::{Deserialize, Serialize};

/// Thresholds used by the categorizer and the mean-based filters.
///
/// Deserializes from partial documents; absent fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationOptions {
    /// Inclusive upper bound of the "low" car category.
    pub low_max: f64,
    /// Inclusive upper bound of the "medium" car category.
    pub medium_max: f64,
    /// A row is selected when `bus > bus_mean_multiplier * mean(bus)`.
    pub bus_mean_multiplier: f64,
    /// A route is selected when its mean `truck` exceeds this value.
    pub truck_mean_threshold: f64,
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            low_max: 15.0,
            medium_max: 25.0,
            bus_mean_multiplier: 2.0,
            truck_mean_threshold: 7.0,
        }
    }
}

impl AggregationOptions {
    #[must_use]
    pub fn with_category_bounds(mut self, low_max: f64, medium_max: f64) -> Self {
        self.low_max = low_max;
        self.medium_max = medium_max;
        self
    }

    #[must_use]
    pub fn with_bus_mean_multiplier(mut self, multiplier: f64) -> Self {
        self.bus_mean_multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn with_truck_mean_threshold(mut self, threshold: f64) -> Self {
        self.truck_mean_threshold = threshold;
        self
    }
}

/// Factors for [`multiply_matrix_with`](crate::multiply_matrix_with).
///
/// Cells above `threshold` are scaled by `above_factor`, all others by
/// `below_factor`; the product is rounded half-to-even to `decimals` places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiplierOptions {
    pub threshold: f64,
    pub above_factor: f64,
    pub below_factor: f64,
    pub decimals: i32,
}

impl Default for MultiplierOptions {
    fn default() -> Self {
        Self {
            threshold: 20.0,
            above_factor: 0.75,
            below_factor: 1.25,
            decimals: 1,
        }
    }
}

impl MultiplierOptions {
    /// Set the cutoff and the factors applied above and at-or-below it.
    pub fn with_factors(mut self, threshold: f64, above_factor: f64, below_factor: f64) -> Self {
        self.threshold = threshold;
        self.above_factor = above_factor;
        self.below_factor = below_factor;
        self
    }

    pub fn with_decimals(mut self, decimals: i32) -> Self {
        self.decimals = decimals;
        self
    }
}
