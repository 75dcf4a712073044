//! Distance and toll analytics over route segment tables.
//!
//! # Overview
//!
//! - [`calculate_distance_matrix`]: symmetric distance matrix, with
//!   cumulative distances propagated along the sorted id chain
//! - [`unroll_distance_matrix`]: flatten a matrix back into
//!   `id_start`/`id_end`/`distance` rows
//! - [`find_ids_within_ten_percentage_threshold`]: ids whose distances sit
//!   near a reference id's mean
//! - [`calculate_toll_rate`]: per-vehicle-class toll columns
//! - [`calculate_time_based_toll_rates`]: apply weekday/weekend time-window
//!   discounts to toll columns
//!
//! Rates, windows and tolerances come from [`TollRates`],
//! [`DiscountSchedule`] and [`ThresholdOptions`].
//!
//! # Preconditions
//!
//! Distance propagation assumes that sorted id order follows the route:
//! consecutive ids are adjacent segments. Ids that do not form such a chain
//! get cumulative values that carry no physical meaning.

mod config;
mod distance;
mod threshold;
mod toll;

pub use config::{DiscountSchedule, DiscountWindow, ThresholdOptions, TollRates, VehicleClass};
pub use distance::{calculate_distance_matrix, unroll_distance_matrix};
pub use threshold::{find_ids_within_ten_percentage_threshold, find_ids_within_threshold_with};
pub use toll::{
    calculate_time_based_toll_rates, calculate_time_based_toll_rates_with, calculate_toll_rate,
    calculate_toll_rate_with,
};

pub use traffic_common::{Key, LabeledMatrix, Result, TableError};
