//! Matrix and aggregation analytics over traffic count tables.
//!
//! Every function here is a stateless transform: it borrows a Polars
//! `DataFrame` (or a [`LabeledMatrix`]) and returns a freshly built result.
//!
//! # Operations
//!
//! - [`generate_car_matrix`]: pivot `id_1` x `id_2` car counts, zero diagonal
//! - [`get_type_count`]: bucket `car` values into low/medium/high
//! - [`get_bus_indexes`]: rows whose `bus` exceeds twice the mean
//! - [`filter_routes`]: routes whose mean `truck` exceeds a threshold
//! - [`multiply_matrix`]: conditional scale-and-round of every cell
//! - [`time_check`]: per `(id, id_2)` flag for incomplete week coverage
//!
//! Thresholds and factors are configurable through [`AggregationOptions`]
//! and [`MultiplierOptions`]; the plain entry points use the defaults.

mod car_matrix;
mod config;
mod coverage;
mod filters;
mod multiply;
mod type_count;

pub use car_matrix::generate_car_matrix;
pub use config::{AggregationOptions, MultiplierOptions};
pub use coverage::{CoverageFlags, time_check};
pub use filters::{filter_routes, filter_routes_with, get_bus_indexes, get_bus_indexes_with};
pub use multiply::{multiply_matrix, multiply_matrix_with};
pub use type_count::{CarType, get_type_count, get_type_count_with};

pub use traffic_common::{Key, LabeledMatrix, Result, TableError};
