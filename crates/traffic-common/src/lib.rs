//! Shared utilities for the traffic analytics crates.
//!
//! This crate provides the pieces every analytics operation builds on:
//!
//! - **columns**: column-contract checks and typed column extraction
//! - **key**: the [`Key`] label type for entity identifiers and categories
//! - **matrix**: the [`LabeledMatrix`] type for pivoted and square tables
//! - **datetime**: weekday/time-of-day parsing for schedule columns
//! - **numeric**: decimal rounding and means
//! - **values**: Polars `AnyValue` conversions
//! - **logging**: `tracing-subscriber` initialization

pub mod columns;
pub mod datetime;
pub mod error;
pub mod key;
pub mod logging;
pub mod matrix;
pub mod numeric;
pub mod values;

// Re-export commonly used items at crate root for convenience
pub use columns::{key_values, numeric_values, require_columns, string_values};
pub use datetime::{DayType, WeekTimestamp, parse_time_of_day, parse_weekday};
pub use error::{Result, TableError};
pub use key::Key;
pub use matrix::LabeledMatrix;
pub use numeric::{mean, round_half_even};
pub use values::{any_to_string, format_numeric};
