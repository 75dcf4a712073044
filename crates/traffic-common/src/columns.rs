//! Column-contract checks and typed column extraction.
//!
//! Operations call these helpers before touching data so that a missing
//! column or a null cell surfaces as a [`TableError`] naming the operation,
//! instead of a generic Polars lookup failure.

use polars::prelude::{AnyValue, Column, DataFrame, DataType};

use crate::error::{Result, TableError};
use crate::key::Key;

/// Fail with [`TableError::MissingColumn`] unless every column is present.
pub fn require_columns(df: &DataFrame, operation: &'static str, columns: &[&str]) -> Result<()> {
    for column in columns {
        if df.column(column).is_err() {
            return Err(TableError::MissingColumn {
                operation,
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}

fn column<'a>(df: &'a DataFrame, operation: &'static str, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| TableError::MissingColumn {
        operation,
        column: name.to_string(),
    })
}

/// Read a column as `f64` values, rejecting nulls and non-numeric cells.
pub fn numeric_values(df: &DataFrame, operation: &'static str, name: &str) -> Result<Vec<f64>> {
    let source = column(df, operation, name)?;
    let numeric = source.cast(&DataType::Float64)?;
    let values = numeric.f64()?;

    let mut out = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        match value {
            Some(v) => out.push(v),
            None => {
                let original = source.get(row).unwrap_or(AnyValue::Null);
                if matches!(original, AnyValue::Null) {
                    return Err(TableError::NullValue {
                        operation,
                        column: name.to_string(),
                        row,
                    });
                }
                return Err(TableError::InvalidValue {
                    operation,
                    column: name.to_string(),
                    row,
                    value: original.to_string(),
                    reason: "not a number".to_string(),
                });
            }
        }
    }
    Ok(out)
}

/// Read a column as [`Key`] labels, rejecting nulls.
pub fn key_values(df: &DataFrame, operation: &'static str, name: &str) -> Result<Vec<Key>> {
    let source = column(df, operation, name)?;
    let mut out = Vec::with_capacity(source.len());
    for row in 0..source.len() {
        let key = Key::from_any(source.get(row)?).ok_or_else(|| TableError::NullValue {
            operation,
            column: name.to_string(),
            row,
        })?;
        out.push(key);
    }
    Ok(out)
}

/// Read a column as trimmed strings, rejecting nulls.
pub fn string_values(df: &DataFrame, operation: &'static str, name: &str) -> Result<Vec<String>> {
    let source = column(df, operation, name)?;
    let text = source.cast(&DataType::String)?;
    let values = text.str()?;

    let mut out = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        let value = value.ok_or_else(|| TableError::NullValue {
            operation,
            column: name.to_string(),
            row,
        })?;
        out.push(value.trim().to_string());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("id".into(), vec![1i64, 2, 3]).into(),
            Series::new("bus".into(), vec![Some(4.0), None, Some(6.0)]).into(),
            Series::new("day".into(), vec![" Monday", "Sunday ", "Friday"]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn test_require_columns_reports_first_missing() {
        let err = require_columns(&frame(), "filter_routes", &["id", "route", "truck"])
            .unwrap_err();
        assert!(matches!(
            err,
            TableError::MissingColumn {
                operation: "filter_routes",
                ref column,
            } if column == "route"
        ));
    }

    #[test]
    fn test_numeric_values_casts_integers() {
        let values = numeric_values(&frame(), "test", "id").unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_numeric_values_rejects_nulls() {
        let err = numeric_values(&frame(), "get_bus_indexes", "bus").unwrap_err();
        assert!(matches!(err, TableError::NullValue { row: 1, .. }));
    }

    #[test]
    fn test_numeric_values_rejects_text() {
        let err = numeric_values(&frame(), "get_bus_indexes", "day").unwrap_err();
        assert!(matches!(err, TableError::InvalidValue { row: 0, .. }));
    }

    #[test]
    fn test_key_values() {
        let keys = key_values(&frame(), "test", "id").unwrap();
        assert_eq!(keys, vec![Key::Int(1), Key::Int(2), Key::Int(3)]);
    }

    #[test]
    fn test_string_values_trims() {
        let days = string_values(&frame(), "test", "day").unwrap();
        assert_eq!(days, vec!["Monday", "Sunday", "Friday"]);
    }
}
