//! Labeled dense matrices.
//!
//! A [`LabeledMatrix`] is the Rust counterpart of a pivoted table: a grid of
//! `f64` cells addressed either by position or by the [`Key`] labels on each
//! axis. Missing cells hold `NaN`.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use crate::error::{Result, TableError};
use crate::key::Key;

/// A dense `f64` matrix with labeled rows and columns, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledMatrix {
    rows: Vec<Key>,
    columns: Vec<Key>,
    values: Vec<f64>,
}

impl LabeledMatrix {
    /// Create a matrix with every cell set to `fill`.
    pub fn filled(rows: Vec<Key>, columns: Vec<Key>, fill: f64) -> Self {
        let values = vec![fill; rows.len() * columns.len()];
        Self {
            rows,
            columns,
            values,
        }
    }

    /// Create a square matrix sharing one label set on both axes.
    pub fn square(labels: Vec<Key>, fill: f64) -> Self {
        Self::filled(labels.clone(), labels, fill)
    }

    /// Create a matrix from row-major cell values.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ShapeMismatch`] if any row has the wrong length.
    pub fn from_rows(rows: Vec<Key>, columns: Vec<Key>, cells: Vec<Vec<f64>>) -> Result<Self> {
        if cells.len() != rows.len() || cells.iter().any(|row| row.len() != columns.len()) {
            return Err(TableError::ShapeMismatch {
                operation: "LabeledMatrix::from_rows",
                rows: cells.len(),
                columns: cells.first().map_or(0, Vec::len),
            });
        }
        Ok(Self {
            rows,
            columns,
            values: cells.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> &[Key] {
        &self.rows
    }

    pub fn columns(&self) -> &[Key] {
        &self.columns
    }

    /// Returns `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// True when both axes carry the same labels in the same order.
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Cell at position `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn at(&self, row: usize, column: usize) -> f64 {
        self.values[self.offset(row, column)]
    }

    /// Overwrite the cell at position `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn set(&mut self, row: usize, column: usize, value: f64) {
        let offset = self.offset(row, column);
        self.values[offset] = value;
    }

    /// Cell addressed by labels, or `None` if either label is unknown.
    pub fn get(&self, row: &Key, column: &Key) -> Option<f64> {
        let i = self.rows.iter().position(|k| k == row)?;
        let j = self.columns.iter().position(|k| k == column)?;
        Some(self.at(i, j))
    }

    /// Apply `f` to every cell, keeping labels.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            rows: self.rows.clone(),
            columns: self.columns.clone(),
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Iterate `(row, column, value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let width = self.columns.len();
        self.values
            .iter()
            .enumerate()
            .map(move |(offset, &v)| (offset / width, offset % width, v))
    }

    /// Export as a DataFrame.
    ///
    /// The first column, named `label_column`, holds the row labels; every
    /// matrix column becomes a `Float64` column named after its label.
    pub fn to_frame(&self, label_column: &str) -> Result<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.columns.len() + 1);
        columns.push(Key::column(label_column, &self.rows));
        for (j, label) in self.columns.iter().enumerate() {
            let values: Vec<f64> = (0..self.rows.len()).map(|i| self.at(i, j)).collect();
            columns.push(Series::new(label.to_string().as_str().into(), values).into());
        }
        Ok(DataFrame::new(columns)?)
    }

    fn offset(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows.len() && column < self.columns.len(),
            "cell ({row}, {column}) outside {}x{} matrix",
            self.rows.len(),
            self.columns.len()
        );
        row * self.columns.len() + column
    }
}
