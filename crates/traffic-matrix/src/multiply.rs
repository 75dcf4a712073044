//! Conditional scaling of matrix cells.

use traffic_common::{LabeledMatrix, round_half_even};

use crate::config::MultiplierOptions;

/// Scale every cell: values above 20 by 0.75, all others by 1.25.
///
/// Each product is rounded half-to-even to one decimal place. `NaN` cells
/// stay `NaN`. Returns a new matrix with the same labels.
pub fn multiply_matrix(matrix: &LabeledMatrix) -> LabeledMatrix {
    multiply_matrix_with(matrix, &MultiplierOptions::default())
}

/// [`multiply_matrix`] with explicit threshold, factors and precision.
pub fn multiply_matrix_with(matrix: &LabeledMatrix, options: &MultiplierOptions) -> LabeledMatrix {
    tracing::debug!(
        shape = ?matrix.shape(),
        threshold = options.threshold,
        "multiplying matrix"
    );
    matrix.map(|value| {
        let factor = if value > options.threshold {
            options.above_factor
        } else {
            options.below_factor
        };
        round_half_even(value * factor, options.decimals)
    })
}
