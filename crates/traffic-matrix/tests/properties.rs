//! Property tests for the aggregation invariants.

use polars::df;
use proptest::prelude::*;
use traffic_matrix::{
    CarType, Key, LabeledMatrix, generate_car_matrix, get_bus_indexes, get_type_count,
    multiply_matrix,
};

proptest! {
    #[test]
    fn test_car_matrix_diagonal_is_zero(
        cells in proptest::collection::btree_map((0i64..6, 0i64..6), 0.0f64..100.0, 1..30)
    ) {
        let id_1: Vec<i64> = cells.keys().map(|k| k.0).collect();
        let id_2: Vec<i64> = cells.keys().map(|k| k.1).collect();
        let car: Vec<f64> = cells.values().copied().collect();
        let df = df! { "id_1" => id_1, "id_2" => id_2, "car" => car }.unwrap();

        let matrix = generate_car_matrix(&df).unwrap();
        let (rows, columns) = matrix.shape();
        for i in 0..rows.min(columns) {
            prop_assert_eq!(matrix.at(i, i), 0.0);
        }
    }

    #[test]
    fn test_type_counts_sum_to_rows(cars in proptest::collection::vec(0.0f64..60.0, 1..50)) {
        let df = df! { "car" => cars.clone() }.unwrap();
        let counts = get_type_count(&df).unwrap();

        prop_assert_eq!(counts.values().sum::<usize>(), cars.len());
        for key in counts.keys() {
            prop_assert!(["low", "medium", "high"].contains(key));
        }
        let keys: Vec<_> = counts.keys().copied().collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(keys, sorted);
        for car in cars {
            prop_assert!(counts.contains_key(CarType::classify(car).label()));
        }
    }

    #[test]
    fn test_bus_indexes_are_exact(buses in proptest::collection::vec(0.0f64..1000.0, 1..50)) {
        let df = df! { "bus" => buses.clone() }.unwrap();
        let selected = get_bus_indexes(&df).unwrap();
        let cutoff = 2.0 * buses.iter().sum::<f64>() / buses.len() as f64;

        for (idx, bus) in buses.iter().enumerate() {
            prop_assert_eq!(selected.contains(&idx), *bus > cutoff);
        }
        prop_assert!(selected.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_multiplier_moves_values_monotonically(value in 0.5f64..1000.0) {
        let label = vec![Key::from(1)];
        let matrix = LabeledMatrix::from_rows(label.clone(), label, vec![vec![value]]).unwrap();
        let out = multiply_matrix(&matrix).at(0, 0);

        if value > 20.0 {
            prop_assert!(out < value);
        } else {
            prop_assert!(out > value);
        }
    }
}
