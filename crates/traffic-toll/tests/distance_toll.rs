//! End-to-end checks of the distance and toll operations on a sample route.

mod common;

use common::load_fixture;
use polars::prelude::{DataFrame, NamedFrom, Series};
use traffic_toll::{
    Key, calculate_distance_matrix, calculate_time_based_toll_rates, calculate_toll_rate,
    find_ids_within_ten_percentage_threshold, unroll_distance_matrix,
};

fn key(id: i64) -> Key {
    Key::from(id)
}

#[test]
fn test_distance_matrix_accumulates_route() {
    let df = load_fixture("dataset-3.csv");
    let matrix = calculate_distance_matrix(&df).unwrap();

    assert_eq!(matrix.shape(), (6, 6));
    assert_eq!(matrix.get(&key(1001400), &key(1001402)), Some(9.7));
    assert_eq!(matrix.get(&key(1001400), &key(1001404)), Some(29.9));
    assert_eq!(matrix.get(&key(1001410), &key(1001400)), Some(78.7));
    assert_eq!(matrix.get(&key(1001404), &key(1001410)), Some(48.8));
    for i in 0..6 {
        assert_eq!(matrix.at(i, i), 0.0);
        for j in 0..6 {
            assert_eq!(matrix.at(i, j), matrix.at(j, i));
        }
    }
}

#[test]
fn test_unrolled_route_has_all_ordered_pairs() {
    let df = load_fixture("dataset-3.csv");
    let unrolled = unroll_distance_matrix(&calculate_distance_matrix(&df).unwrap()).unwrap();

    assert_eq!(unrolled.height(), 30);
    let starts = unrolled.column("id_start").unwrap().i64().unwrap();
    let ends = unrolled.column("id_end").unwrap().i64().unwrap();
    assert_eq!(starts.get(0), Some(1001400));
    assert_eq!(ends.get(0), Some(1001402));
    assert_eq!(starts.get(29), Some(1001410));
    assert_eq!(ends.get(29), Some(1001408));
}

#[test]
fn test_ids_near_reference_mean() {
    let df = load_fixture("dataset-3.csv");
    let unrolled = unroll_distance_matrix(&calculate_distance_matrix(&df).unwrap()).unwrap();

    // Reference mean is 46.36, so the band is [41.724, 50.996].
    let ids = find_ids_within_ten_percentage_threshold(&unrolled, &key(1001400)).unwrap();
    assert_eq!(
        ids,
        vec![key(1001400), key(1001404), key(1001406), key(1001410)]
    );
}

#[test]
fn test_toll_rates_on_unrolled_route() {
    let df = load_fixture("dataset-3.csv");
    let unrolled = unroll_distance_matrix(&calculate_distance_matrix(&df).unwrap()).unwrap();
    let tolls = calculate_toll_rate(&unrolled).unwrap();

    assert_eq!(tolls.height(), 30);
    assert!(tolls.column("distance").is_err());
    let moto = tolls.column("moto").unwrap().f64().unwrap();
    assert_eq!(moto.get(0), Some(9.7 * 0.8));
}

#[test]
fn test_time_based_tolls_follow_schedule() {
    let tolls = calculate_toll_rate(
        &DataFrame::new(vec![
            Series::new("id_start".into(), vec![1i64, 1, 1, 1]).into(),
            Series::new("id_end".into(), vec![2i64, 2, 2, 2]).into(),
            Series::new("distance".into(), vec![12.5, 12.5, 12.5, 12.5]).into(),
        ])
        .unwrap(),
    )
    .unwrap();
    let mut scheduled = tolls.clone();
    scheduled
        .with_column(Series::new(
            "start_day".into(),
            vec!["Monday", "Thursday", "Sunday", "Friday"],
        ))
        .unwrap();
    scheduled
        .with_column(Series::new(
            "start_time".into(),
            vec!["06:00:00", "14:30:00", "23:00:00", "23:59:59"],
        ))
        .unwrap();
    scheduled
        .with_column(Series::new(
            "end_time".into(),
            vec!["09:00:00", "16:00:00", "23:59:59", "23:59:59"],
        ))
        .unwrap();

    let out = calculate_time_based_toll_rates(&scheduled).unwrap();

    let moto = out.column("moto").unwrap().f64().unwrap();
    let base = 12.5 * 0.8;
    assert_eq!(moto.get(0), Some(base * 0.8));
    assert_eq!(moto.get(1), Some(base * 1.2));
    assert_eq!(moto.get(2), Some(base * 0.7));
    assert_eq!(moto.get(3), Some(base));
    assert_eq!(out.height(), tolls.height());
}
