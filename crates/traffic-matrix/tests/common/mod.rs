//! Fixture loading shared by the integration tests.

use std::path::PathBuf;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

pub fn load_fixture(name: &str) -> DataFrame {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name);
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path))
        .unwrap()
        .finish()
        .unwrap()
}
