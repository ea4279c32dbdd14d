//! Integration tests for grid loading.

use std::path::PathBuf;

use vaultpath_lib::{Cell, Error, Grid, Position};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
}

#[test]
fn fixture_file_loads_with_expected_shape() {
    let grid = Grid::from_path(&fixture_path("corridor_vault.txt")).expect("fixture loads");
    assert_eq!(grid.width(), 24);
    assert_eq!(grid.height(), 5);
    assert_eq!(grid.cell(Position::new(1, 15)), Cell::Start);
    assert_eq!(grid.cell(Position::new(3, 1)), Cell::Key('d'));
}

#[test]
fn missing_fixture_surfaces_an_io_error() {
    let error = Grid::from_path(&fixture_path("does_not_exist.txt")).expect_err("missing file");
    assert!(matches!(error, Error::Io(_)));
}
