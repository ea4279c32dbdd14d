//! Integration tests for the capacity-feasibility sweep.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use vaultpath_lib::{fits_capacity, Booking};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
}

fn load_bookings() -> Vec<Booking> {
    let text = fs::read_to_string(fixture_path("bookings.json")).expect("fixture loads");
    serde_json::from_str(&text).expect("bookings parse")
}

#[test]
fn fixture_bookings_fit_two_rooms_but_not_one() {
    let bookings = load_bookings();
    assert_eq!(bookings.len(), 3);
    assert!(fits_capacity(2, &bookings));
    assert!(!fits_capacity(1, &bookings));
}

#[test]
fn fixture_dates_parse_as_half_open_intervals() {
    let bookings = load_bookings();
    let june = |day| NaiveDate::from_ymd_opt(2024, 6, day).expect("valid date");

    assert_eq!(bookings[0], Booking::new(june(1), june(5)));
    // The third guest arrives the day the first one leaves; with the second
    // guest still present that is two rooms, never three.
    assert_eq!(bookings[2].check_in, bookings[0].check_out);
}
