//! Capacity-feasibility check for overlapping bookings.
//!
//! Unrelated to the grid planner: given a fixed number of identical capacity
//! units (hotel rooms, desks, licences) and a list of date-ranged bookings,
//! decide whether the capacity is ever exceeded. Implemented as the usual
//! event sweep: every booking contributes an arrival and a departure event,
//! the events are sorted by date, and a running occupancy counter is checked
//! against the capacity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One reservation of a single capacity unit.
///
/// The interval is half-open: the unit is occupied from `check_in` inclusive
/// to `check_out` exclusive, so a departure and an arrival on the same date
/// never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// First occupied date.
    #[serde(rename = "check-in")]
    pub check_in: NaiveDate,
    /// First date the unit is free again.
    #[serde(rename = "check-out")]
    pub check_out: NaiveDate,
}

impl Booking {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }
}

/// Check whether `capacity` units can serve every booking at once.
///
/// Runs in O(n log n) over the number of bookings and returns `false` the
/// moment the running occupancy would exceed the capacity. An empty booking
/// list always fits. A booking whose check-out is not after its check-in
/// occupies nothing and is ignored.
pub fn fits_capacity(capacity: u32, bookings: &[Booking]) -> bool {
    let mut events: Vec<(NaiveDate, i8)> = Vec::with_capacity(bookings.len() * 2);
    for booking in bookings {
        if booking.check_out <= booking.check_in {
            continue;
        }
        events.push((booking.check_in, 1));
        events.push((booking.check_out, -1));
    }

    // Tuple order sorts departures (-1) before arrivals (+1) on equal dates,
    // which is exactly the half-open interval semantics.
    events.sort_unstable();

    let mut occupied: i64 = 0;
    for (_, change) in events {
        occupied += i64::from(change);
        if occupied > i64::from(capacity) {
            return false;
        }
    }
    true
}
