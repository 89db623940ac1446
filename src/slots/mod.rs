//! Pure data-shaping over candidate time slots: payload conversion for room
//! creation, adapting backend snapshots for display, resolving selections
//! back to backend identifiers, ranking for the podium, and grouping for the
//! day grid.

pub mod adapt;
pub mod grouping;
pub mod payload;
pub mod podium;
pub mod resolve;

use chrono::{DateTime, NaiveDateTime};

/// Wall-clock fields of a slot's `date_time` as rendered to the user.
///
/// The adapter serializes instants with an explicit offset, so the local
/// (offset-naive) part is exactly the display wall-clock. Returns None for
/// strings that are not valid ISO-8601.
pub(crate) fn wall_clock(date_time: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(date_time)
        .ok()
        .map(|dt| dt.naive_local())
}
