use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::models::{RoomSnapshot, TimeSlot, Vote};

/// Display offset for America/Sao_Paulo. The zone has not observed DST since
/// 2019, so a fixed UTC-03:00 is exact for the dates this tool schedules.
pub fn display_offset() -> FixedOffset {
    FixedOffset::west_opt(3 * 3600).expect("UTC-03:00 is a valid offset")
}

/// Flatten a room snapshot into UI-facing time slots, in snapshot order.
///
/// `date_time` is the start instant projected into the display offset and
/// serialized back to ISO-8601, so its wall-clock fields are what the user
/// sees. The `duration` label, in contrast, slices the raw "HH:MM" digits
/// out of the stored `start`/`end` strings — it reflects the stored UTC
/// wall-clock, not the projected one.
///
/// Every backend vote record on a time becomes one vote entry carrying just
/// the voter's name and that time's identifier; a time with no votes adapts
/// to an empty vote list.
pub fn adapt_time_slots(room: &RoomSnapshot) -> Vec<TimeSlot> {
    room.times
        .iter()
        .map(|time| {
            let date_time = match DateTime::parse_from_rfc3339(&time.start) {
                Ok(instant) => instant
                    .with_timezone(&display_offset())
                    .to_rfc3339_opts(SecondsFormat::Millis, false),
                // Keep unparsable starts visible rather than dropping the slot
                Err(_) => time.start.clone(),
            };

            TimeSlot {
                date_time,
                duration: duration_label(&time.start, &time.end),
                votes: time
                    .votes
                    .iter()
                    .map(|vote| Vote {
                        name: vote.user_name.clone(),
                        email: None,
                        time_slots: vec![time.time_id.clone()],
                    })
                    .collect(),
            }
        })
        .collect()
}

/// "HH:MM - HH:MM" from the raw ISO strings (positions 11..16).
fn duration_label(start: &str, end: &str) -> String {
    format!(
        "{} - {}",
        start.get(11..16).unwrap_or_default(),
        end.get(11..16).unwrap_or_default()
    )
}
