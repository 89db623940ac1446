use crate::models::RoomSnapshot;

/// Map selected display-time values (raw `start` strings) back to the
/// backend's slot identifiers.
///
/// Entries with no matching time are silently dropped, so the output may be
/// shorter than the input; relative order is preserved. Callers must not
/// assume equal lengths.
pub fn resolve_slot_ids(selected: &[String], room: &RoomSnapshot) -> Vec<String> {
    selected
        .iter()
        .filter_map(|value| {
            room.times
                .iter()
                .find(|time| time.start == *value)
                .map(|time| time.time_id.clone())
        })
        .collect()
}
