use std::cmp::Reverse;

use crate::models::TimeSlot;
use crate::slots::wall_clock;

pub const PODIUM_SIZE: usize = 5;

/// Visual arrangement of the top five: index is the on-screen position
/// (left to right), value is the position in the descending-votes order.
/// Center shows the highest tier, flanks alternate outward.
pub const PODIUM_ORDER: [usize; PODIUM_SIZE] = [3, 1, 0, 2, 4];

/// Style tier per on-screen position (matching PODIUM_ORDER).
pub const PODIUM_STYLES: [&str; PODIUM_SIZE] = [
    "tier-green",
    "tier-silver",
    "tier-gold",
    "tier-bronze",
    "tier-blue",
];

#[derive(Debug, Clone, PartialEq)]
pub struct PodiumEntry {
    /// Dense competition rank, 0-based: tied vote counts share a rank, the
    /// next distinct count increments it by one.
    pub rank: usize,
    pub slot: TimeSlot,
    pub style: &'static str,
}

/// Voted slots sorted by vote count descending (stable, so ties keep the
/// adapter's snapshot order), truncated to the podium size, each paired with
/// its dense rank.
pub fn rank_slots(slots: &[TimeSlot]) -> Vec<(usize, &TimeSlot)> {
    let mut voted: Vec<&TimeSlot> = slots.iter().filter(|slot| !slot.votes.is_empty()).collect();
    voted.sort_by_key(|slot| Reverse(slot.votes.len()));
    voted.truncate(PODIUM_SIZE);

    let mut ranked = Vec::with_capacity(voted.len());
    let mut rank = 0usize;
    let mut previous_count: Option<usize> = None;
    for slot in voted {
        let count = slot.votes.len();
        if previous_count.is_some_and(|prev| count != prev) {
            rank += 1;
        }
        previous_count = Some(count);
        ranked.push((rank, slot));
    }
    ranked
}

/// The podium in visual order: one entry per on-screen position, `None`
/// where fewer than five slots qualify. An all-`None` podium (no votes yet)
/// is rendered as an empty-state message by the caller.
pub fn build_podium(slots: &[TimeSlot]) -> Vec<Option<PodiumEntry>> {
    let ranked = rank_slots(slots);

    PODIUM_ORDER
        .iter()
        .enumerate()
        .map(|(position, &sorted_index)| {
            ranked.get(sorted_index).map(|(rank, slot)| PodiumEntry {
                rank: *rank,
                slot: (*slot).clone(),
                style: PODIUM_STYLES[position.min(PODIUM_STYLES.len() - 1)],
            })
        })
        .collect()
}

/// "dd/MM" of a slot's display wall-clock, or "N/A".
pub fn display_date(date_time: &str) -> String {
    wall_clock(date_time)
        .map(|dt| dt.format("%d/%m").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// "HH:MM" of a slot's display wall-clock, or "N/A".
pub fn display_time(date_time: &str) -> String {
    wall_clock(date_time)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
