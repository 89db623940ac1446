use chrono::{Datelike, NaiveDate, Timelike};

use crate::models::TimeSlot;
use crate::slots::wall_clock;

/// pt-BR weekday names, indexed by `Weekday::num_days_from_sunday`.
pub const WEEKDAY_NAMES_PT: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];

/// One column of the day×hour grid: a calendar date and, for each hour
/// 00..=23, the index into the slot list of the slot starting in that hour
/// on that date (if any).
#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub cells: Vec<Option<usize>>,
}

pub const HOURS_PER_DAY: usize = 24;

/// Group slots by weekday name (first-seen order), each group sorted
/// ascending by instant. Slots whose `date_time` does not parse are skipped.
pub fn group_by_weekday(slots: &[TimeSlot]) -> Vec<(&'static str, Vec<&TimeSlot>)> {
    let mut groups: Vec<(&'static str, Vec<&TimeSlot>)> = Vec::new();

    for slot in slots {
        let Some(clock) = wall_clock(&slot.date_time) else {
            continue;
        };
        let name = WEEKDAY_NAMES_PT[clock.weekday().num_days_from_sunday() as usize];
        match groups.iter_mut().find(|(day, _)| *day == name) {
            Some((_, group)) => group.push(slot),
            None => groups.push((name, vec![slot])),
        }
    }

    for (_, group) in &mut groups {
        group.sort_by_key(|slot| wall_clock(&slot.date_time));
    }

    groups
}

/// Build the day×hour grid: one column per calendar date present in the
/// slot list (ascending), 24 hour rows each, cells holding the first slot
/// whose display date and hour match. Minutes are ignored for placement, so
/// a 09:30 slot sits in the 09:00 row. An empty slot list yields no columns.
pub fn day_grid(slots: &[TimeSlot]) -> Vec<DayColumn> {
    let mut dates: Vec<NaiveDate> = Vec::new();
    for slot in slots {
        if let Some(clock) = wall_clock(&slot.date_time) {
            if !dates.contains(&clock.date()) {
                dates.push(clock.date());
            }
        }
    }
    dates.sort();

    dates
        .into_iter()
        .map(|date| {
            let cells = (0..HOURS_PER_DAY)
                .map(|hour| {
                    slots.iter().position(|slot| {
                        wall_clock(&slot.date_time).is_some_and(|clock| {
                            clock.date() == date && clock.hour() as usize == hour
                        })
                    })
                })
                .collect();
            DayColumn { date, cells }
        })
        .collect()
}
