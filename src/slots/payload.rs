use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, Utc};

use crate::error::{AppError, AppResult};
use crate::i18n;
use crate::models::{DateSlotDraft, TimePayload};

/// Flatten the creation form's drafts into the backend's slot payload: one
/// entry per (date, time range) pair, in draft order.
///
/// The wall-clock start is concatenated literally onto the date as a UTC
/// instant — no timezone conversion happens here; the backend stores exactly
/// the digits the organizer picked. The end instant is start plus the parsed
/// duration, so a zero duration yields start == end.
pub fn convert_drafts(drafts: &[DateSlotDraft]) -> AppResult<Vec<TimePayload>> {
    let mut out = Vec::new();
    for draft in drafts {
        for range in &draft.times {
            out.push(convert_range(draft.date, &range.start, &range.duration)?);
        }
    }
    Ok(out)
}

fn convert_range(date: NaiveDate, start: &str, duration: &str) -> AppResult<TimePayload> {
    let start_instant = utc_instant(date, start)?;
    let minutes = duration_minutes(duration)?;
    let end_instant = start_instant + Duration::minutes(minutes);

    Ok(TimePayload {
        date: iso_utc(start_instant),
        start: iso_utc(start_instant),
        end: iso_utc(end_instant),
    })
}

/// Interpret "HH:MM" as a wall-clock value on `date`, already in UTC.
fn utc_instant(date: NaiveDate, time: &str) -> AppResult<DateTime<Utc>> {
    let (hours, minutes) = parse_hhmm(time)?;
    if hours >= 24 {
        return Err(AppError::Validation(i18n::t("validation.time_invalid")));
    }
    date.and_hms_opt(hours, minutes, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AppError::Validation(i18n::t("validation.time_invalid")))
}

/// Total minutes in a "HH:MM" duration. Hours are unbounded (a slot may run
/// past a day), minutes must stay under 60.
fn duration_minutes(duration: &str) -> AppResult<i64> {
    let (hours, minutes) = parse_hhmm(duration)?;
    Ok(i64::from(hours) * 60 + i64::from(minutes))
}

fn parse_hhmm(value: &str) -> AppResult<(u32, u32)> {
    let invalid = || AppError::Validation(i18n::t("validation.time_invalid"));

    let (h, m) = value.split_once(':').ok_or_else(invalid)?;
    let hours: u32 = h.parse().map_err(|_| invalid())?;
    let minutes: u32 = m.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }
    Ok((hours, minutes))
}

fn iso_utc(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
