//! Form validation for the three views. All checks run before any backend
//! call; failures carry field-scoped, localized messages and are rendered
//! next to the offending input.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::i18n;
use crate::models::DateSlotDraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, lang: &str, key: &str) -> Self {
        Self {
            field,
            message: i18n::tr(Some(lang), key, None),
        }
    }
}

/// First message reported for a field, if any.
pub fn message_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|error| error.field == field)
        .map(|error| error.message.as_str())
}

/// Organizer name: non-empty, letters and spaces only, at least 3 chars.
pub fn validate_person_name(lang: &str, name: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push(FieldError::new("name", lang, "validation.name_required"));
    } else if !name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        errors.push(FieldError::new("name", lang, "validation.name_letters"));
    } else if name.chars().count() < 3 {
        errors.push(FieldError::new("name", lang, "validation.name_min"));
    }
    errors
}

/// Join form: the room identifier must be a UUID.
pub fn validate_join_room(lang: &str, room_id: &str) -> Vec<FieldError> {
    if Uuid::parse_str(room_id).is_err() {
        return vec![FieldError::new(
            "room_id",
            lang,
            "validation.room_id_invalid",
        )];
    }
    Vec::new()
}

pub struct NewRoomInput<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub end_date: Option<NaiveDate>,
    pub end_time: &'a str,
    pub dates: &'a [DateSlotDraft],
}

/// Room creation: name rules as above, title non-empty and at least 5 chars,
/// a voting deadline, and at least one unique date each carrying at least
/// one complete time range.
pub fn validate_new_room(lang: &str, input: &NewRoomInput<'_>) -> Vec<FieldError> {
    let mut errors = validate_person_name(lang, input.name);

    if input.title.is_empty() {
        errors.push(FieldError::new("title", lang, "validation.title_required"));
    } else if input.title.chars().count() < 5 {
        errors.push(FieldError::new("title", lang, "validation.title_min"));
    }

    if input.end_date.is_none() {
        errors.push(FieldError::new(
            "end_date",
            lang,
            "validation.end_date_required",
        ));
    }
    if input.end_time.is_empty() {
        errors.push(FieldError::new(
            "end_time",
            lang,
            "validation.end_time_required",
        ));
    }

    if input.dates.is_empty() {
        errors.push(FieldError::new("dates", lang, "validation.dates_min"));
    } else {
        for (index, draft) in input.dates.iter().enumerate() {
            if input.dates[..index].iter().any(|d| d.date == draft.date) {
                errors.push(FieldError::new("dates", lang, "validation.date_duplicate"));
                break;
            }
        }
        for draft in input.dates {
            if draft.times.is_empty() {
                errors.push(FieldError::new(
                    "dates",
                    lang,
                    "validation.date_times_min",
                ));
                break;
            }
            for range in &draft.times {
                if range.start.is_empty() {
                    errors.push(FieldError::new(
                        "dates",
                        lang,
                        "validation.time_start_required",
                    ));
                    return errors;
                }
                if range.duration.is_empty() {
                    errors.push(FieldError::new(
                        "dates",
                        lang,
                        "validation.time_duration_required",
                    ));
                    return errors;
                }
            }
        }
    }

    errors
}

/// Vote form: name at least 3 chars, optional email must look like one, and
/// at least one selected slot.
pub fn validate_vote(
    lang: &str,
    name: &str,
    email: Option<&str>,
    selected: &[String],
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if name.chars().count() < 3 {
        errors.push(FieldError::new("name", lang, "validation.name_min"));
    }

    if let Some(email) = email {
        if !email.is_empty() && !is_plausible_email(email) {
            errors.push(FieldError::new("email", lang, "validation.email_invalid"));
        }
    }

    if selected.is_empty() {
        errors.push(FieldError::new("slots", lang, "validation.slots_min"));
    }

    errors
}

/// Matches the original's loose shape check: something@something.something,
/// with no whitespace.
fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    matches!(domain.rsplit_once('.'), Some((host, tld)) if !host.is_empty() && !tld.is_empty())
}
