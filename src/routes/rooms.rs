use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::{Datelike, DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::i18n;
use crate::models::{CreateRoomRequest, DateSlotDraft, RoomSnapshot, TimeSlot};
use crate::render::{self, escape_html, Flash};
use crate::slots::{adapt, grouping, payload, podium};
use crate::validation::{self, message_for, FieldError, NewRoomInput};
use crate::{include_page, AppState};

/// Router for the room-creation and voting-room views.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rooms/new", get(new_room))
        .route("/rooms", post(create_room))
        .route("/rooms/:room_id", get(room))
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct NewRoomQuery {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewRoomForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// "YYYY-MM-DD"
    #[serde(default)]
    pub end_date: String,
    /// "HH:MM"
    #[serde(default)]
    pub end_time: String,
    /// The date/time draft, JSON-encoded by the form script.
    #[serde(default)]
    pub slots: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Room-creation view, optionally pre-filled with the organizer's name.
async fn new_room(jar: CookieJar, Query(query): Query<NewRoomQuery>) -> impl IntoResponse {
    let (jar, flash) = render::take_flash(jar);
    let form = NewRoomForm {
        name: query.name.unwrap_or_default(),
        title: String::new(),
        description: String::new(),
        end_date: String::new(),
        end_time: String::new(),
        slots: String::new(),
    };
    (jar, new_room_page(&flash, &form, &[]))
}

/// Validate the creation form, convert the draft into backend payload, and
/// create the room. Validation failures re-render with field messages and
/// never reach the backend; a backend failure re-renders with a notification
/// and nothing partially applied.
async fn create_room(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<NewRoomForm>,
) -> AppResult<Response> {
    let lang = &state.config.display.lang;

    let end_date = NaiveDate::parse_from_str(&form.end_date, "%Y-%m-%d").ok();
    let drafts: Vec<DateSlotDraft> = if form.slots.trim().is_empty() {
        Vec::new()
    } else {
        match serde_json::from_str(&form.slots) {
            Ok(drafts) => drafts,
            Err(_) => {
                let errors = vec![FieldError {
                    field: "dates",
                    message: i18n::tr(Some(lang), "validation.dates_invalid", None),
                }];
                return Ok(new_room_page(&None, &form, &errors).into_response());
            }
        }
    };

    let errors = validation::validate_new_room(
        lang,
        &NewRoomInput {
            name: &form.name,
            title: &form.title,
            end_date,
            end_time: &form.end_time,
            dates: &drafts,
        },
    );
    if !errors.is_empty() {
        return Ok(new_room_page(&None, &form, &errors).into_response());
    }

    let times = match payload::convert_drafts(&drafts) {
        Ok(times) => times,
        Err(AppError::Validation(message)) => {
            let errors = vec![FieldError {
                field: "dates",
                message,
            }];
            return Ok(new_room_page(&None, &form, &errors).into_response());
        }
        Err(e) => return Err(e),
    };

    // The deadline is the same literal wall-clock-as-UTC concatenation the
    // payload converter applies to the candidate slots.
    let request = CreateRoomRequest {
        name: form.name.clone(),
        title: form.title.clone(),
        description: form.description.clone(),
        ending_at: format!("{}T{}:00.000Z", form.end_date, form.end_time),
        times,
    };

    match state.rooms.create_room(&request).await {
        Ok(room_id) => {
            let jar = render::set_flash(
                jar,
                "success",
                &i18n::tr(Some(lang), "notify.room_created", None),
            );
            Ok((jar, Redirect::to(&format!("/rooms/{}", room_id))).into_response())
        }
        Err(e) => {
            tracing::error!("Room creation failed: {}", e);
            let flash = Some(Flash {
                kind: "error".to_string(),
                message: i18n::tr(Some(lang), "notify.room_create_error", None),
            });
            Ok(new_room_page(&flash, &form, &[]).into_response())
        }
    }
}

/// Voting-room view: fetch the snapshot, adapt it, and render grid + podium.
async fn room(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(room_id): Path<String>,
) -> Response {
    let room = match fetch_room(&state, &room_id).await {
        Ok(room) => room,
        Err(response) => return response,
    };

    let (jar, flash) = render::take_flash(jar);
    (jar, room_page(&state.config.display.lang, &room, &flash, &[])).into_response()
}

/// Fetch a room, turning failures into ready-to-return error views: a 404
/// page for an unknown room, a load-error page for anything else.
pub(crate) async fn fetch_room(
    state: &AppState,
    room_id: &str,
) -> Result<RoomSnapshot, Response> {
    let lang = &state.config.display.lang;
    match state.rooms.get_room(room_id).await {
        Ok(room) => Ok(room),
        Err(AppError::Backend { status: 404 }) => Err((
            StatusCode::NOT_FOUND,
            render::error_page(
                StatusCode::NOT_FOUND,
                &i18n::tr(Some(lang), "error.room_not_found", None),
            ),
        )
            .into_response()),
        Err(e) => {
            tracing::error!("Failed to load room {}: {}", room_id, e);
            Err((
                StatusCode::BAD_GATEWAY,
                render::error_page(
                    StatusCode::BAD_GATEWAY,
                    &i18n::tr(Some(lang), "notify.room_load_error", None),
                ),
            )
                .into_response())
        }
    }
}

// ============================================================================
// Page assembly
// ============================================================================

fn new_room_page(flash: &Option<Flash>, form: &NewRoomForm, errors: &[FieldError]) -> Html<String> {
    render::page(
        include_page!("new_room.html"),
        &[
            ("flash", &render::flash_html(flash)),
            ("name", &escape_html(&form.name)),
            (
                "name_error",
                &render::field_error_html(message_for(errors, "name")),
            ),
            ("title", &escape_html(&form.title)),
            (
                "title_error",
                &render::field_error_html(message_for(errors, "title")),
            ),
            ("description", &escape_html(&form.description)),
            ("end_date", &escape_html(&form.end_date)),
            (
                "end_date_error",
                &render::field_error_html(message_for(errors, "end_date")),
            ),
            ("end_time", &escape_html(&form.end_time)),
            (
                "end_time_error",
                &render::field_error_html(message_for(errors, "end_time")),
            ),
            ("slots", &escape_html(&form.slots)),
            (
                "dates_error",
                &render::field_error_html(message_for(errors, "dates")),
            ),
        ],
    )
}

/// The voting-room view, shared with the vote handler so validation failures
/// re-render the same page with field messages.
pub(crate) fn room_page(
    lang: &str,
    room: &RoomSnapshot,
    flash: &Option<Flash>,
    errors: &[FieldError],
) -> Html<String> {
    let slots = adapt::adapt_time_slots(room);

    render::page(
        include_page!("room.html"),
        &[
            ("flash", &render::flash_html(flash)),
            ("closed_notice", &closed_notice_html(lang, room)),
            (
                "title",
                &escape_html(room.title.as_deref().unwrap_or("Título")),
            ),
            (
                "description",
                &escape_html(room.description.as_deref().unwrap_or("Descrição")),
            ),
            ("created_at", &display_timestamp(&room.created_at, "%d/%m/%Y")),
            (
                "updated_at",
                &display_timestamp(&room.updated_at, "%d/%m/%Y às %H:%M"),
            ),
            ("room_id", &escape_html(&room.room_id)),
            ("grid", &grid_html(lang, &slots, room)),
            (
                "name_error",
                &render::field_error_html(message_for(errors, "name")),
            ),
            (
                "email_error",
                &render::field_error_html(message_for(errors, "email")),
            ),
            (
                "slots_error",
                &render::field_error_html(message_for(errors, "slots")),
            ),
            (
                "podium_title",
                &escape_html(&i18n::tr(Some(lang), "page.podium_title", None)),
            ),
            (
                "podium_subtitle",
                &escape_html(&i18n::tr(Some(lang), "page.podium_subtitle", None)),
            ),
            ("podium", &podium_html(lang, &slots)),
            ("weekdays", &weekday_html(lang, &slots)),
        ],
    )
}

// ============================================================================
// Fragments
// ============================================================================

fn closed_notice_html(lang: &str, room: &RoomSnapshot) -> String {
    let closed = DateTime::parse_from_rfc3339(&room.ending_at)
        .map(|end| end.with_timezone(&Utc) < Utc::now())
        .unwrap_or(false);
    if !closed {
        return String::new();
    }
    format!(
        r#"<div class="closed"><strong>{}</strong><br>{}</div>"#,
        escape_html(&i18n::tr(Some(lang), "page.voting_closed_title", None)),
        escape_html(&i18n::tr(Some(lang), "page.voting_closed_body", None)),
    )
}

/// The day×hour selection grid. Each filled cell is a checkbox whose value
/// is the backend's raw `start` string, which is what the resolver matches
/// on. The adapter preserves snapshot order, so slot index i corresponds to
/// `room.times[i]`.
fn grid_html(lang: &str, slots: &[TimeSlot], room: &RoomSnapshot) -> String {
    let grid = grouping::day_grid(slots);
    if grid.is_empty() {
        return String::new();
    }

    let mut html = String::from("<table class=\"grid\">\n<tr><th>Horários</th>");
    for column in &grid {
        let weekday =
            grouping::WEEKDAY_NAMES_PT[column.date.weekday().num_days_from_sunday() as usize];
        html.push_str(&format!(
            "<th>{}<br><small>{}</small></th>",
            weekday,
            column.date.format("%d/%m/%Y")
        ));
    }
    html.push_str("</tr>\n");

    for hour in 0..grouping::HOURS_PER_DAY {
        html.push_str(&format!("<tr><th>{:02}:00</th>", hour));
        for column in &grid {
            match column.cells[hour] {
                Some(index) => {
                    let slot = &slots[index];
                    let raw_start = &room.times[index].start;
                    let votes = if slot.votes.is_empty() {
                        String::new()
                    } else {
                        format!("<br><small>{}</small>", votes_label(lang, slot.votes.len()))
                    };
                    html.push_str(&format!(
                        concat!(
                            r#"<td class="slot"><label>"#,
                            r#"<input type="checkbox" name="slots" value="{}"> "#,
                            "{}<br><small>Duração {}</small>{}</label></td>"
                        ),
                        escape_html(raw_start),
                        podium::display_date(&slot.date_time),
                        escape_html(&slot.duration),
                        votes,
                    ));
                }
                None => html.push_str("<td></td>"),
            }
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>");
    html
}

/// The top-five podium in its fixed visual arrangement; positions with no
/// qualifying slot render nothing. With no voted slots at all, the
/// empty-state message replaces the row.
fn podium_html(lang: &str, slots: &[TimeSlot]) -> String {
    let entries = podium::build_podium(slots);
    if entries.iter().all(Option::is_none) {
        return format!(
            "<p>{} ⏰</p>",
            escape_html(&i18n::tr(Some(lang), "page.podium_empty", None))
        );
    }

    let mut html = String::from("<div class=\"podium\">");
    for entry in entries.iter().flatten() {
        let voters: Vec<&str> = entry.slot.votes.iter().map(|vote| vote.name.as_str()).collect();
        html.push_str(&format!(
            concat!(
                r#"<div class="{}" title="{}">"#,
                "<strong>{}º 🏅</strong><br>{}<br>{} - {}<br>{}</div>"
            ),
            entry.style,
            escape_html(&voters.join(", ")),
            entry.rank + 1,
            podium::display_date(&entry.slot.date_time),
            podium::display_time(&entry.slot.date_time),
            escape_html(&entry.slot.duration),
            votes_label(lang, entry.slot.votes.len()),
        ));
    }
    html.push_str("</div>");
    html
}

/// Compact list of slots grouped by weekday.
fn weekday_html(lang: &str, slots: &[TimeSlot]) -> String {
    let groups = grouping::group_by_weekday(slots);
    if groups.is_empty() {
        return String::new();
    }

    let mut html = format!(
        "<h2>{}</h2>\n<ul>",
        escape_html(&i18n::tr(Some(lang), "page.by_weekday", None))
    );
    for (day, group) in groups {
        let times: Vec<String> = group
            .iter()
            .map(|slot| {
                format!(
                    "{} {}",
                    podium::display_date(&slot.date_time),
                    podium::display_time(&slot.date_time)
                )
            })
            .collect();
        html.push_str(&format!(
            "<li><strong>{}</strong>: {}</li>",
            day,
            escape_html(&times.join(", "))
        ));
    }
    html.push_str("</ul>");
    html
}

fn votes_label(lang: &str, count: usize) -> String {
    escape_html(&i18n::tr(
        Some(lang),
        "page.votes_label",
        Some(&[("count", count.to_string().as_str())]),
    ))
}

fn display_timestamp(value: &str, format: &str) -> String {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| {
            instant
                .with_timezone(&adapt::display_offset())
                .format(format)
                .to_string()
        })
        .unwrap_or_else(|_| escape_html(value))
}
