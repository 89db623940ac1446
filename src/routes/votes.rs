use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::post,
    Router,
};
use axum_extra::extract::cookie::CookieJar;
// Plain `axum::Form` cannot collect repeated fields into a Vec; the extra
// variant can, which the multi-checkbox slot selection needs.
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::i18n;
use crate::models::VoteRequest;
use crate::render;
use crate::routes::rooms::{fetch_room, room_page};
use crate::slots::resolve;
use crate::validation;
use crate::AppState;

/// Router for vote submission.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/rooms/:room_id/votes", post(submit_vote))
}

#[derive(Debug, Deserialize)]
pub struct VoteForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Raw `start` values of the checked grid slots.
    #[serde(default)]
    pub slots: Vec<String>,
}

/// Validate the vote form against the freshly fetched snapshot, guard
/// against a duplicate voter name, resolve the selection to backend slot
/// identifiers, and submit. Validation failures re-render the room with
/// field messages; the duplicate guard and backend failures redirect back
/// with a notification. The vote call is only issued once every local check
/// has passed.
async fn submit_vote(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(room_id): Path<String>,
    Form(form): Form<VoteForm>,
) -> Response {
    let lang = &state.config.display.lang;

    let room = match fetch_room(&state, &room_id).await {
        Ok(room) => room,
        Err(response) => return response,
    };

    let errors = validation::validate_vote(lang, &form.name, Some(&form.email), &form.slots);
    if !errors.is_empty() {
        return room_page(lang, &room, &None, &errors).into_response();
    }

    let already_voted = room
        .times
        .iter()
        .any(|time| time.votes.iter().any(|vote| vote.user_name == form.name));
    if already_voted {
        tracing::debug!("Duplicate vote attempt by {} in room {}", form.name, room_id);
        let jar = render::set_flash(
            jar,
            "error",
            &i18n::tr(Some(lang), "notify.already_voted", None),
        );
        return (jar, Redirect::to(&format!("/rooms/{}", room_id))).into_response();
    }

    let request = VoteRequest {
        user_name: form.name,
        email: (!form.email.is_empty()).then(|| form.email.clone()),
        times: resolve::resolve_slot_ids(&form.slots, &room),
    };

    let (kind, message_key) = match state.votes.submit_vote(&request).await {
        Ok(()) => ("success", "notify.vote_success"),
        Err(e) => {
            tracing::error!("Vote submission failed in room {}: {}", room_id, e);
            ("error", "notify.vote_error")
        }
    };

    let jar = render::set_flash(jar, kind, &i18n::tr(Some(lang), message_key, None));
    (jar, Redirect::to(&format!("/rooms/{}", room_id))).into_response()
}
