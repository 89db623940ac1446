use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::render::{self, Flash};
use crate::validation::{self, message_for};
use crate::{include_page, AppState};

/// Router for the home view and its two entry forms.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/rooms/start", post(start_room))
        .route("/rooms/join", post(join_room))
}

#[derive(Debug, Deserialize)]
pub struct StartRoomForm {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct JoinRoomForm {
    #[serde(default)]
    pub room_id: String,
}

async fn home(jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = render::take_flash(jar);
    (jar, home_page(&flash, "", None, "", None))
}

/// Validate the organizer's name and hand over to the creation view.
async fn start_room(
    State(state): State<Arc<AppState>>,
    Form(form): Form<StartRoomForm>,
) -> Response {
    let errors = validation::validate_person_name(&state.config.display.lang, &form.name);
    if !errors.is_empty() {
        return home_page(&None, &form.name, message_for(&errors, "name"), "", None)
            .into_response();
    }

    Redirect::to(&format!(
        "/rooms/new?name={}",
        urlencoding::encode(&form.name)
    ))
    .into_response()
}

/// Validate the room identifier and jump into its voting view.
async fn join_room(State(state): State<Arc<AppState>>, Form(form): Form<JoinRoomForm>) -> Response {
    let errors = validation::validate_join_room(&state.config.display.lang, &form.room_id);
    if !errors.is_empty() {
        return home_page(
            &None,
            "",
            None,
            &form.room_id,
            message_for(&errors, "room_id"),
        )
        .into_response();
    }

    Redirect::to(&format!("/rooms/{}", form.room_id)).into_response()
}

fn home_page(
    flash: &Option<Flash>,
    create_name: &str,
    create_name_error: Option<&str>,
    join_room_id: &str,
    join_room_id_error: Option<&str>,
) -> Html<String> {
    render::page(
        include_page!("home.html"),
        &[
            ("flash", &render::flash_html(flash)),
            ("create_name", &render::escape_html(create_name)),
            (
                "create_name_error",
                &render::field_error_html(create_name_error),
            ),
            ("join_room_id", &render::escape_html(join_room_id)),
            (
                "join_room_id_error",
                &render::field_error_html(join_room_id_error),
            ),
        ],
    )
}
