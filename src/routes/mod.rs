pub mod health;
pub mod home;
pub mod rooms;
pub mod votes;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use crate::include_page;

/// Router fallback: any unmatched path renders the not-found view.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(include_page!("not_found.html").to_string()),
    )
}
