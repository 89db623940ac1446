//! MeetSync web client: server-rendered frontend for the group
//! meeting-scheduling and voting backend.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;
pub mod slots;
pub mod validation;

use config::Config;
use services::{rooms::RoomService, votes::VoteService};

pub struct AppState {
    pub config: Config,
    pub rooms: RoomService,
    pub votes: VoteService,
}

/// Build the application router: the three views plus their form actions,
/// a health endpoint, and a not-found fallback for everything else.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::home::router())
        .merge(routes::rooms::router())
        .merge(routes::votes::router())
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
