use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::i18n;
use crate::render;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend returned status {status}")]
    Backend { status: u16 },

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Request(e) => {
                tracing::error!("Backend request error: {:?}", e);
                (StatusCode::BAD_GATEWAY, i18n::t("error.backend"))
            }
            AppError::Backend { status } if *status == 404 => {
                (StatusCode::NOT_FOUND, i18n::t("error.room_not_found"))
            }
            AppError::Backend { status } => {
                tracing::error!("Backend returned status {}", status);
                (StatusCode::BAD_GATEWAY, i18n::t("error.backend"))
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, i18n::t("error.internal"))
            }
        };

        (status, render::error_page(status, &message)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
