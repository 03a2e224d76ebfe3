//! Error types for the Pustaka portal

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::{render, services::gateway::GatewayError};

/// Portal-level error.
///
/// Failures talking to the backend are not part of this type once a page is
/// being served: the gateway folds them into uniform outcomes. `Gateway` only
/// occurs while the gateway itself is being built.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Gateway setup failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Gateway(e) => {
                tracing::error!("Gateway error: {}", e);
                (StatusCode::BAD_GATEWAY, "Gagal koneksi ke server data.".to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Terjadi kesalahan pada server.".to_string(),
                )
            }
        };

        let body = render::page(
            "Kesalahan",
            render::Nav::None,
            &render::status::error_panel(&message),
        );

        (status, Html(body)).into_response()
    }
}

/// Result type alias for portal operations
pub type AppResult<T> = Result<T, AppError>;
