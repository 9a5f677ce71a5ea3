use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Failures a request handler cannot recover from locally.
///
/// Form validation problems never end up here; they are shown to the
/// visitor as a notification instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("template render failed: {0}")]
    Template(#[from] askama::Error),
    #[error("failed to encode session data: {0}")]
    Session(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<!DOCTYPE html><html><body><p>Internal Server Error</p></body></html>"),
        )
            .into_response()
    }
}
