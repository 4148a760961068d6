// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::completion::CompletionError;

/// The only failure the handler translates is an upstream completion
/// failure; everything else (malformed JSON, missing body) is left to
/// axum's default rejections.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("completion request failed: {0}")]
    Completion(#[from] CompletionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
