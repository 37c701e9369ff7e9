//! Error types for Mushaf Web

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MushafError {
    #[error("Surah not found: {0}")]
    NotFound(u32),

    #[error("Dataset error: {0}")]
    Dataset(String),
}

impl IntoResponse for MushafError {
    fn into_response(self) -> Response {
        match self {
            MushafError::NotFound(id) => {
                tracing::debug!("Surah {} not found", id);
                (StatusCode::NOT_FOUND, "Not Found").into_response()
            }
            MushafError::Dataset(msg) => {
                tracing::error!("Dataset error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
