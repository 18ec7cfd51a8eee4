//! Error taxonomy for the HTTP API.
//!
//! Every failure a handler can hit maps to a fixed, user-facing message and
//! status code. Internal failures (model inference, unexpected I/O) are
//! logged with their full chain but never echoed to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::models::ModelError;

#[derive(Debug, Error)]
pub enum ApiError {
    // Upload validation (disease endpoint, 400)
    #[error("No file uploaded")]
    MissingFile,
    #[error("No file selected")]
    EmptyFilename,
    #[error("Unsupported file type")]
    UnsupportedFileType,
    #[error("Invalid image file")]
    InvalidImage,
    #[error("Invalid upload")]
    MalformedUpload,

    // Weather advisor (400)
    #[error("Missing district or crop")]
    MissingAdvisorField,
    #[error("Weather data not available")]
    WeatherUnavailable,
    #[error("Invalid crop selected")]
    InvalidCrop,

    // Tabular prediction endpoints report failures as 500, matching the
    // contract their frontend consumes.
    #[error("Error: missing or invalid field '{0}'")]
    InvalidField(&'static str),
    #[error("Error: unknown district '{0}'")]
    UnknownDistrict(String),
    #[error("Error: unknown {kind} '{value}'")]
    UnknownCategory {
        kind: &'static str,
        value: String,
    },

    #[error("Internal server error")]
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFile
            | ApiError::EmptyFilename
            | ApiError::UnsupportedFileType
            | ApiError::InvalidImage
            | ApiError::MalformedUpload
            | ApiError::MissingAdvisorField
            | ApiError::WeatherUnavailable
            | ApiError::InvalidCrop => StatusCode::BAD_REQUEST,
            ApiError::InvalidField(_)
            | ApiError::UnknownDistrict(_)
            | ApiError::UnknownCategory { .. }
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        ApiError::Internal(err.into())
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        ApiError::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            error!("request failed: {err:#}");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
