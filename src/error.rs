use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

use crate::models::SEARCH_EXAMPLE;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Missing query parameter 'q'")]
    MissingQuery,

    #[error("No video found for query: {query}")]
    NotFound { query: String },

    #[error("Search failed for query {query}: {message}")]
    Provider { query: String, message: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Failures raised by a search provider
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YouTube returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

impl AppError {
    /// Wraps a provider failure for the given query
    pub fn provider(query: impl Into<String>, err: ProviderError) -> Self {
        AppError::Provider {
            query: query.into(),
            message: err.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingQuery => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Provider { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// JSON body sent to the client
    pub fn body(&self) -> Value {
        match self {
            AppError::MissingQuery => json!({
                "error": self.to_string(),
                "example": SEARCH_EXAMPLE,
            }),
            AppError::NotFound { query } => json!({
                "error": "No video found",
                "query": query,
                "suggestion": "Try a different search term",
            }),
            AppError::Provider { query, message } => json!({
                "error": "Search failed",
                "message": message,
                "query": query,
            }),
            AppError::Internal(message) => internal_error_body(message),
        }
    }
}

/// Body of the generic 500 response
pub fn internal_error_body(message: &str) -> Value {
    json!({
        "error": "Internal server error",
        "message": message,
        "timestamp": Utc::now().to_rfc3339(),
    })
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MissingQuery => tracing::debug!("Rejected search without query"),
            AppError::NotFound { query } => {
                tracing::warn!(query = %query, "No video found")
            }
            AppError::Provider { query, message } => {
                tracing::error!(query = %query, error = %message, "YouTube search error")
            }
            AppError::Internal(message) => {
                tracing::error!(error = %message, "Unhandled service error")
            }
        }

        (self.status(), Json(self.body())).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub type ProviderResult<T> = Result<T, ProviderError>;
