//! Error types for the checkout domain, its configuration and the HTTP
//! adapter.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Caller-input errors raised by the pricing engine and the checkout state.
///
/// Unknown item ids and unknown discount codes are deliberately absent: both
/// are treated as no-ops rather than failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("unknown shipping method: {0}")]
    UnknownShippingMethod(String),

    #[error("unknown saved address: {0}")]
    UnknownAddress(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog {path}: {source}")]
    CatalogIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    CatalogParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Errors surfaced by the HTTP adapter.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("checkout session not found: {0}")]
    SessionNotFound(String),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Checkout(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::SessionNotFound(_) => "session_not_found",
            ApiError::Checkout(CheckoutError::UnknownShippingMethod(_)) => "unknown_shipping_method",
            ApiError::Checkout(CheckoutError::UnknownAddress(_)) => "unknown_address",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        });
        (self.status(), Json(body)).into_response()
    }
}
