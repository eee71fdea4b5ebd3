//! Typed error handling for the graph read API
//!
//! Only two failures are expected during normal request handling: an unknown
//! graph name and an element lookup miss. Both map to 404. Everything else is
//! either absorbed by the resources (malformed pagination, empty windows) or a
//! server-side fault.
//!
//! # Error Categories
//!
//! - [`GraphError`]: graph resolution
//! - [`ElementError`]: single element lookup
//! - [`StorageError`]: backend and serialization failures
//! - [`ConfigError`]: configuration loading and validation
//!
//! # Example
//!
//! ```rust,ignore
//! match resource.get_by_id("tinkergraph", "7") {
//!     Ok(envelope) => println!("{}", envelope.results),
//!     Err(ApiError::Element(ElementError::NotFound { id, .. })) => {
//!         println!("no element {}", id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use crate::core::element::ElementKind;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type of the API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Element(#[from] ElementError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Should not happen in normal operation
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Graph(e) => e.status_code(),
            ApiError::Element(e) => e.status_code(),
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Graph(e) => e.error_code(),
            ApiError::Element(e) => e.error_code(),
            ApiError::Storage(e) => e.error_code(),
            ApiError::Config(_) => "CONFIG_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this is a client-facing not-found outcome
    pub fn is_not_found(&self) -> bool {
        self.status_code() == StatusCode::NOT_FOUND
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::Graph(GraphError::NotFound { name }) => {
                Some(serde_json::json!({ "graph": name }))
            }
            ApiError::Element(ElementError::NotFound { kind, id }) => {
                Some(serde_json::json!({
                    "kind": kind.as_str(),
                    "id": id
                }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Graph Errors
// =============================================================================

/// Errors related to graph resolution
#[derive(Debug, Error)]
pub enum GraphError {
    /// No graph is registered under this name
    #[error("Graph '{name}' not found")]
    NotFound { name: String },
}

impl GraphError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GraphError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            GraphError::NotFound { .. } => "GRAPH_NOT_FOUND",
        }
    }
}

// =============================================================================
// Element Errors
// =============================================================================

/// Errors related to single element lookup
#[derive(Debug, Error)]
pub enum ElementError {
    /// No element of this kind has the requested id
    #[error("{kind} with id '{id}' not found")]
    NotFound { kind: ElementKind, id: String },
}

impl ElementError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ElementError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ElementError::NotFound { .. } => "ELEMENT_NOT_FOUND",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by the graph backend or while serializing its elements
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Graph '{graph}' backend error: {message}")]
    Backend { graph: String, message: String },

    #[error("Failed to serialize {kind} '{id}': {message}")]
    Serialization {
        kind: ElementKind,
        id: String,
        message: String,
    },
}

impl StorageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Backend { .. } => "STORAGE_ERROR",
            StorageError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_yaml::Error> for ApiError {
    fn from(err: serde_yaml::Error) -> Self {
        ApiError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// A specialized Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
