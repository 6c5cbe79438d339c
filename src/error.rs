// HTTP API Error Types
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::database::StoreError;
use crate::services::search::SearchError;

/// Every failure a handler can end in. This is the only place failure kinds
/// are turned into status codes and response bodies.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    InvalidIdentifier(String),

    // 401 Unauthorized (detail is logged, never sent)
    Unauthorized(String),

    // 403 Forbidden
    Forbidden,

    // 404 Not Found
    NotFound(String),

    // 422 Unprocessable Entity
    Validation(String),

    // 500 Internal Server Error (detail is logged, never sent)
    InternalServerError(String),

    // 502 Bad Gateway (external search provider)
    BadGateway(String),

    // 503 Service Unavailable (health check only)
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> String {
        match self {
            ApiError::InvalidIdentifier(id) => format!("{} is not a valid identifier", id),
            ApiError::Unauthorized(_) => "unauthorized".to_string(),
            ApiError::Forbidden => "not authorized".to_string(),
            ApiError::NotFound(resource) => format!("{} not found", resource),
            ApiError::Validation(message) => message.clone(),
            ApiError::InternalServerError(_) => "internal server error".to_string(),
            ApiError::BadGateway(_) => "search provider request failed".to_string(),
            ApiError::ServiceUnavailable(_) => "service unavailable".to_string(),
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({ "message": self.message() })
    }
}

// Static constructor methods
impl ApiError {
    pub fn invalid_identifier(id: impl Into<String>) -> Self {
        ApiError::InvalidIdentifier(id.into())
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        ApiError::Unauthorized(detail.into())
    }

    pub fn forbidden() -> Self {
        ApiError::Forbidden
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        ApiError::NotFound(resource.into())
    }

    /// A required field was absent or empty.
    pub fn required(field: &str) -> Self {
        ApiError::Validation(format!("{} is required", field))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn internal_server_error(detail: impl Into<String>) -> Self {
        ApiError::InternalServerError(detail.into())
    }

    pub fn bad_gateway(detail: impl Into<String>) -> Self {
        ApiError::BadGateway(detail.into())
    }

    pub fn service_unavailable(detail: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(detail.into())
    }
}

// Convert other error types to ApiError
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => {
                tracing::debug!("Restaurant {} disappeared during request", id);
                ApiError::not_found("restaurant")
            }
            StoreError::Sqlx(sqlx_err) => {
                // Log the real error but return generic message
                tracing::error!("SQLx error: {}", sqlx_err);
                ApiError::internal_server_error(sqlx_err.to_string())
            }
            StoreError::Unavailable(msg) => {
                // Only the health check answers 503
                tracing::error!("Store unavailable: {}", msg);
                ApiError::internal_server_error(msg)
            }
            StoreError::MigrationError(msg) => {
                tracing::error!("Migration error: {}", msg);
                ApiError::internal_server_error(msg)
            }
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        tracing::error!("Search provider error: {}", err);
        ApiError::bad_gateway(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
