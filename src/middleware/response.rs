use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Success body keyed by resource name, e.g. `{ "restaurant": {...} }`
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub key: &'static str,
    pub data: T,
    pub status_code: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK
    pub fn ok(key: &'static str, data: T) -> Self {
        Self::with_status(key, data, StatusCode::OK)
    }

    /// 201 Created
    pub fn created(key: &'static str, data: T) -> Self {
        Self::with_status(key, data, StatusCode::CREATED)
    }

    pub fn with_status(key: &'static str, data: T, status_code: StatusCode) -> Self {
        Self { key, data, status_code }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let data_value = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                return ApiError::internal_server_error(e.to_string()).into_response();
            }
        };

        let mut envelope = Map::new();
        envelope.insert(self.key.to_string(), data_value);

        (self.status_code, Json(Value::Object(envelope))).into_response()
    }
}

/// 204 with an empty body
pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;
