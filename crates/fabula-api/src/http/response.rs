//! Success response format.
//!
//! Payload fields are flattened next to a `success` flag:
//! ```json
//! { "story": { ... }, "success": true }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Successful response wrapping a payload object.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Payload; must serialize as a JSON object.
    #[serde(flatten)]
    pub data: T,

    pub success: bool,

    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK.
    pub fn success(data: T) -> Self {
        Self {
            data,
            success: true,
            status: StatusCode::OK,
        }
    }

    /// 201 Created.
    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            ..Self::success(data)
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
