use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use brei_core::{CoreError, ValidationError};

/// Error body returned by the JSON API.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

/// A failed API call, rendered as status code plus [`ErrorResponse`].
#[derive(Debug)]
pub struct ApiError(pub CoreError);

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn not_found(name: &str) -> Self {
        Self(CoreError::NotFound(name.to_string()))
    }

    pub fn status(&self) -> StatusCode {
        match &self.0 {
            CoreError::Validation(ValidationError::DuplicateName(_)) => StatusCode::CONFLICT,
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        match &self.0 {
            CoreError::Validation(e) => ErrorResponse {
                error: e.kind(),
                message: e.user_message().to_string(),
            },
            CoreError::NotFound(name) => ErrorResponse {
                error: "NotFound",
                message: format!("Rezept \"{}\" nicht gefunden", name),
            },
            CoreError::Storage(e) => ErrorResponse {
                error: "SaveFailure",
                message: e.user_message().to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
