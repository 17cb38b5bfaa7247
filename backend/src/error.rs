//! HTTP-facing errors and their JSON rendering.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::extract::{OriginalUri, Request};
use axum::http::request::Parts;
use axum::http::{Extensions, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures_util::FutureExt;
use user_api_common::{ErrorResponse, FieldErrors};

/// Errors a handler can return.
///
/// Not-found carries no body; everything else renders an [`ErrorResponse`]
/// for the request path it was raised on.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("Validation failed for {path}: {} field(s)", .errors.len())]
    Validation { errors: FieldErrors, path: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String, path: String },

    #[error("Internal error: {message}")]
    Internal { message: String, path: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            ApiError::NotFound => return status.into_response(),
            ApiError::Validation { errors, path } => {
                ErrorResponse::new(status.as_u16(), "Validation Failed", "Invalid input data", path)
                    .with_validation_errors(errors)
            }
            ApiError::BadRequest { message, path } => {
                ErrorResponse::new(status.as_u16(), "Bad Request", message, path)
            }
            ApiError::Internal { message, path } => {
                tracing::error!(path = %path, "Internal error: {}", message);
                ErrorResponse::new(
                    status.as_u16(),
                    "Internal Server Error",
                    "An unexpected error occurred",
                    path,
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Full request path, including any context path the router was nested under.
pub fn request_path(parts: &Parts) -> String {
    original_path(&parts.extensions, &parts.uri)
}

fn original_path(extensions: &Extensions, uri: &Uri) -> String {
    extensions
        .get::<OriginalUri>()
        .map(|original| original.path().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

/// Middleware that turns a panicking handler into a 500 error body.
pub async fn catch_panic(request: Request, next: Next) -> Response {
    let path = original_path(request.extensions(), request.uri());

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(payload) => ApiError::Internal {
            message: panic_message(payload.as_ref()),
            path,
        }
        .into_response(),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("handler panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("handler panicked: {}", s)
    } else {
        "handler panicked".to_string()
    }
}
