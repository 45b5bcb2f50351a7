use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::template::{ErrorTemplate, NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE, Template};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NotFound(path) => {
                tracing::debug!(path = %path, "No route matched");
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
            }
        };

        let path = match &self {
            AppError::NotFound(path) => path.as_str(),
            AppError::Internal(_) => "",
        };

        Template::new(path).render_with_status(status, ErrorTemplate { error_message })
    }
}

/// Converts a handler panic caught by `CatchPanicLayer` into the generic
/// error page.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(detail).into_response()
}
