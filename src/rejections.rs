use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};

use crate::views;

#[derive(Debug)]
pub enum AppError {
    Internal(&'static str),
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Page not found"),
        };

        (code, error_page(code, message)).into_response()
    }
}

pub trait ResultExt<T> {
    /// Logs the error and turns it into an internal server error.
    fn reject(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Internal(message)
        })
    }
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

fn error_page(code: StatusCode, message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (code.as_u16()) }
            p { (message) }
            a href="/" { "Back to start" }
        },
    )
}
