use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// Body could not be read; keeps the status the body layer reported.
    #[error("Request body error {1}")]
    RequestBodyError(StatusCode, String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            ServerError::Configuration(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Configuration error: {err}"),
            ),
            ServerError::RequestBodyError(status, err) => {
                (status, format!("Request body error: {err}"))
            }
        };
        (status, Json(error_message)).into_response()
    }
}

impl From<BytesRejection> for ServerError {
    fn from(rejection: BytesRejection) -> Self {
        ServerError::RequestBodyError(rejection.status(), rejection.body_text())
    }
}
