use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};

use crate::api::response;

/// Message returned to callers for any upstream failure. The cause is only logged.
pub const UPSTREAM_FAILURE: &str = "An error occurred while fetching the prediction";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} parameter is required")]
    MissingParameter(&'static str),

    #[error("Failed to fetch prediction from backend: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text safe to hand back to a client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::MissingParameter(_) | AppError::Config(_) => self.to_string(),
            AppError::Upstream(_) => UPSTREAM_FAILURE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MissingParameter(name) => tracing::debug!("rejected request: missing {name}"),
            AppError::Upstream(cause) => tracing::error!("upstream failure: {cause}"),
            AppError::Config(msg) => tracing::error!("config error: {msg}"),
        }

        response::error(self.status(), self.public_message()).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_is_a_client_error() {
        let err = AppError::MissingParameter("URL");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "URL parameter is required");
    }

    #[test]
    fn upstream_failure_hides_the_cause() {
        let err = AppError::Upstream("connection refused".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), UPSTREAM_FAILURE);
        assert!(err.to_string().contains("connection refused"));
    }
}
