use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use galleria_backend::BackendError;
use galleria_core::error::CoreError;

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`BackendError`] and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to render the generic HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `galleria_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failed call to a backend service.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A caller-supplied link that is not an absolute `http`/`https` URL.
    #[error("Invalid link '{link}': {reason}")]
    InvalidLink { link: String, reason: String },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status, stable error code and caller-facing message.
    pub fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            },
            // Includes links the backend itself handed out: a broken href in
            // a backend document is the backend's fault, not the caller's.
            AppError::Backend(_) => (
                StatusCode::BAD_GATEWAY,
                "BACKEND_ERROR",
                "The gallery service could not complete the request".to_string(),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InvalidLink { link, reason } => (
                StatusCode::BAD_REQUEST,
                "INVALID_LINK",
                format!("'{link}' is not a usable link: {reason}"),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        if let AppError::Backend(err) = &self {
            tracing::error!(error = %err, "Backend call failed");
        }

        let page = views::error::error_page(status, code, &message);
        (status, Html(page.into_string())).into_response()
    }
}
