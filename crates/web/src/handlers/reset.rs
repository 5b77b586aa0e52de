//! Handler for `POST /reset`.

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};

use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /reset
///
/// Ask every file service to reset, forwarding the caller's
/// `Authorization` header. Individual failures are logged by the fan-out
/// and never reach the caller: the response is always 204.
pub async fn reset(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    headers: HeaderMap,
) -> StatusCode {
    tracing::warn!(principal = %admin.name, "!!! Resetting entire system");

    let report = state.reset.reset_all(headers.get(AUTHORIZATION)).await;
    if report.failed() > 0 {
        tracing::warn!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            "Reset finished with failures"
        );
    }

    StatusCode::NO_CONTENT
}
