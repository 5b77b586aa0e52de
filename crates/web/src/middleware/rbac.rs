//! Role-based access control (RBAC) extractors.
//!
//! Extractors run before the handler body, so a rejected request never
//! reaches handler logic.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use galleria_core::error::CoreError;
use galleria_core::roles::ROLE_ADMIN;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise, or 401
/// when no valid token is presented.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> StatusCode {
///     // user is guaranteed to be an admin here
///     StatusCode::NO_CONTENT
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            tracing::warn!(principal = %user.name, role = %user.role, "Admin role required");
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
