use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use super::{jwt::JwtKeys, repo::User};
use crate::{error::AppError, state::AppState};

/// Extracts the bearer token, verifies it, and resolves the subject to a
/// persisted user. Used by every authenticated handler; read-only.
///
/// Missing header, wrong scheme, bad signature, expiry, and unknown subject
/// all reject with the same `InvalidCredentials` so a caller cannot probe
/// which check failed.
pub struct CurrentUser(pub User);

pub(crate) fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::InvalidCredentials)?;

        let token = bearer_token(header).ok_or(AppError::InvalidCredentials)?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|_| AppError::InvalidCredentials)?;

        let user = User::find_by_id(&state.db, claims.sub)
            .await
            .map_err(|_| AppError::InvalidCredentials)?
            .ok_or(AppError::InvalidCredentials)?;

        Ok(CurrentUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_strips_scheme() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("bearer abc"), Some("abc"));
    }

    #[test]
    fn bearer_token_rejects_other_schemes() {
        assert_eq!(bearer_token("Basic dXNlcjpwdw=="), None);
        assert_eq!(bearer_token("abc.def.ghi"), None);
    }
}
