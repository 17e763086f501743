use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, PublicUser, SignupRequest, TokenResponse},
        extractors::CurrentUser,
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::User,
    },
    error::AppError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<PublicUser>, AppError> {
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AppError::Validation("Invalid email".into()));
    }

    // Fast-path check only; the UNIQUE constraint on users.email is the
    // authoritative duplicate signal under concurrent signups.
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(AppError::DuplicateEmail);
    }

    let hash = hash_password(&payload.password)?;

    let user = match User::create(
        &state.db,
        &payload.email,
        &payload.full_name,
        &payload.role,
        &hash,
    )
    .await
    {
        Ok(u) => u,
        Err(e) if e.as_database_error().is_some_and(|d| d.is_unique_violation()) => {
            warn!(email = %payload.email, "email already registered (lost insert race)");
            return Err(AppError::DuplicateEmail);
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = %user.id, "user signed up");
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    // Unknown email and wrong password must be indistinguishable.
    let user = User::find_by_email(&state.db, &payload.username)
        .await?
        .ok_or_else(|| {
            warn!("login unknown email");
            AppError::InvalidCredentials
        })?;

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, &user.role)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(TokenResponse::bearer(token)))
}

#[instrument(skip_all)]
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<PublicUser> {
    Json(user.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("dr.house@clinic.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("@x.com"));
    }
}
