use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::repo::User;

/// Request body for user signup.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub password: String,
}

/// Request body for login. `username` carries the email, matching the
/// OAuth2 password-grant field name the frontend already uses.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer",
        }
    }
}

/// Public part of the user returned to clients. Never carries the
/// password hash.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            full_name: u.full_name,
            role: u.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_serializes_bearer_marker() {
        let json = serde_json::to_string(&TokenResponse::bearer("abc".into())).unwrap();
        assert!(json.contains(r#""access_token":"abc""#));
        assert!(json.contains(r#""token_type":"bearer""#));
    }

    #[test]
    fn login_request_uses_username_field() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"username":"a@x.com","password":"pw123"}"#).unwrap();
        assert_eq!(req.username, "a@x.com");
        assert_eq!(req.password, "pw123");
    }

    #[test]
    fn public_user_has_no_password_hash() {
        let user = PublicUser {
            id: Uuid::new_v4(),
            email: "test@example.com".into(),
            full_name: "Test User".into(),
            role: "patient".into(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("test@example.com"));
        assert!(!json.contains("password"));
    }
}
