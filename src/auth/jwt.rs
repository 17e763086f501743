use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::{config::AuthConfig, state::AppState};

/// JWT payload. `exp` is an absolute unix timestamp; `role` is a snapshot
/// taken at issuance and is not re-checked against the user record until
/// the token expires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
}

/// Signing and verification material, derived once from the immutable
/// process configuration.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    access_ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let AuthConfig {
            secret_key,
            algorithm,
            access_token_expire_minutes,
        } = state.config.auth.clone();
        Self::new(&secret_key, algorithm, Duration::minutes(access_token_expire_minutes))
    }
}

impl JwtKeys {
    pub fn new(secret: &str, algorithm: Algorithm, access_ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            access_ttl,
        }
    }

    pub fn sign(&self, user_id: Uuid, role: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + self.access_ttl;
        let claims = Claims {
            sub: user_id,
            role: role.to_string(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding)?;
        debug!(user_id = %user_id, "jwt signed");
        Ok(token)
    }

    /// Decode and verify signature and expiry. Any failure comes back as an
    /// opaque error; callers collapse it into a generic credentials error.
    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.sub, "jwt verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys() -> JwtKeys {
        JwtKeys::new("dev-secret", Algorithm::HS256, Duration::minutes(5))
    }

    #[test]
    fn sign_and_verify_roundtrip() {
        let keys = make_keys();
        let user_id = Uuid::new_v4();
        let token = keys.sign(user_id, "patient").expect("sign");
        let claims = keys.verify(&token).expect("verify token");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.role, "patient");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_fails_verification() {
        let keys = JwtKeys::new("dev-secret", Algorithm::HS256, Duration::minutes(-1));
        let token = keys.sign(Uuid::new_v4(), "doctor").expect("sign");
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let keys = make_keys();
        let other = JwtKeys::new("another-secret", Algorithm::HS256, Duration::minutes(5));
        let token = keys.sign(Uuid::new_v4(), "patient").expect("sign");
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn tampered_token_fails_verification() {
        let keys = make_keys();
        let mut token = keys.sign(Uuid::new_v4(), "patient").expect("sign");
        token.push('x');
        assert!(keys.verify(&token).is_err());
    }

    #[tokio::test]
    async fn keys_derive_from_state_config() {
        let state = crate::state::AppState::fake();
        let keys = JwtKeys::from_ref(&state);
        let token = keys.sign(Uuid::new_v4(), "patient").expect("sign");
        assert!(keys.verify(&token).is_ok());
    }
}
