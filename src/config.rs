use anyhow::Context;
use jsonwebtoken::Algorithm;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub secret_key: String,
    pub algorithm: Algorithm,
    pub access_token_expire_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Loads configuration from the environment once, at startup.
    /// A missing SECRET_KEY is fatal: the process refuses to start rather
    /// than mint tokens with an empty or default secret.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let algorithm = std::env::var("ALGORITHM")
            .unwrap_or_else(|_| "HS256".into())
            .parse::<Algorithm>()
            .ok()
            .context("ALGORITHM is not a supported JWT algorithm")?;
        // Keys are derived from a shared secret, so only the HMAC family works.
        anyhow::ensure!(
            matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512),
            "ALGORITHM must be HS256, HS384 or HS512"
        );
        let auth = AuthConfig {
            secret_key: std::env::var("SECRET_KEY").context("SECRET_KEY must be set")?,
            algorithm,
            access_token_expire_minutes: std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
        };
        Ok(Self { database_url, auth })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hs256_parses() {
        let alg = "HS256".parse::<Algorithm>().expect("HS256 should parse");
        assert_eq!(alg, Algorithm::HS256);
    }

    #[test]
    fn unknown_algorithm_does_not_parse() {
        assert!("HS9000".parse::<Algorithm>().is_err());
    }
}
