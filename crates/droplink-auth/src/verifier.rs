//! JWT bearer-token validation.

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use droplink_core::config::AuthConfig;
use droplink_core::error::AppError;
use droplink_core::model::AuthenticatedUser;
use droplink_core::result::AppResult;
use droplink_core::traits::TokenVerifier;

/// Claims carried by identity-provider access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: Uuid,
    /// Expiry as a Unix timestamp.
    pub exp: i64,
}

/// Validates HS256 tokens signed with the identity provider's shared secret.
#[derive(Clone)]
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtVerifier {
    /// Creates a new verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::unauthorized(format!("Invalid token: {e}")))?;

        Ok(AuthenticatedUser {
            user_id: data.claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            leeway_seconds: 5,
        }
    }

    fn mint(secret: &str, sub: Uuid, exp: i64) -> String {
        encode(
            &Header::default(),
            &Claims { sub, exp },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn accepts_valid_token() {
        let verifier = JwtVerifier::new(&config());
        let user_id = Uuid::new_v4();
        let token = mint("test-secret", user_id, chrono::Utc::now().timestamp() + 600);

        let user = verifier.verify(&token).await.unwrap();
        assert_eq!(user.user_id, user_id);
    }

    #[tokio::test]
    async fn rejects_expired_token() {
        let verifier = JwtVerifier::new(&config());
        let token = mint(
            "test-secret",
            Uuid::new_v4(),
            chrono::Utc::now().timestamp() - 3600,
        );

        assert!(verifier.verify(&token).await.is_err());
    }

    #[tokio::test]
    async fn rejects_wrong_secret() {
        let verifier = JwtVerifier::new(&config());
        let token = mint(
            "other-secret",
            Uuid::new_v4(),
            chrono::Utc::now().timestamp() + 600,
        );

        assert!(verifier.verify(&token).await.is_err());
    }

    #[tokio::test]
    async fn rejects_garbage() {
        let verifier = JwtVerifier::new(&config());
        assert!(verifier.verify("not-a-jwt").await.is_err());
    }
}
