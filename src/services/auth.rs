//! Credential subsystem
//!
//! This module provides password hashing and bearer token handling:
//! - Argon2id password hashing with per-call random salts
//! - JWT issuance bound to a user's id and username
//! - JWT verification returning the decoded claims
//!
//! It is a leaf component: it holds no database handle and no resolver
//! state. The GraphQL handler verifies tokens upstream of the resolvers
//! and degrades any verification failure to an anonymous request.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::error::{ApiError, ApiResult};
use crate::models::user::{Claims, User};

/// Authentication service configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Token TTL in seconds (default: 7 days)
    pub token_ttl_secs: i64,
    /// JWT issuer
    pub issuer: String,
    /// JWT audience
    pub audience: String,
}

impl AuthConfig {
    /// Create a new AuthConfig with the default TTL
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            token_ttl_secs: 7 * 24 * 3600,
            issuer: "forum".to_string(),
            audience: "forum".to_string(),
        }
    }

    /// Create a new AuthConfig with an explicit TTL
    pub fn with_ttl(jwt_secret: String, token_ttl_secs: i64) -> Self {
        Self {
            token_ttl_secs,
            ..Self::new(jwt_secret)
        }
    }
}

/// Credential service providing password hashing and token management
#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
    argon2: Argon2<'static>,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            argon2: Argon2::default(),
        }
    }

    /// Hash a password with Argon2id
    ///
    /// A fresh random salt is generated per call, so hashing the same
    /// plaintext twice yields different encoded outputs that both verify.
    pub fn hash_password(&self, password: &str) -> ApiResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ApiError::Internal(format!("Password hashing failed: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Verify a password against an Argon2id hash
    ///
    /// Returns `Ok(false)` on mismatch; errors only when the stored hash
    /// is not a valid PHC-encoded string.
    pub fn verify_password(&self, password: &str, hash: &str) -> ApiResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| ApiError::Internal(format!("Invalid password hash format: {}", e)))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Issue a signed bearer token for a user
    pub fn issue_token(&self, user: &User) -> ApiResult<String> {
        let claims = Claims::new(
            user,
            self.config.token_ttl_secs,
            &self.config.issuer,
            &self.config.audience,
        );

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify a bearer token and return its claims
    ///
    /// Checks signature, expiry, issuer and audience. Callers that allow
    /// anonymous access treat any error here as "no identity" rather than
    /// failing the request.
    pub fn verify_token(&self, token: &str) -> ApiResult<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| {
            tracing::debug!(error = %e, "Token verification failed");
            ApiError::InvalidToken(e.to_string())
        })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Utc;
    use uuid::Uuid;

    fn service() -> AuthService {
        AuthService::new(AuthConfig::new("test-secret".to_string()))
    }

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            password_hash: String::new(),
            avatar: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_hash_verify_round_trip() {
        let svc = service();
        let hash = svc.hash_password("hunter2").unwrap();
        assert!(svc.verify_password("hunter2", &hash).unwrap());
        assert!(!svc.verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn test_hashing_is_salted() {
        let svc = service();
        let first = svc.hash_password("same-password").unwrap();
        let second = svc.hash_password("same-password").unwrap();
        assert_ne!(first, second);
        assert!(svc.verify_password("same-password", &first).unwrap());
        assert!(svc.verify_password("same-password", &second).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let svc = service();
        let result = svc.verify_password("whatever", "not-a-phc-string");
        assert_matches!(result, Err(ApiError::Internal(_)));
    }

    #[test]
    fn test_token_round_trip() {
        let svc = service();
        let user = sample_user();
        let token = svc.issue_token(&user).unwrap();
        let claims = svc.verify_token(&token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let svc = AuthService::new(AuthConfig::with_ttl("test-secret".to_string(), -3600));
        let token = svc.issue_token(&sample_user()).unwrap();
        assert_matches!(svc.verify_token(&token), Err(ApiError::InvalidToken(_)));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issuer = AuthService::new(AuthConfig::new("secret-one".to_string()));
        let verifier = AuthService::new(AuthConfig::new("secret-two".to_string()));
        let token = issuer.issue_token(&sample_user()).unwrap();
        assert_matches!(
            verifier.verify_token(&token),
            Err(ApiError::InvalidToken(_))
        );
    }

    #[test]
    fn test_malformed_token_is_rejected_not_panicking() {
        let svc = service();
        assert_matches!(svc.verify_token("garbage"), Err(ApiError::InvalidToken(_)));
        assert_matches!(svc.verify_token(""), Err(ApiError::InvalidToken(_)));
    }
}
