//! User and authentication models
//!
//! This module contains the database model for user accounts together
//! with the JWT claims structure and the per-request identity attached
//! by the GraphQL handler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User account from the users table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,

    /// Unique username, immutable after signup
    pub username: String,

    /// Argon2 hashed password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Optional avatar reference
    pub avatar: Option<String>,

    /// Account creation timestamp, assigned by the database
    pub created_at: DateTime<Utc>,
}

/// JWT claims payload for access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: Uuid,

    /// Username at issuance time
    pub username: String,

    /// Issued at timestamp (Unix epoch)
    pub iat: i64,

    /// Expiration timestamp (Unix epoch)
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl Claims {
    /// Create new claims for a user with the given TTL
    pub fn new(user: &User, ttl_secs: i64, issuer: &str, audience: &str) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user.id,
            username: user.username.clone(),
            iat: now,
            exp: now + ttl_secs,
            iss: issuer.to_string(),
            aud: audience.to_string(),
        }
    }

    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Authenticated identity attached to a request context
///
/// Populated by the GraphQL handler after token verification. Resolvers
/// read it with `ctx.data_opt::<Identity>()`; its absence means the
/// request is anonymous, which is an error only for protected mutations.
#[derive(Debug, Clone)]
pub struct Identity {
    /// The authenticated user's id
    pub user_id: Uuid,

    /// Username carried in the verified token
    pub username: String,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            password_hash: "hash".to_string(),
            avatar: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_claims_bind_user_id_and_username() {
        let user = sample_user();
        let claims = Claims::new(&user, 3600, "forum", "forum");
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_claims_is_expired() {
        let user = sample_user();
        let mut claims = Claims::new(&user, 3600, "forum", "forum");
        assert!(!claims.is_expired());

        claims.exp = Utc::now().timestamp() - 1;
        assert!(claims.is_expired());
    }

    #[test]
    fn test_identity_from_claims() {
        let user = sample_user();
        let claims = Claims::new(&user, 3600, "forum", "forum");
        let identity = Identity::from(claims);
        assert_eq!(identity.user_id, user.id);
        assert_eq!(identity.username, "alice");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("username").is_some());
    }
}
