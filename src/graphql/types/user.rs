//! User and authentication GraphQL types

use async_graphql::{Object, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::User as DbUser;

/// User account information exposed via GraphQL
///
/// The stored password hash is deliberately not exposed as a field.
pub struct User {
    inner: DbUser,
}

impl User {
    /// Create a new GraphQL User from a database User
    pub fn new(user: DbUser) -> Self {
        Self { inner: user }
    }
}

impl From<DbUser> for User {
    fn from(user: DbUser) -> Self {
        Self::new(user)
    }
}

#[Object]
impl User {
    /// Unique user identifier
    async fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Unique username
    async fn username(&self) -> &str {
        &self.inner.username
    }

    /// Avatar reference, if set
    async fn avatar(&self) -> Option<&str> {
        self.inner.avatar.as_deref()
    }

    /// Account creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }
}

/// Authentication payload returned after signup or signin
#[derive(SimpleObject)]
pub struct AuthPayload {
    /// The authenticated user
    pub user: User,
    /// Signed bearer token proving the user's identity
    pub token: String,
}

impl AuthPayload {
    /// Create a new AuthPayload from a database user and a token
    pub fn new(user: DbUser, token: String) -> Self {
        Self {
            user: User::from(user),
            token,
        }
    }
}
