//! User queries for the forum GraphQL API
//!
//! This module provides queries for user data:
//! - me: Get the currently authenticated user

use async_graphql::{Context, Object, Result};

use crate::graphql::types::User;
use crate::models::Identity;
use crate::repositories::UserRepository;

/// User-related queries
#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// Get the currently authenticated user
    ///
    /// Returns the full user record when the request carries a valid
    /// identity, and null otherwise. Unauthenticated callers are allowed
    /// to ask; "no current user" is a normal result, not an error.
    async fn me(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let identity = match ctx.data_opt::<Identity>() {
            Some(identity) => identity,
            None => return Ok(None),
        };

        let repo = ctx.data::<UserRepository>()?;
        let user = repo.find_by_id(identity.user_id).await.map_err(|e| {
            tracing::error!(error = %e, user_id = %identity.user_id, "Failed to fetch current user");
            async_graphql::Error::new("An unexpected error occurred")
        })?;

        Ok(user.map(User::from))
    }
}
