//! GraphQL mutations for the forum API
//!
//! This module contains all mutation resolvers, organized by domain,
//! plus shared helpers for identity checks and error sanitization.

mod auth;
mod thread;

pub use auth::AuthMutation;
pub use thread::ThreadMutation;

use async_graphql::{Context, MergedObject};

use crate::error::ApiError;
use crate::models::Identity;

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(AuthMutation, ThreadMutation);

/// Require an authenticated identity in the request context
///
/// Checked before any persistence access. Absence fails with the
/// verbatim "Not Authenticated" message.
pub(crate) fn require_identity(ctx: &Context<'_>) -> async_graphql::Result<Identity> {
    ctx.data_opt::<Identity>()
        .cloned()
        .ok_or_else(|| async_graphql::Error::new("Not Authenticated"))
}

/// Sanitize errors before returning them to GraphQL callers
///
/// Maps expected domain errors to their user-facing messages while
/// logging internal errors (database failures, foreign-key violations)
/// server-side and returning a generic message.
pub(crate) fn sanitize_error(error: &ApiError) -> async_graphql::Error {
    match error {
        ApiError::Unauthorized => async_graphql::Error::new("Not Authenticated"),
        ApiError::Conflict { resource_type, .. } => {
            async_graphql::Error::new(format!("{} already exists", resource_type))
        }
        ApiError::NotFound { resource_type, .. } => {
            async_graphql::Error::new(format!("{} does not exist", resource_type))
        }
        ApiError::ValidationError(msg) => async_graphql::Error::new(msg.clone()),
        _ => {
            tracing::error!(error = %error, "Internal resolver error");
            async_graphql::Error::new("An unexpected error occurred")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_conflict_and_not_found_are_distinct() {
        let conflict = sanitize_error(&ApiError::conflict("user", "alice"));
        let missing = sanitize_error(&ApiError::not_found("user", "alice"));
        assert_eq!(conflict.message, "user already exists");
        assert_eq!(missing.message, "user does not exist");
    }

    #[test]
    fn test_sanitize_unauthorized_message() {
        let err = sanitize_error(&ApiError::Unauthorized);
        assert_eq!(err.message, "Not Authenticated");
    }

    #[test]
    fn test_sanitize_hides_internal_details() {
        let err = sanitize_error(&ApiError::Internal("pool exhausted".to_string()));
        assert_eq!(err.message, "An unexpected error occurred");
    }
}
