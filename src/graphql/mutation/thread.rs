//! Thread, reply and like mutations for the forum GraphQL API
//!
//! All mutations here require an authenticated identity; the check runs
//! first, before any persistence access.

use async_graphql::{Context, Object, Result, ID};
use uuid::Uuid;

use crate::error::ApiError;
use crate::graphql::types::{Reply, Thread};
use crate::repositories::{LikeRepository, ReplyRepository, ThreadRepository};

use super::{require_identity, sanitize_error};

/// Thread and reply mutations
#[derive(Default)]
pub struct ThreadMutation;

/// Parse an opaque thread id, failing with a sanitized validation error
fn parse_thread_id(id: &ID) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| {
        sanitize_error(&ApiError::ValidationError(format!(
            "invalid thread id: {}",
            id.as_str()
        )))
    })
}

/// Parse an opaque reply id, failing with a sanitized validation error
fn parse_reply_id(id: &ID) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| {
        sanitize_error(&ApiError::ValidationError(format!(
            "invalid reply id: {}",
            id.as_str()
        )))
    })
}

#[Object]
impl ThreadMutation {
    /// Create a new thread attributed to the caller
    async fn create_thread(
        &self,
        ctx: &Context<'_>,
        title: String,
        text: Option<String>,
    ) -> Result<Thread> {
        let identity = require_identity(ctx)?;
        let repo = ctx.data::<ThreadRepository>()?;

        let thread = repo
            .create(&title, text.as_deref(), identity.user_id)
            .await
            .map_err(|e| sanitize_error(&ApiError::Database(e)))?;

        tracing::info!(thread_id = %thread.id, user_id = %identity.user_id, "Thread created");

        Ok(Thread::from(thread))
    }

    /// Reply to an existing thread
    ///
    /// Thread existence is not re-validated; a nonexistent thread id
    /// surfaces as a generic persistence error from the foreign key.
    async fn reply(&self, ctx: &Context<'_>, thread_id: ID, text: String) -> Result<Reply> {
        let identity = require_identity(ctx)?;
        let repo = ctx.data::<ReplyRepository>()?;
        let thread_uuid = parse_thread_id(&thread_id)?;

        let reply = repo
            .create(thread_uuid, &text, identity.user_id)
            .await
            .map_err(|e| sanitize_error(&ApiError::Database(e)))?;

        tracing::info!(reply_id = %reply.id, thread_id = %thread_uuid, "Reply created");

        Ok(Reply::from(reply))
    }

    /// Like a thread
    ///
    /// Inserts a like row and returns the re-fetched parent thread;
    /// callers re-read likesNumber/likes to observe the new count.
    /// Repeated likes by the same user insert repeated rows.
    async fn like_thread(&self, ctx: &Context<'_>, thread_id: ID) -> Result<Thread> {
        let identity = require_identity(ctx)?;
        let like_repo = ctx.data::<LikeRepository>()?;
        let thread_repo = ctx.data::<ThreadRepository>()?;
        let thread_uuid = parse_thread_id(&thread_id)?;

        like_repo
            .create_for_thread(thread_uuid, identity.user_id)
            .await
            .map_err(|e| sanitize_error(&ApiError::Database(e)))?;

        let thread = thread_repo
            .find_by_id(thread_uuid)
            .await
            .map_err(|e| sanitize_error(&ApiError::Database(e)))?
            .ok_or_else(|| sanitize_error(&ApiError::not_found("thread", thread_id.as_str())))?;

        Ok(Thread::from(thread))
    }

    /// Like a reply
    ///
    /// Symmetric to likeThread: inserts a like row with the reply as its
    /// target and returns the re-fetched parent reply.
    async fn like_reply(&self, ctx: &Context<'_>, reply_id: ID) -> Result<Reply> {
        let identity = require_identity(ctx)?;
        let like_repo = ctx.data::<LikeRepository>()?;
        let reply_repo = ctx.data::<ReplyRepository>()?;
        let reply_uuid = parse_reply_id(&reply_id)?;

        like_repo
            .create_for_reply(reply_uuid, identity.user_id)
            .await
            .map_err(|e| sanitize_error(&ApiError::Database(e)))?;

        let reply = reply_repo
            .find_by_id(reply_uuid)
            .await
            .map_err(|e| sanitize_error(&ApiError::Database(e)))?
            .ok_or_else(|| sanitize_error(&ApiError::not_found("reply", reply_id.as_str())))?;

        Ok(Reply::from(reply))
    }
}
