//! Reply GraphQL type

use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::graphql::loaders::UserDataLoader;
use crate::graphql::pagination::{clamp_limit, clamp_skip, DEFAULT_LIMIT, DEFAULT_SKIP};
use crate::models::Reply as DbReply;
use crate::repositories::LikeRepository;

use super::like::Like;
use super::user::User;

/// Reply information exposed via GraphQL
pub struct Reply {
    inner: DbReply,
}

impl Reply {
    /// Create a new GraphQL Reply from a database Reply
    pub fn new(reply: DbReply) -> Self {
        Self { inner: reply }
    }
}

impl From<DbReply> for Reply {
    fn from(reply: DbReply) -> Self {
        Self::new(reply)
    }
}

#[Object]
impl Reply {
    /// Unique reply identifier
    async fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Parent thread identifier
    async fn thread_id(&self) -> Uuid {
        self.inner.thread_id
    }

    /// Reply body text
    async fn text(&self) -> &str {
        &self.inner.text
    }

    /// Creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    // Relationship resolvers

    /// User who wrote this reply (batched and memoized per request)
    async fn created_by(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let loader = ctx.data::<UserDataLoader>()?;
        let user = loader.load_one(self.inner.user_id).await?;
        Ok(user.map(User::from))
    }

    /// Likes on this reply, newest first
    async fn likes(
        &self,
        ctx: &Context<'_>,
        #[graphql(default_with = "DEFAULT_SKIP")] skip: i32,
        #[graphql(default_with = "DEFAULT_LIMIT")] limit: i32,
    ) -> Result<Vec<Like>> {
        let repo = ctx.data::<LikeRepository>()?;
        let likes = repo
            .list_for_reply(self.inner.id, clamp_skip(skip), clamp_limit(limit))
            .await?;
        Ok(likes.into_iter().map(Like::from).collect())
    }

    /// Total number of likes on this reply
    async fn likes_number(&self, ctx: &Context<'_>) -> Result<i32> {
        let repo = ctx.data::<LikeRepository>()?;
        let count = repo.count_for_reply(self.inner.id).await?;
        Ok(count as i32)
    }
}
