//! Thread GraphQL type
//!
//! This module defines the GraphQL type for threads with relationship
//! resolvers. Every relationship field issues its own data access only
//! when the caller selects it; a query for `title` alone never touches
//! the replies or likes tables.

use async_graphql::{Context, Enum, Object, Result};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::graphql::loaders::UserDataLoader;
use crate::graphql::pagination::{clamp_limit, clamp_skip, DEFAULT_LIMIT, DEFAULT_SKIP};
use crate::models::Thread as DbThread;
use crate::repositories::{LikeRepository, ReplyRepository, ThreadSort};

use super::like::Like;
use super::reply::Reply;
use super::user::User;

/// Sort order for thread listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum SortOrder {
    /// Newest threads first
    Latest,
    /// Oldest threads first
    Oldest,
}

impl From<SortOrder> for ThreadSort {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Latest => ThreadSort::Latest,
            SortOrder::Oldest => ThreadSort::Oldest,
        }
    }
}

/// Thread information exposed via GraphQL
pub struct Thread {
    inner: DbThread,
}

impl Thread {
    /// Create a new GraphQL Thread from a database Thread
    pub fn new(thread: DbThread) -> Self {
        Self { inner: thread }
    }
}

impl From<DbThread> for Thread {
    fn from(thread: DbThread) -> Self {
        Self::new(thread)
    }
}

#[Object]
impl Thread {
    /// Unique thread identifier
    async fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Thread title
    async fn title(&self) -> &str {
        &self.inner.title
    }

    /// Optional body text
    async fn text(&self) -> Option<&str> {
        self.inner.text.as_deref()
    }

    /// Creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    // Relationship resolvers

    /// User who created this thread (batched and memoized per request)
    async fn created_by(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let loader = ctx.data::<UserDataLoader>()?;
        let user = loader.load_one(self.inner.user_id).await?;
        Ok(user.map(User::from))
    }

    /// Replies to this thread, newest first
    async fn replies(
        &self,
        ctx: &Context<'_>,
        #[graphql(default_with = "DEFAULT_SKIP")] skip: i32,
        #[graphql(default_with = "DEFAULT_LIMIT")] limit: i32,
    ) -> Result<Vec<Reply>> {
        let repo = ctx.data::<ReplyRepository>()?;
        let replies = repo
            .list_for_thread(self.inner.id, clamp_skip(skip), clamp_limit(limit))
            .await?;
        Ok(replies.into_iter().map(Reply::from).collect())
    }

    /// Total number of replies on this thread
    async fn replies_number(&self, ctx: &Context<'_>) -> Result<i32> {
        let repo = ctx.data::<ReplyRepository>()?;
        let count = repo.count_for_thread(self.inner.id).await?;
        Ok(count as i32)
    }

    /// Likes on this thread, newest first
    async fn likes(
        &self,
        ctx: &Context<'_>,
        #[graphql(default_with = "DEFAULT_SKIP")] skip: i32,
        #[graphql(default_with = "DEFAULT_LIMIT")] limit: i32,
    ) -> Result<Vec<Like>> {
        let repo = ctx.data::<LikeRepository>()?;
        let likes = repo
            .list_for_thread(self.inner.id, clamp_skip(skip), clamp_limit(limit))
            .await?;
        Ok(likes.into_iter().map(Like::from).collect())
    }

    /// Total number of likes on this thread
    async fn likes_number(&self, ctx: &Context<'_>) -> Result<i32> {
        let repo = ctx.data::<LikeRepository>()?;
        let count = repo.count_for_thread(self.inner.id).await?;
        Ok(count as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_maps_to_thread_sort() {
        assert_eq!(ThreadSort::from(SortOrder::Latest), ThreadSort::Latest);
        assert_eq!(ThreadSort::from(SortOrder::Oldest), ThreadSort::Oldest);
    }
}
