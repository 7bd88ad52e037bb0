//! Like GraphQL type

use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::graphql::loaders::UserDataLoader;
use crate::models::Like as DbLike;

use super::user::User;

/// Like information exposed via GraphQL
pub struct Like {
    inner: DbLike,
}

impl Like {
    /// Create a new GraphQL Like from a database Like
    pub fn new(like: DbLike) -> Self {
        Self { inner: like }
    }
}

impl From<DbLike> for Like {
    fn from(like: DbLike) -> Self {
        Self::new(like)
    }
}

#[Object]
impl Like {
    /// Unique like identifier
    async fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Target thread, set when this like is on a thread
    async fn thread_id(&self) -> Option<Uuid> {
        self.inner.thread_id
    }

    /// Target reply, set when this like is on a reply
    async fn reply_id(&self) -> Option<Uuid> {
        self.inner.reply_id
    }

    /// Creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    /// User who placed this like (batched and memoized per request)
    async fn created_by(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let loader = ctx.data::<UserDataLoader>()?;
        let user = loader.load_one(self.inner.user_id).await?;
        Ok(user.map(User::from))
    }
}
