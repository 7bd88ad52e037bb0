//! Thread queries for the forum GraphQL API
//!
//! This module provides the public read operations:
//! - threads: paginated listing sorted by creation time
//! - thread: point lookup by id
//!
//! Neither requires authentication.

use async_graphql::{Context, Object, Result, ID};
use uuid::Uuid;

use crate::graphql::pagination::{clamp_limit, clamp_skip, DEFAULT_LIMIT, DEFAULT_SKIP};
use crate::graphql::types::{SortOrder, Thread};
use crate::repositories::ThreadRepository;

/// Thread-related queries
#[derive(Default)]
pub struct ThreadQuery;

#[Object]
impl ThreadQuery {
    /// List threads ordered by creation time
    ///
    /// skip/limit apply after ordering (offset pagination).
    async fn threads(
        &self,
        ctx: &Context<'_>,
        sort_order: SortOrder,
        #[graphql(default_with = "DEFAULT_SKIP")] skip: i32,
        #[graphql(default_with = "DEFAULT_LIMIT")] limit: i32,
    ) -> Result<Vec<Thread>> {
        let repo = ctx.data::<ThreadRepository>()?;
        let threads = repo
            .list_page(sort_order.into(), clamp_skip(skip), clamp_limit(limit))
            .await?;
        Ok(threads.into_iter().map(Thread::from).collect())
    }

    /// Get a thread by ID
    ///
    /// Returns null when no such thread exists; absence is not an error.
    /// An id that cannot name any row counts as absent too, so malformed
    /// ids resolve to null instead of failing the query.
    async fn thread(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Thread>> {
        let repo = ctx.data::<ThreadRepository>()?;
        let Ok(uuid) = Uuid::parse_str(&id) else {
            return Ok(None);
        };
        let thread = repo.find_by_id(uuid).await?;
        Ok(thread.map(Thread::from))
    }
}
