//! Reply repository for centralized database operations

use sqlx::PgPool;
use uuid::Uuid;

use super::utils::REPLY_COLUMNS;
use crate::models::Reply;

/// Repository for reply database operations
#[derive(Clone)]
pub struct ReplyRepository {
    pool: PgPool,
}

impl ReplyRepository {
    /// Create a new ReplyRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a reply by its unique ID
    pub async fn find_by_id(&self, reply_id: Uuid) -> Result<Option<Reply>, sqlx::Error> {
        let sql = format!("SELECT {} FROM replies WHERE id = $1", REPLY_COLUMNS);
        sqlx::query_as::<_, Reply>(&sql)
            .bind(reply_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// List replies for a thread, newest first, with offset pagination
    pub async fn list_for_thread(
        &self,
        thread_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Reply>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM replies WHERE thread_id = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            REPLY_COLUMNS
        );
        sqlx::query_as::<_, Reply>(&sql)
            .bind(thread_id)
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await
    }

    /// Count replies attached to a thread
    pub async fn count_for_thread(&self, thread_id: Uuid) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM replies WHERE thread_id = $1")
            .bind(thread_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Create a new reply on a thread attributed to a user
    ///
    /// Thread existence is not re-checked here; a dangling thread_id
    /// surfaces as a foreign-key violation from the database.
    pub async fn create(
        &self,
        thread_id: Uuid,
        text: &str,
        user_id: Uuid,
    ) -> Result<Reply, sqlx::Error> {
        let sql = format!(
            "INSERT INTO replies (id, thread_id, text, user_id) VALUES ($1, $2, $3, $4) RETURNING {}",
            REPLY_COLUMNS
        );
        sqlx::query_as::<_, Reply>(&sql)
            .bind(Uuid::new_v4())
            .bind(thread_id)
            .bind(text)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
    }
}
