//! Like repository for centralized database operations

use sqlx::PgPool;
use uuid::Uuid;

use super::utils::LIKE_COLUMNS;
use crate::models::Like;

/// Repository for like database operations
///
/// A like targets exactly one thread or one reply; each insert method
/// sets one target column and leaves the other NULL. No uniqueness is
/// enforced on (user, target) pairs: repeated likes insert repeated rows.
#[derive(Clone)]
pub struct LikeRepository {
    pool: PgPool,
}

impl LikeRepository {
    /// Create a new LikeRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List likes on a thread, newest first, with offset pagination
    pub async fn list_for_thread(
        &self,
        thread_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Like>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM likes WHERE thread_id = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            LIKE_COLUMNS
        );
        sqlx::query_as::<_, Like>(&sql)
            .bind(thread_id)
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await
    }

    /// List likes on a reply, newest first, with offset pagination
    pub async fn list_for_reply(
        &self,
        reply_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Like>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM likes WHERE reply_id = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            LIKE_COLUMNS
        );
        sqlx::query_as::<_, Like>(&sql)
            .bind(reply_id)
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await
    }

    /// Count likes on a thread
    pub async fn count_for_thread(&self, thread_id: Uuid) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE thread_id = $1")
            .bind(thread_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Count likes on a reply
    pub async fn count_for_reply(&self, reply_id: Uuid) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE reply_id = $1")
            .bind(reply_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Insert a like on a thread attributed to a user
    pub async fn create_for_thread(
        &self,
        thread_id: Uuid,
        user_id: Uuid,
    ) -> Result<Like, sqlx::Error> {
        let sql = format!(
            "INSERT INTO likes (id, user_id, thread_id) VALUES ($1, $2, $3) RETURNING {}",
            LIKE_COLUMNS
        );
        sqlx::query_as::<_, Like>(&sql)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(thread_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Insert a like on a reply attributed to a user
    pub async fn create_for_reply(
        &self,
        reply_id: Uuid,
        user_id: Uuid,
    ) -> Result<Like, sqlx::Error> {
        let sql = format!(
            "INSERT INTO likes (id, user_id, reply_id) VALUES ($1, $2, $3) RETURNING {}",
            LIKE_COLUMNS
        );
        sqlx::query_as::<_, Like>(&sql)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(reply_id)
            .fetch_one(&self.pool)
            .await
    }
}
