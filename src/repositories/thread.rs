//! Thread repository for centralized database operations

use sqlx::PgPool;
use uuid::Uuid;

use super::utils::THREAD_COLUMNS;
use crate::models::Thread;

/// Sort order for thread listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadSort {
    /// Newest threads first (created_at descending)
    Latest,
    /// Oldest threads first (created_at ascending)
    Oldest,
}

impl ThreadSort {
    /// SQL ORDER BY direction keyword for this sort order
    pub fn direction(self) -> &'static str {
        match self {
            Self::Latest => "DESC",
            Self::Oldest => "ASC",
        }
    }
}

/// Repository for thread database operations
#[derive(Clone)]
pub struct ThreadRepository {
    pool: PgPool,
}

impl ThreadRepository {
    /// Create a new ThreadRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a thread by its unique ID
    pub async fn find_by_id(&self, thread_id: Uuid) -> Result<Option<Thread>, sqlx::Error> {
        let sql = format!("SELECT {} FROM threads WHERE id = $1", THREAD_COLUMNS);
        sqlx::query_as::<_, Thread>(&sql)
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// List threads ordered by creation time with offset pagination
    ///
    /// skip/limit apply after ordering. The direction keyword comes from
    /// ThreadSort, never from caller input, so interpolating it is safe.
    pub async fn list_page(
        &self,
        sort: ThreadSort,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Thread>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM threads ORDER BY created_at {} LIMIT $1 OFFSET $2",
            THREAD_COLUMNS,
            sort.direction()
        );
        sqlx::query_as::<_, Thread>(&sql)
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await
    }

    /// Create a new thread attributed to a user
    pub async fn create(
        &self,
        title: &str,
        text: Option<&str>,
        user_id: Uuid,
    ) -> Result<Thread, sqlx::Error> {
        let sql = format!(
            "INSERT INTO threads (id, title, text, user_id) VALUES ($1, $2, $3, $4) RETURNING {}",
            THREAD_COLUMNS
        );
        sqlx::query_as::<_, Thread>(&sql)
            .bind(Uuid::new_v4())
            .bind(title)
            .bind(text)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_direction_keywords() {
        assert_eq!(ThreadSort::Latest.direction(), "DESC");
        assert_eq!(ThreadSort::Oldest.direction(), "ASC");
    }
}
