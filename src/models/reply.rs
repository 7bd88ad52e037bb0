//! Reply model

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Response attached to exactly one thread, from the replies table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reply {
    /// Unique reply identifier
    pub id: Uuid,

    /// Parent thread
    pub thread_id: Uuid,

    /// Reply body text (required)
    pub text: String,

    /// User who wrote the reply
    pub user_id: Uuid,

    /// Creation timestamp, assigned by the database
    pub created_at: DateTime<Utc>,
}
