//! Like model

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Endorsement attached to exactly one thread or reply, from the likes table
///
/// Exactly one of `thread_id` / `reply_id` is set; rows with both or
/// neither never exist because the repository inserts only one target.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Like {
    /// Unique like identifier
    pub id: Uuid,

    /// User who placed the like
    pub user_id: Uuid,

    /// Target thread, if this like is on a thread
    pub thread_id: Option<Uuid>,

    /// Target reply, if this like is on a reply
    pub reply_id: Option<Uuid>,

    /// Creation timestamp, assigned by the database
    pub created_at: DateTime<Utc>,
}
