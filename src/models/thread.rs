//! Thread model

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Top-level discussion post from the threads table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Thread {
    /// Unique thread identifier
    pub id: Uuid,

    /// Thread title (required)
    pub title: String,

    /// Optional body text
    pub text: Option<String>,

    /// User who created the thread
    pub user_id: Uuid,

    /// Creation timestamp, assigned by the database
    pub created_at: DateTime<Utc>,
}
