//! Shared utilities for repositories

// ============================================================================
// SQL Column Constants
//
// These constants define the SELECT column lists for each entity type,
// reducing duplication and ensuring consistency across queries.
// ============================================================================

/// SQL columns for user queries
pub const USER_COLUMNS: &str = "id, username, password_hash, avatar, created_at";

/// SQL columns for thread queries
pub const THREAD_COLUMNS: &str = "id, title, text, user_id, created_at";

/// SQL columns for reply queries
pub const REPLY_COLUMNS: &str = "id, thread_id, text, user_id, created_at";

/// SQL columns for like queries
pub const LIKE_COLUMNS: &str = "id, user_id, thread_id, reply_id, created_at";
