//! Database repository layer for the forum API
//!
//! This module provides the data access layer, centralizing all database
//! operations into reusable repositories. This pattern:
//! - Reduces code duplication across resolvers and middleware
//! - Provides a single source of truth for database queries
//! - Keeps SQL queries consistent across the codebase

pub mod like;
pub mod reply;
pub mod thread;
pub mod user;
pub mod utils;

pub use like::LikeRepository;
pub use reply::ReplyRepository;
pub use thread::{ThreadRepository, ThreadSort};
pub use user::UserRepository;
