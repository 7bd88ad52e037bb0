//! GraphQL schema and resolvers for the forum API
//!
//! This module contains the async-graphql schema including:
//! - Query resolvers for threads and the current user
//! - Mutation resolvers for authentication, threads, replies and likes
//! - Type definitions with lazy per-field relationship resolution
//! - A per-request DataLoader for batched user lookups

pub mod loaders;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{build_schema, ForumSchema};
