//! GraphQL queries for the forum API
//!
//! This module contains all query resolvers, organized by domain.

mod thread;
mod user;

pub use thread::ThreadQuery;
pub use user::UserQuery;

use async_graphql::MergedObject;

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(ThreadQuery, UserQuery);
