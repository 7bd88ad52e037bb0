//! DataLoader implementations for GraphQL
//!
//! Loaders batch repeated lookups from relationship resolvers into a
//! single database query and cache results for one request/response
//! cycle only; nothing is shared across requests. The GraphQL handler
//! creates a fresh loader per request and attaches it as request data.

mod user;

pub use user::{user_loader, UserDataLoader, UserLoader};
