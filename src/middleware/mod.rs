//! Middleware components for the forum API
//!
//! Currently just the Authorization header handling shared by the
//! GraphQL request handler.

pub mod auth;

pub use auth::extract_bearer_token;
