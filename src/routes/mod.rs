//! HTTP route handlers for the forum API
//!
//! The GraphQL endpoint is wired directly in main; only auxiliary REST
//! surfaces live here.

pub mod health;

pub use health::{health_router, HealthState};
