//! GraphQL type definitions for the forum API

mod like;
mod reply;
mod thread;
mod user;

pub use like::Like;
pub use reply::Reply;
pub use thread::{SortOrder, Thread};
pub use user::{AuthPayload, User};
