//! Database models for the forum API
//!
//! SQLx models for the four entity kinds plus the JWT claims and
//! request identity types.

pub mod like;
pub mod reply;
pub mod thread;
pub mod user;

pub use like::Like;
pub use reply::Reply;
pub use thread::Thread;
pub use user::{Claims, Identity, User};
