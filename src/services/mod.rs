//! Services for the forum API
//!
//! Currently only the credential subsystem lives here; persistence goes
//! through the repository layer instead of service objects.

pub mod auth;

pub use auth::{AuthConfig, AuthService};
