//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns such as
//! tracing and bearer-token authorization.

pub mod bearer_auth;
pub mod trace;

pub use bearer_auth::BearerAuth;
pub use trace::Trace;
