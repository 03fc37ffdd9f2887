//! HTTP middleware
//!
//! Only request logging; the API is local and unauthenticated.

pub mod logging;

pub use logging::logging_middleware;
