//! cfdesk - Codeforces companion backend
//!
//! Serves a Codeforces desktop client: it proxies the public Codeforces API,
//! filters and sorts the problem catalog, highlights source code and keeps
//! bookmarks, notes and editor sessions in PostgreSQL.
//!
//! # Architecture
//!
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Codeforces**: Typed client for the public API
//! - **Repositories**: Database access
//! - **Models**: Persisted records and DTOs
//!
//! The filter engine lives in `cfdesk-rules` and the highlighter in
//! `cfdesk-highlight`; both are pure and called inline by the handlers.

pub mod cache;
pub mod codeforces;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
