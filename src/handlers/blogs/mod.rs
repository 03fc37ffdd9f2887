//! Blog handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Blog routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/recent-actions", get(handler::recent_actions))
        .route("/{id}", get(handler::get_blog_entry))
        .route("/{id}/comments", get(handler::get_comments))
}
