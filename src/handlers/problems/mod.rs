//! Problem handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Problem routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_problems))
        .route("/tags", get(handler::list_tags))
        .route("/recent-status", get(handler::recent_status))
        .route("/{id}", get(handler::get_problem))
        .route("/{id}/community-tests", get(handler::community_tests))
}
