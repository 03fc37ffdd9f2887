//! Bookmark handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Bookmark routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_bookmarks))
        .route(
            "/{problem_id}",
            get(handler::bookmark_status)
                .put(handler::add_bookmark)
                .delete(handler::remove_bookmark),
        )
        .route("/{problem_id}/toggle", post(handler::toggle_bookmark))
}
