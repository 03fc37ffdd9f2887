//! Contest handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Contest routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_contests))
        .route("/{id}", get(handler::get_contest))
        .route("/{id}/standings", get(handler::get_standings))
        .route("/{id}/hacks", get(handler::get_hacks))
        .route("/{id}/rating-changes", get(handler::get_rating_changes))
        .route("/{id}/status", get(handler::get_status))
}
