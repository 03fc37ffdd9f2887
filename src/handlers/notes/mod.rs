//! Problem note handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Note routes
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/{problem_id}",
        get(handler::get_note)
            .put(handler::save_note)
            .delete(handler::delete_note),
    )
}
