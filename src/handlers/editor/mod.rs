//! Editor handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Editor routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/templates", get(handler::list_templates))
        .route("/sessions", get(handler::recent_sessions))
        .route(
            "/sessions/{problem_id}",
            get(handler::get_session)
                .put(handler::save_session)
                .delete(handler::delete_session),
        )
        .route("/sessions/{problem_id}/language", post(handler::change_language))
        .route(
            "/sessions/{problem_id}/tests",
            get(handler::list_tests)
                .post(handler::add_test)
                .delete(handler::clear_tests),
        )
        .route("/tests/{id}", delete(handler::delete_test))
}
