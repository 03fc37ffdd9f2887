//! User handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// User routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::get_users))
        .route("/rated", get(handler::rated_list))
        .route("/compare", get(handler::compare_users))
        .route("/{handle}", get(handler::get_profile))
        .route("/{handle}/rating", get(handler::get_rating))
        .route("/{handle}/status", get(handler::get_status))
        .route("/{handle}/blog-entries", get(handler::get_blog_entries))
}
