//! Code execution handler

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{routing::post, Router};

use crate::state::AppState;

/// Execution routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/execute", post(handler::execute_code))
}
