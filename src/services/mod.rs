//! Business logic services

pub mod blog_service;
pub mod bookmark_service;
pub mod contest_service;
pub mod editor_service;
pub mod execution_service;
pub mod note_service;
pub mod problem_service;
pub mod user_service;

pub use blog_service::BlogService;
pub use bookmark_service::BookmarkService;
pub use contest_service::ContestService;
pub use editor_service::EditorService;
pub use execution_service::ExecutionService;
pub use note_service::NoteService;
pub use problem_service::ProblemService;
pub use user_service::UserService;

use tracing::warn;

use crate::error::AppResult;

/// Keep a secondary upstream result, replacing a failure with the default.
pub(crate) fn best_effort<T: Default>(result: AppResult<T>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        warn!(what, error = %e, "Optional Codeforces request failed");
        T::default()
    })
}
