//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod bookmark_repo;
pub mod custom_test_repo;
pub mod editor_session_repo;
pub mod note_repo;

pub use bookmark_repo::BookmarkRepository;
pub use custom_test_repo::CustomTestRepository;
pub use editor_session_repo::EditorSessionRepository;
pub use note_repo::NoteRepository;
