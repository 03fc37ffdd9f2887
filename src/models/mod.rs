//! Domain models
//!
//! Rows persisted by the service and the editor's language table.

pub mod bookmark;
pub mod editor;
pub mod execution;
pub mod language;
pub mod note;

pub use bookmark::*;
pub use editor::*;
pub use execution::*;
pub use language::*;
pub use note::*;
