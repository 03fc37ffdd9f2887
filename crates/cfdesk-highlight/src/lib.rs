//! # cfdesk-highlight
//!
//! Single-pass lexical highlighter for the code editor.
//!
//! Source is split into lines and every line is scanned left to right into
//! [`Span`]s tagged with a display [`Role`]. Recognition order per position:
//! `//` comment, `/* ... */` comment, `#` comment, quoted string, number,
//! identifier/keyword, then any other single character as plain text.
//!
//! ```rust
//! use cfdesk_highlight::{highlight, Role};
//!
//! let spans = highlight("return 0;", "cpp");
//! assert_eq!(spans[0].role, Role::Keyword);
//! assert_eq!(spans[2].text, "0");
//! ```

pub mod highlighter;
pub mod languages;
pub mod span;

pub use highlighter::{highlight, highlight_lines};
pub use languages::{Language, keywords_for};
pub use span::{Role, Span};
