//! Highlighted spans

use serde::{Deserialize, Serialize};

/// Display role of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Plain,
    Keyword,
    String,
    Comment,
    Number,
}

impl Role {
    /// CSS class a web renderer attaches to the span
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Plain => "hl-plain",
            Self::Keyword => "hl-keyword",
            Self::String => "hl-string",
            Self::Comment => "hl-comment",
            Self::Number => "hl-number",
        }
    }
}

/// Contiguous run of source text with one role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span<'a> {
    pub text: &'a str,
    pub role: Role,
}

impl<'a> Span<'a> {
    pub fn new(text: &'a str, role: Role) -> Self {
        Self { text, role }
    }

    pub fn plain(text: &'a str) -> Self {
        Self::new(text, Role::Plain)
    }
}
