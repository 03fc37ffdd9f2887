//! Highlight response DTOs

use cfdesk_highlight::{Role, Span};
use serde::Serialize;

/// Owned copy of a highlighted span
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanResponse {
    pub text: String,
    pub role: Role,
    pub class: &'static str,
}

impl From<Span<'_>> for SpanResponse {
    fn from(span: Span<'_>) -> Self {
        Self {
            text: span.text.to_string(),
            role: span.role,
            class: span.role.css_class(),
        }
    }
}

/// Either a flat span list or one span list per line
#[derive(Debug, Serialize)]
pub struct HighlightResponse {
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spans: Option<Vec<SpanResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<Vec<SpanResponse>>>,
}
