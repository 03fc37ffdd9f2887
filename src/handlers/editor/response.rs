//! Editor response DTOs

use serde::Serialize;

use crate::models::{CustomTestCase, EditorSession, LanguageTemplate};

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub templates: &'static [LanguageTemplate],
}

#[derive(Debug, Serialize)]
pub struct SessionsListResponse {
    pub sessions: Vec<EditorSession>,
}

#[derive(Debug, Serialize)]
pub struct CustomTestsResponse {
    pub tests: Vec<CustomTestCase>,
    pub total: usize,
}

/// Result of clearing a problem's custom tests
#[derive(Debug, Serialize)]
pub struct ClearTestsResponse {
    pub removed: u64,
}
