//! Editor session and custom test models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::language::LanguageTemplate;

/// Saved editor state for one problem
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct EditorSession {
    pub problem_id: String,
    pub code: String,
    pub language_id: i32,
    pub language_name: String,
    pub custom_input: String,
    pub last_modified: DateTime<Utc>,
}

impl EditorSession {
    /// Fresh session holding the template's boilerplate
    pub fn from_template(problem_id: impl Into<String>, template: &LanguageTemplate) -> Self {
        Self {
            problem_id: problem_id.into(),
            code: template.boilerplate.to_string(),
            language_id: template.id,
            language_name: template.name.to_string(),
            custom_input: String::new(),
            last_modified: Utc::now(),
        }
    }
}

/// User-written input/expected-output pair for a problem
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct CustomTestCase {
    pub id: i64,
    pub problem_id: String,
    pub input: String,
    pub expected_output: String,
    pub created_at: DateTime<Utc>,
}
