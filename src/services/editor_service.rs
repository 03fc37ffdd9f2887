//! Editor service
//!
//! Per-problem editor sessions and the custom tests attached to them.

use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::{
    constants::RECENT_SESSIONS_LIMIT,
    db::repositories::{CustomTestRepository, EditorSessionRepository},
    error::{AppError, AppResult},
    handlers::editor::request::{AddCustomTestRequest, SaveSessionRequest},
    models::{template_for, CustomTestCase, EditorSession, LanguageTemplate, LANGUAGE_TEMPLATES},
};

/// Editor service for business logic
pub struct EditorService;

impl EditorService {
    pub fn templates() -> &'static [LanguageTemplate] {
        LANGUAGE_TEMPLATES
    }

    /// Most recently modified sessions
    pub async fn recent_sessions(pool: &PgPool) -> AppResult<Vec<EditorSession>> {
        EditorSessionRepository::recent(pool, RECENT_SESSIONS_LIMIT).await
    }

    /// Saved session, or an unsaved one built from the default template
    pub async fn get_session(pool: &PgPool, problem_id: &str) -> AppResult<EditorSession> {
        match EditorSessionRepository::find(pool, problem_id).await? {
            Some(session) => Ok(session),
            None => {
                debug!(problem_id, "No saved session, using default template");
                Ok(EditorSession::from_template(problem_id, &LANGUAGE_TEMPLATES[0]))
            }
        }
    }

    /// Persist code and custom input as sent
    pub async fn save_session(
        pool: &PgPool,
        problem_id: &str,
        payload: SaveSessionRequest,
    ) -> AppResult<EditorSession> {
        let template = template_for(payload.language_id);

        let session = EditorSession {
            problem_id: problem_id.to_string(),
            code: payload.code,
            language_id: template.id,
            language_name: template.name.to_string(),
            custom_input: payload.custom_input.unwrap_or_default(),
            last_modified: Utc::now(),
        };

        EditorSessionRepository::upsert(pool, &session).await
    }

    /// Switch language: the code is replaced by the new template, input is kept
    pub async fn change_language(
        pool: &PgPool,
        problem_id: &str,
        language_id: i32,
    ) -> AppResult<EditorSession> {
        let current = Self::get_session(pool, problem_id).await?;
        let session = switch_language(current, template_for(language_id));

        let saved = EditorSessionRepository::upsert(pool, &session).await?;
        info!(problem_id, language_id = saved.language_id, "Editor language changed");
        Ok(saved)
    }

    pub async fn delete_session(pool: &PgPool, problem_id: &str) -> AppResult<()> {
        EditorSessionRepository::delete(pool, problem_id).await?;
        Ok(())
    }

    /// Custom tests, newest first
    pub async fn list_tests(pool: &PgPool, problem_id: &str) -> AppResult<Vec<CustomTestCase>> {
        CustomTestRepository::list_for_problem(pool, problem_id).await
    }

    pub async fn add_test(
        pool: &PgPool,
        problem_id: &str,
        payload: AddCustomTestRequest,
    ) -> AppResult<CustomTestCase> {
        if payload.input.is_empty() && payload.expected_output.is_empty() {
            return Err(AppError::Validation(
                "Test input and expected output cannot both be empty".to_string(),
            ));
        }

        CustomTestRepository::create(pool, problem_id, &payload.input, &payload.expected_output).await
    }

    /// Delete every custom test of a problem, returning how many were removed
    pub async fn clear_tests(pool: &PgPool, problem_id: &str) -> AppResult<u64> {
        let removed = CustomTestRepository::delete_all_for_problem(pool, problem_id).await?;
        info!(problem_id, removed, "Custom tests cleared");
        Ok(removed)
    }

    pub async fn delete_test(pool: &PgPool, id: i64) -> AppResult<()> {
        CustomTestRepository::delete(pool, id).await?;
        Ok(())
    }
}

/// Session after switching to another template
pub fn switch_language(session: EditorSession, template: &LanguageTemplate) -> EditorSession {
    EditorSession {
        code: template.boilerplate.to_string(),
        language_id: template.id,
        language_name: template.name.to_string(),
        last_modified: Utc::now(),
        ..session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_language_resets_code_keeps_input() {
        let mut session = EditorSession::from_template("4-A", template_for(54));
        session.code = "int main() { return 1; }".to_string();
        session.custom_input = "8\n".to_string();

        let switched = switch_language(session, template_for(71));
        assert_eq!(switched.language_id, 71);
        assert_eq!(switched.code, "# Your code here\n\n");
        assert_eq!(switched.custom_input, "8\n");
        assert_eq!(switched.problem_id, "4-A");
    }

    #[test]
    fn test_switch_to_unknown_language_uses_default() {
        let session = EditorSession::from_template("4-A", template_for(73));
        let switched = switch_language(session, template_for(-1));
        assert_eq!(switched.language_id, LANGUAGE_TEMPLATES[0].id);
    }

    #[test]
    fn test_templates_listed_in_order() {
        let ids: Vec<i32> = EditorService::templates().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![54, 62, 71, 75, 63, 70, 50, 60, 73]);
    }
}
