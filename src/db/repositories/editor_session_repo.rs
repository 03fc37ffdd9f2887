//! Editor session repository

use sqlx::PgPool;

use crate::{error::AppResult, models::EditorSession};

/// Repository for editor session database operations
pub struct EditorSessionRepository;

impl EditorSessionRepository {
    pub async fn find(pool: &PgPool, problem_id: &str) -> AppResult<Option<EditorSession>> {
        let session = sqlx::query_as::<_, EditorSession>(
            r#"SELECT * FROM editor_sessions WHERE problem_id = $1"#,
        )
        .bind(problem_id)
        .fetch_optional(pool)
        .await?;

        Ok(session)
    }

    /// Most recently modified sessions first
    pub async fn recent(pool: &PgPool, limit: i64) -> AppResult<Vec<EditorSession>> {
        let sessions = sqlx::query_as::<_, EditorSession>(
            r#"SELECT * FROM editor_sessions ORDER BY last_modified DESC LIMIT $1"#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(sessions)
    }

    /// Save a session, replacing the previous one for the problem
    pub async fn upsert(pool: &PgPool, session: &EditorSession) -> AppResult<EditorSession> {
        let saved = sqlx::query_as::<_, EditorSession>(
            r#"
            INSERT INTO editor_sessions (
                problem_id, code, language_id, language_name, custom_input, last_modified
            )
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (problem_id) DO UPDATE SET
                code = EXCLUDED.code,
                language_id = EXCLUDED.language_id,
                language_name = EXCLUDED.language_name,
                custom_input = EXCLUDED.custom_input,
                last_modified = NOW()
            RETURNING *
            "#,
        )
        .bind(&session.problem_id)
        .bind(&session.code)
        .bind(session.language_id)
        .bind(&session.language_name)
        .bind(&session.custom_input)
        .fetch_one(pool)
        .await?;

        Ok(saved)
    }

    pub async fn delete(pool: &PgPool, problem_id: &str) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM editor_sessions WHERE problem_id = $1"#)
            .bind(problem_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
