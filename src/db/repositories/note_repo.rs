//! Problem note repository

use sqlx::PgPool;

use crate::{error::AppResult, models::ProblemNote};

/// Repository for problem note database operations
pub struct NoteRepository;

impl NoteRepository {
    pub async fn find(pool: &PgPool, problem_id: &str) -> AppResult<Option<ProblemNote>> {
        let note = sqlx::query_as::<_, ProblemNote>(
            r#"SELECT * FROM problem_notes WHERE problem_id = $1"#,
        )
        .bind(problem_id)
        .fetch_optional(pool)
        .await?;

        Ok(note)
    }

    /// Save a note, replacing the previous text
    pub async fn upsert(pool: &PgPool, problem_id: &str, note: &str) -> AppResult<ProblemNote> {
        let saved = sqlx::query_as::<_, ProblemNote>(
            r#"
            INSERT INTO problem_notes (problem_id, note, last_modified)
            VALUES ($1, $2, NOW())
            ON CONFLICT (problem_id) DO UPDATE SET
                note = EXCLUDED.note,
                last_modified = NOW()
            RETURNING *
            "#,
        )
        .bind(problem_id)
        .bind(note)
        .fetch_one(pool)
        .await?;

        Ok(saved)
    }

    pub async fn delete(pool: &PgPool, problem_id: &str) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM problem_notes WHERE problem_id = $1"#)
            .bind(problem_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
