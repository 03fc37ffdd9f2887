//! Problem note service

use sqlx::PgPool;

use crate::{
    db::repositories::NoteRepository,
    error::{AppError, AppResult},
    models::ProblemNote,
};

/// Note service for business logic
pub struct NoteService;

impl NoteService {
    pub async fn get(pool: &PgPool, problem_id: &str) -> AppResult<ProblemNote> {
        NoteRepository::find(pool, problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No note for problem {}", problem_id)))
    }

    /// Create or replace the note
    pub async fn save(pool: &PgPool, problem_id: &str, note: &str) -> AppResult<ProblemNote> {
        NoteRepository::upsert(pool, problem_id, note).await
    }

    pub async fn delete(pool: &PgPool, problem_id: &str) -> AppResult<()> {
        NoteRepository::delete(pool, problem_id).await?;
        Ok(())
    }
}
