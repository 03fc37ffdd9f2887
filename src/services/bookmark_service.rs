//! Bookmark service

use sqlx::PgPool;
use tracing::info;

use super::ProblemService;
use crate::{
    cache::ProblemCache,
    db::repositories::BookmarkRepository,
    error::AppResult,
    models::BookmarkedProblem,
};

/// Bookmark service for business logic
pub struct BookmarkService;

impl BookmarkService {
    /// All bookmarks, newest first
    pub async fn list(pool: &PgPool) -> AppResult<Vec<BookmarkedProblem>> {
        BookmarkRepository::list(pool).await
    }

    pub async fn is_bookmarked(pool: &PgPool, problem_id: &str) -> AppResult<bool> {
        BookmarkRepository::exists(pool, problem_id).await
    }

    /// Bookmark a problem from the cache, replacing any earlier bookmark
    pub async fn bookmark(
        pool: &PgPool,
        cache: &ProblemCache,
        problem_id: &str,
    ) -> AppResult<BookmarkedProblem> {
        let problem = ProblemService::get_problem(cache, problem_id)?;
        let saved = BookmarkRepository::upsert(pool, &BookmarkedProblem::from_problem(&problem)).await?;

        info!(problem_id, "Problem bookmarked");
        Ok(saved)
    }

    /// Remove the bookmark if present, else add it. Returns the new state.
    pub async fn toggle(pool: &PgPool, cache: &ProblemCache, problem_id: &str) -> AppResult<bool> {
        if BookmarkRepository::delete(pool, problem_id).await? {
            info!(problem_id, "Bookmark removed");
            return Ok(false);
        }

        Self::bookmark(pool, cache, problem_id).await?;
        Ok(true)
    }

    /// Remove a bookmark; removing a missing one is not an error
    pub async fn remove(pool: &PgPool, problem_id: &str) -> AppResult<()> {
        if BookmarkRepository::delete(pool, problem_id).await? {
            info!(problem_id, "Bookmark removed");
        }
        Ok(())
    }
}
