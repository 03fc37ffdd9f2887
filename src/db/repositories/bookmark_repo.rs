//! Bookmark repository

use sqlx::PgPool;

use crate::{error::AppResult, models::BookmarkedProblem};

/// Repository for bookmark database operations
pub struct BookmarkRepository;

impl BookmarkRepository {
    /// All bookmarks, newest first
    pub async fn list(pool: &PgPool) -> AppResult<Vec<BookmarkedProblem>> {
        let bookmarks = sqlx::query_as::<_, BookmarkedProblem>(
            r#"SELECT * FROM bookmarked_problems ORDER BY bookmarked_at DESC"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(bookmarks)
    }

    pub async fn exists(pool: &PgPool, problem_id: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM bookmarked_problems WHERE problem_id = $1)"#,
        )
        .bind(problem_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Insert a bookmark, replacing any existing row for the same problem
    pub async fn upsert(pool: &PgPool, bookmark: &BookmarkedProblem) -> AppResult<BookmarkedProblem> {
        let saved = sqlx::query_as::<_, BookmarkedProblem>(
            r#"
            INSERT INTO bookmarked_problems (
                problem_id, name, contest_id, problem_index, rating, tags, bookmarked_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (problem_id) DO UPDATE SET
                name = EXCLUDED.name,
                contest_id = EXCLUDED.contest_id,
                problem_index = EXCLUDED.problem_index,
                rating = EXCLUDED.rating,
                tags = EXCLUDED.tags,
                bookmarked_at = EXCLUDED.bookmarked_at
            RETURNING *
            "#,
        )
        .bind(&bookmark.problem_id)
        .bind(&bookmark.name)
        .bind(bookmark.contest_id)
        .bind(&bookmark.index)
        .bind(bookmark.rating)
        .bind(&bookmark.tags)
        .bind(bookmark.bookmarked_at)
        .fetch_one(pool)
        .await?;

        Ok(saved)
    }

    /// Delete a bookmark; returns whether a row was removed
    pub async fn delete(pool: &PgPool, problem_id: &str) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM bookmarked_problems WHERE problem_id = $1"#)
            .bind(problem_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
