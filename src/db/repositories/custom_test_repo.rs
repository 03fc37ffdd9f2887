//! Custom test case repository

use sqlx::PgPool;

use crate::{error::AppResult, models::CustomTestCase};

/// Repository for custom test case database operations
pub struct CustomTestRepository;

impl CustomTestRepository {
    /// Tests of a problem, newest first
    pub async fn list_for_problem(pool: &PgPool, problem_id: &str) -> AppResult<Vec<CustomTestCase>> {
        let tests = sqlx::query_as::<_, CustomTestCase>(
            r#"
            SELECT * FROM custom_test_cases
            WHERE problem_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(tests)
    }

    pub async fn create(
        pool: &PgPool,
        problem_id: &str,
        input: &str,
        expected_output: &str,
    ) -> AppResult<CustomTestCase> {
        let test = sqlx::query_as::<_, CustomTestCase>(
            r#"
            INSERT INTO custom_test_cases (problem_id, input, expected_output)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(problem_id)
        .bind(input)
        .bind(expected_output)
        .fetch_one(pool)
        .await?;

        Ok(test)
    }

    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM custom_test_cases WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove every test of a problem; returns the number deleted
    pub async fn delete_all_for_problem(pool: &PgPool, problem_id: &str) -> AppResult<u64> {
        let result = sqlx::query(r#"DELETE FROM custom_test_cases WHERE problem_id = $1"#)
            .bind(problem_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
