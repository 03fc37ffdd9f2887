//! Code execution service
//!
//! No judge backend is wired in; both operations report the feature as
//! unavailable after validating their input.

use tracing::debug;

use crate::{
    constants::{COMMUNITY_TESTS_UNAVAILABLE, EXECUTION_UNAVAILABLE},
    error::{AppError, AppResult},
    models::{CommunityTestCase, ExecutionResult},
};

/// Code execution service
pub struct ExecutionService;

impl ExecutionService {
    /// Run source code against an input
    pub async fn run_code(language_id: i32, source: &str, stdin: &str) -> AppResult<ExecutionResult> {
        debug!(
            language_id,
            source_bytes = source.len(),
            stdin_bytes = stdin.len(),
            "Execution requested"
        );
        Err(AppError::ExecutionUnavailable(EXECUTION_UNAVAILABLE.to_string()))
    }

    /// Tests shared by other users for a problem
    pub async fn community_tests(problem_id: &str) -> AppResult<Vec<CommunityTestCase>> {
        debug!(problem_id, "Community tests requested");
        Err(AppError::ExecutionUnavailable(
            COMMUNITY_TESTS_UNAVAILABLE.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_code_is_unavailable() {
        let err = tokio_test::block_on(ExecutionService::run_code(54, "int main() {}", ""))
            .unwrap_err();
        assert_eq!(err.to_string(), EXECUTION_UNAVAILABLE);
    }

    #[test]
    fn test_community_tests_are_unavailable() {
        let err = tokio_test::block_on(ExecutionService::community_tests("4-A")).unwrap_err();
        assert!(matches!(err, AppError::ExecutionUnavailable(_)));
        assert_eq!(err.to_string(), COMMUNITY_TESTS_UNAVAILABLE);
    }
}
