//! Execution handler implementation

use axum::Json;
use validator::Validate;

use crate::{
    error::AppResult, models::ExecutionResult, services::ExecutionService,
    utils::validate_problem_id,
};

use super::request::ExecutionRequest;

/// Run code against custom input
pub async fn execute_code(
    Json(payload): Json<ExecutionRequest>,
) -> AppResult<Json<ExecutionResult>> {
    payload.validate()?;
    if let Some(problem_id) = payload.problem_id.as_deref() {
        validate_problem_id(problem_id)?;
    }

    let result = ExecutionService::run_code(
        payload.language_id,
        &payload.source_code,
        payload.stdin.as_deref().unwrap_or_default(),
    )
    .await?;
    Ok(Json(result))
}
