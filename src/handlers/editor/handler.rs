//! Editor handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{CustomTestCase, EditorSession},
    services::EditorService,
    state::AppState,
    utils::validate_problem_id,
};

use super::{
    request::{AddCustomTestRequest, ChangeLanguageRequest, SaveSessionRequest},
    response::{ClearTestsResponse, CustomTestsResponse, SessionsListResponse, TemplatesResponse},
};

/// Language templates offered by the editor
pub async fn list_templates() -> Json<TemplatesResponse> {
    Json(TemplatesResponse {
        templates: EditorService::templates(),
    })
}

pub async fn recent_sessions(State(state): State<AppState>) -> AppResult<Json<SessionsListResponse>> {
    let sessions = EditorService::recent_sessions(state.db()).await?;
    Ok(Json(SessionsListResponse { sessions }))
}

/// Saved session or a fresh default one
pub async fn get_session(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
) -> AppResult<Json<EditorSession>> {
    validate_problem_id(&problem_id)?;
    let session = EditorService::get_session(state.db(), &problem_id).await?;
    Ok(Json(session))
}

pub async fn save_session(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
    Json(payload): Json<SaveSessionRequest>,
) -> AppResult<Json<EditorSession>> {
    validate_problem_id(&problem_id)?;
    payload.validate()?;

    let session = EditorService::save_session(state.db(), &problem_id, payload).await?;
    Ok(Json(session))
}

/// Switch language and reset the code to its template
pub async fn change_language(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
    Json(payload): Json<ChangeLanguageRequest>,
) -> AppResult<Json<EditorSession>> {
    validate_problem_id(&problem_id)?;
    let session =
        EditorService::change_language(state.db(), &problem_id, payload.language_id).await?;
    Ok(Json(session))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
) -> AppResult<StatusCode> {
    validate_problem_id(&problem_id)?;
    EditorService::delete_session(state.db(), &problem_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_tests(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
) -> AppResult<Json<CustomTestsResponse>> {
    validate_problem_id(&problem_id)?;
    let tests = EditorService::list_tests(state.db(), &problem_id).await?;

    Ok(Json(CustomTestsResponse {
        total: tests.len(),
        tests,
    }))
}

pub async fn add_test(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
    Json(payload): Json<AddCustomTestRequest>,
) -> AppResult<(StatusCode, Json<CustomTestCase>)> {
    validate_problem_id(&problem_id)?;
    payload.validate()?;

    let test = EditorService::add_test(state.db(), &problem_id, payload).await?;
    Ok((StatusCode::CREATED, Json(test)))
}

pub async fn clear_tests(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
) -> AppResult<Json<ClearTestsResponse>> {
    validate_problem_id(&problem_id)?;
    let removed = EditorService::clear_tests(state.db(), &problem_id).await?;
    Ok(Json(ClearTestsResponse { removed }))
}

pub async fn delete_test(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    EditorService::delete_test(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
