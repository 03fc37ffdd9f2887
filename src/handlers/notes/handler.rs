//! Note handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::ProblemNote,
    services::NoteService,
    state::AppState,
    utils::validate_problem_id,
};

use super::request::SaveNoteRequest;

pub async fn get_note(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
) -> AppResult<Json<ProblemNote>> {
    validate_problem_id(&problem_id)?;
    let note = NoteService::get(state.db(), &problem_id).await?;
    Ok(Json(note))
}

/// Create or replace a note
pub async fn save_note(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
    Json(payload): Json<SaveNoteRequest>,
) -> AppResult<Json<ProblemNote>> {
    validate_problem_id(&problem_id)?;
    payload.validate()?;

    let note = NoteService::save(state.db(), &problem_id, &payload.note).await?;
    Ok(Json(note))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
) -> AppResult<StatusCode> {
    validate_problem_id(&problem_id)?;
    NoteService::delete(state.db(), &problem_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
