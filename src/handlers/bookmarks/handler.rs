//! Bookmark handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::BookmarkedProblem,
    services::BookmarkService,
    state::AppState,
    utils::validate_problem_id,
};

use super::response::{BookmarkStatusResponse, BookmarksListResponse};

/// List bookmarks, newest first
pub async fn list_bookmarks(State(state): State<AppState>) -> AppResult<Json<BookmarksListResponse>> {
    let bookmarks = BookmarkService::list(state.db()).await?;

    Ok(Json(BookmarksListResponse {
        total: bookmarks.len(),
        bookmarks,
    }))
}

pub async fn bookmark_status(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
) -> AppResult<Json<BookmarkStatusResponse>> {
    validate_problem_id(&problem_id)?;
    let bookmarked = BookmarkService::is_bookmarked(state.db(), &problem_id).await?;

    Ok(Json(BookmarkStatusResponse {
        problem_id,
        bookmarked,
    }))
}

/// Bookmark a loaded problem
pub async fn add_bookmark(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
) -> AppResult<Json<BookmarkedProblem>> {
    validate_problem_id(&problem_id)?;
    let bookmark = BookmarkService::bookmark(state.db(), state.problems(), &problem_id).await?;
    Ok(Json(bookmark))
}

pub async fn toggle_bookmark(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
) -> AppResult<Json<BookmarkStatusResponse>> {
    validate_problem_id(&problem_id)?;
    let bookmarked = BookmarkService::toggle(state.db(), state.problems(), &problem_id).await?;

    Ok(Json(BookmarkStatusResponse {
        problem_id,
        bookmarked,
    }))
}

pub async fn remove_bookmark(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
) -> AppResult<StatusCode> {
    validate_problem_id(&problem_id)?;
    BookmarkService::remove(state.db(), &problem_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
