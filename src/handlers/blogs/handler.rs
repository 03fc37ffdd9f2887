//! Blog handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    constants::DEFAULT_RECENT_ACTIONS_COUNT,
    error::AppResult,
    services::BlogService,
    state::AppState,
    utils::cap_count,
};

use super::{
    request::RecentActionsQuery,
    response::{BlogEntryResponse, CommentsResponse, RecentActionsResponse},
};

/// Latest blog entries and comments
pub async fn recent_actions(
    State(state): State<AppState>,
    Query(query): Query<RecentActionsQuery>,
) -> AppResult<Json<RecentActionsResponse>> {
    let max_count = cap_count(query.max_count, DEFAULT_RECENT_ACTIONS_COUNT);
    let actions = BlogService::recent_actions(state.codeforces(), max_count).await?;

    Ok(Json(RecentActionsResponse { actions }))
}

/// Blog entry with comments
pub async fn get_blog_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BlogEntryResponse>> {
    let response = BlogService::get_entry(state.codeforces(), id).await?;
    Ok(Json(response))
}

pub async fn get_comments(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CommentsResponse>> {
    let comments = BlogService::get_comments(state.codeforces(), id).await?;
    Ok(Json(CommentsResponse { comments }))
}
