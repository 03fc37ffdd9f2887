//! User handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    codeforces::{BlogEntry, UserRating},
    error::AppResult,
    services::UserService,
    state::AppState,
};

use super::{
    request::{CompareQuery, RatedListQuery, UserStatusQuery, UsersQuery},
    response::{CompareUsersResponse, UserProfileResponse, UserStatusResponse, UsersListResponse},
};

/// Look up one or more users by handle
pub async fn get_users(
    State(state): State<AppState>,
    Query(query): Query<UsersQuery>,
) -> AppResult<Json<UsersListResponse>> {
    let handles = query.handles()?;
    let users = UserService::get_users(state.codeforces(), handles).await?;

    Ok(Json(UsersListResponse {
        total: users.len(),
        users,
    }))
}

/// Rated users
pub async fn rated_list(
    State(state): State<AppState>,
    Query(query): Query<RatedListQuery>,
) -> AppResult<Json<UsersListResponse>> {
    let users = UserService::rated_list(
        state.codeforces(),
        query.active_only.unwrap_or(true),
        query.include_retired.unwrap_or(false),
        query.contest_id,
    )
    .await?;

    Ok(Json(UsersListResponse {
        total: users.len(),
        users,
    }))
}

pub async fn compare_users(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> AppResult<Json<CompareUsersResponse>> {
    let pair = UserService::compare(state.codeforces(), &query.first, &query.second).await?;
    Ok(Json(pair))
}

/// Profile with rating history, recent submissions and statistics
pub async fn get_profile(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> AppResult<Json<UserProfileResponse>> {
    let profile = UserService::get_profile(state.codeforces(), &handle).await?;
    Ok(Json(profile))
}

pub async fn get_rating(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> AppResult<Json<Vec<UserRating>>> {
    let history = UserService::get_rating(state.codeforces(), &handle).await?;
    Ok(Json(history))
}

pub async fn get_status(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Query(query): Query<UserStatusQuery>,
) -> AppResult<Json<UserStatusResponse>> {
    let submissions =
        UserService::get_status(state.codeforces(), &handle, query.from(), query.count()).await?;
    Ok(Json(UserStatusResponse { submissions }))
}

pub async fn get_blog_entries(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> AppResult<Json<Vec<BlogEntry>>> {
    let entries = UserService::get_blog_entries(state.codeforces(), &handle).await?;
    Ok(Json(entries))
}
