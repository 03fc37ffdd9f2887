//! Contest handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use cfdesk_common::ContestId;

use crate::{
    codeforces::{Hack, RatingChange},
    error::AppResult,
    services::ContestService,
    state::AppState,
    utils::validate_handle,
};

use super::{
    request::{ContestStatusQuery, ListContestsQuery, StandingsParams},
    response::{ContestDetailResponse, ContestStatusResponse, ContestsListResponse, StandingsResponse},
};

/// List contests
pub async fn list_contests(
    State(state): State<AppState>,
    Query(query): Query<ListContestsQuery>,
) -> AppResult<Json<ContestsListResponse>> {
    let contests =
        ContestService::list_contests(state.codeforces(), query.gym.unwrap_or(false)).await?;

    Ok(Json(ContestsListResponse {
        total: contests.len(),
        contests,
    }))
}

/// Contest page with standings, hacks and rating changes
pub async fn get_contest(
    State(state): State<AppState>,
    Path(id): Path<ContestId>,
) -> AppResult<Json<ContestDetailResponse>> {
    let detail = ContestService::get_contest(state.codeforces(), id).await?;
    Ok(Json(detail))
}

pub async fn get_standings(
    State(state): State<AppState>,
    Path(id): Path<ContestId>,
    Query(params): Query<StandingsParams>,
) -> AppResult<Json<StandingsResponse>> {
    let query = params.to_query()?;
    let standings = ContestService::get_standings(state.codeforces(), id, query).await?;
    Ok(Json(standings))
}

pub async fn get_hacks(
    State(state): State<AppState>,
    Path(id): Path<ContestId>,
) -> AppResult<Json<Vec<Hack>>> {
    let hacks = ContestService::get_hacks(state.codeforces(), id).await?;
    Ok(Json(hacks))
}

pub async fn get_rating_changes(
    State(state): State<AppState>,
    Path(id): Path<ContestId>,
) -> AppResult<Json<Vec<RatingChange>>> {
    let changes = ContestService::get_rating_changes(state.codeforces(), id).await?;
    Ok(Json(changes))
}

/// Submissions of a contest, optionally for one handle
pub async fn get_status(
    State(state): State<AppState>,
    Path(id): Path<ContestId>,
    Query(query): Query<ContestStatusQuery>,
) -> AppResult<Json<ContestStatusResponse>> {
    if let Some(handle) = query.handle.as_deref() {
        validate_handle(handle)?;
    }

    let submissions = ContestService::get_status(
        state.codeforces(),
        id,
        query.handle.clone(),
        query.from(),
        query.count(),
    )
    .await?;

    Ok(Json(ContestStatusResponse { submissions }))
}
