//! Problem handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use cfdesk_common::Problem;
use cfdesk_rules::prelude::{POPULAR_TAGS, RATING_CEILING, RATING_FLOOR};

use crate::{
    codeforces::CfSubmission,
    constants::DEFAULT_RECENT_STATUS_COUNT,
    error::AppResult,
    models::CommunityTestCase,
    services::{ExecutionService, ProblemService},
    state::AppState,
    utils::{cap_count, validate_problem_id},
};

use super::{
    request::{ListProblemsQuery, RecentStatusQuery},
    response::{ProblemsListResponse, TagsResponse},
};

/// Filtered and sorted problem catalog
pub async fn list_problems(
    State(state): State<AppState>,
    Query(query): Query<ListProblemsQuery>,
) -> AppResult<Json<ProblemsListResponse>> {
    let filter = query.to_filter();

    let (problems, catalog_size) = ProblemService::list_problems(
        state.codeforces(),
        state.problems(),
        &filter,
        query.refresh.unwrap_or(false),
    )
    .await?;

    Ok(Json(ProblemsListResponse {
        total: problems.len(),
        problems,
        catalog_size,
        filter,
    }))
}

/// Quick-filter tags
pub async fn list_tags() -> Json<TagsResponse> {
    Json(TagsResponse {
        tags: POPULAR_TAGS.to_vec(),
        rating_floor: RATING_FLOOR,
        rating_ceiling: RATING_CEILING,
    })
}

pub async fn recent_status(
    State(state): State<AppState>,
    Query(query): Query<RecentStatusQuery>,
) -> AppResult<Json<Vec<CfSubmission>>> {
    let count = cap_count(query.count, DEFAULT_RECENT_STATUS_COUNT);
    let submissions =
        ProblemService::recent_status(state.codeforces(), count, query.problemset_name).await?;
    Ok(Json(submissions))
}

/// Problem from the last catalog load
pub async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Problem>> {
    validate_problem_id(&id)?;
    let problem = ProblemService::get_problem(state.problems(), &id)?;
    Ok(Json(problem))
}

pub async fn community_tests(Path(id): Path<String>) -> AppResult<Json<Vec<CommunityTestCase>>> {
    validate_problem_id(&id)?;
    let tests = ExecutionService::community_tests(&id).await?;
    Ok(Json(tests))
}
