//! Contest response DTOs

use serde::Serialize;

use crate::codeforces::{CfContest, CfSubmission, Hack, ProblemDto, RanklistRow, RatingChange};

/// Contest list response
#[derive(Debug, Serialize)]
pub struct ContestsListResponse {
    pub contests: Vec<CfContest>,
    pub total: usize,
}

/// Contest page: the contest plus every secondary view that could be loaded
#[derive(Debug, Serialize)]
pub struct ContestDetailResponse {
    pub contest: CfContest,
    pub problems: Vec<ProblemDto>,
    pub standings: Vec<RanklistRow>,
    pub hacks: Vec<Hack>,
    pub rating_changes: Vec<RatingChange>,
}

/// Standings page response
#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub contest: CfContest,
    pub problems: Vec<ProblemDto>,
    pub rows: Vec<RanklistRow>,
}

/// Contest submissions response
#[derive(Debug, Serialize)]
pub struct ContestStatusResponse {
    pub submissions: Vec<CfSubmission>,
}
