//! Codeforces API models
//!
//! Serde mirrors of the public API objects. Field names follow the API
//! (camelCase on the wire); unknown fields are ignored.

use std::collections::{HashMap, HashSet};

use cfdesk_common::{ContestId, Problem, problem_id};
use serde::{Deserialize, Serialize};

use crate::constants::CODEFORCES_STATUS_OK;
use crate::error::{AppError, AppResult};

/// Envelope wrapping every API response
#[derive(Debug, Clone, Deserialize)]
pub struct CfApiResponse<T> {
    pub status: String,
    pub comment: Option<String>,
    pub result: Option<T>,
}

impl<T> CfApiResponse<T> {
    /// Unwrap the envelope; anything but `OK` with a result is an upstream error.
    pub fn into_result(self) -> AppResult<T> {
        let Self {
            status,
            comment,
            result,
        } = self;

        match result {
            Some(result) if status == CODEFORCES_STATUS_OK => Ok(result),
            _ => Err(AppError::Upstream(
                comment.unwrap_or_else(|| "Unknown error".to_string()),
            )),
        }
    }
}

// =============================================================================
// Problemset
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDto {
    pub contest_id: Option<ContestId>,
    #[serde(default)]
    pub problemset_name: Option<String>,
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemStatisticsDto {
    pub contest_id: Option<ContestId>,
    pub index: String,
    pub solved_count: i64,
}

/// Result of `problemset.problems`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProblemsetResult {
    #[serde(default)]
    pub problems: Vec<ProblemDto>,
    #[serde(default, rename = "problemStatistics")]
    pub statistics: Vec<ProblemStatisticsDto>,
}

impl ProblemsetResult {
    /// Join problems with their solve statistics.
    ///
    /// Statistics are matched on `(contest_id, index)`. Upstream order is kept and
    /// later duplicates of an id are dropped.
    pub fn into_problems(self) -> Vec<Problem> {
        let solved: HashMap<(Option<ContestId>, String), i64> = self
            .statistics
            .into_iter()
            .map(|s| ((s.contest_id, s.index), s.solved_count))
            .collect();

        let mut seen = HashSet::new();

        self.problems
            .into_iter()
            .filter(|dto| seen.insert(problem_id(dto.contest_id, &dto.index)))
            .map(|dto| {
                let solved_count = solved.get(&(dto.contest_id, dto.index.clone())).copied();
                let mut problem = Problem::new(dto.contest_id, dto.index, dto.name);
                problem.rating = dto.rating;
                problem.tags = dto.tags;
                problem.solved_count = solved_count;
                problem
            })
            .collect()
    }
}

// =============================================================================
// Contests
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfContest {
    pub id: ContestId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub phase: String,
    pub frozen: bool,
    pub duration_seconds: i64,
    #[serde(default)]
    pub start_time_seconds: Option<i64>,
    #[serde(default)]
    pub relative_time_seconds: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub handle: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    #[serde(default)]
    pub contest_id: Option<ContestId>,
    pub members: Vec<Member>,
    pub participant_type: String,
    #[serde(default)]
    pub team_id: Option<i32>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub ghost: bool,
    #[serde(default)]
    pub room: Option<i32>,
    #[serde(default)]
    pub start_time_seconds: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemResult {
    pub points: f64,
    #[serde(default)]
    pub penalty: Option<i32>,
    pub rejected_attempt_count: i32,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub best_submission_time_seconds: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RanklistRow {
    pub party: Party,
    pub rank: i32,
    pub points: f64,
    pub penalty: i32,
    pub successful_hack_count: i32,
    pub unsuccessful_hack_count: i32,
    pub problem_results: Vec<ProblemResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestStandings {
    pub contest: CfContest,
    pub problems: Vec<ProblemDto>,
    pub rows: Vec<RanklistRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeProtocol {
    pub manual: String,
    pub protocol: String,
    pub verdict: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hack {
    pub id: i64,
    pub creation_time_seconds: i64,
    pub hacker: Party,
    pub defender: Party,
    #[serde(default)]
    pub verdict: Option<String>,
    pub problem: ProblemDto,
    #[serde(default)]
    pub test: Option<String>,
    #[serde(default)]
    pub judge_protocol: Option<JudgeProtocol>,
}

/// Entry of `contest.ratingChanges` and `user.rating` (same shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingChange {
    pub contest_id: ContestId,
    pub contest_name: String,
    pub handle: String,
    pub rank: i32,
    pub rating_update_time_seconds: i64,
    pub old_rating: i32,
    pub new_rating: i32,
}

/// Rating history entry of a single user
pub type UserRating = RatingChange;

// =============================================================================
// Users and submissions
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfUser {
    pub handle: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub max_rating: Option<i32>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub max_rank: Option<String>,
    #[serde(default)]
    pub contribution: Option<i32>,
    #[serde(default)]
    pub friend_of_count: Option<i32>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub title_photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfSubmission {
    pub id: i64,
    #[serde(default)]
    pub contest_id: Option<ContestId>,
    pub creation_time_seconds: i64,
    #[serde(default)]
    pub relative_time_seconds: i64,
    pub problem: ProblemDto,
    pub programming_language: String,
    /// Absent while the submission is still being judged
    #[serde(default)]
    pub verdict: Option<String>,
    #[serde(default)]
    pub time_consumed_millis: i64,
    #[serde(default)]
    pub memory_consumed_bytes: i64,
}

// =============================================================================
// Blogs
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogEntry {
    pub id: i64,
    #[serde(default)]
    pub original_locale: Option<String>,
    pub creation_time_seconds: i64,
    pub author_handle: String,
    pub title: String,
    /// Only present when a single entry is viewed
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub modification_time_seconds: Option<i64>,
    #[serde(default)]
    pub allow_view_history: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub creation_time_seconds: i64,
    pub commentator_handle: String,
    #[serde(default)]
    pub locale: Option<String>,
    pub text: String,
    #[serde(default)]
    pub parent_comment_id: Option<i64>,
    #[serde(default)]
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentAction {
    pub time_seconds: i64,
    #[serde(default)]
    pub blog_entry: Option<BlogEntry>,
    #[serde(default)]
    pub comment: Option<Comment>,
}
