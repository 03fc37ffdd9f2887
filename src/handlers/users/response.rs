//! User response DTOs

use serde::Serialize;

use crate::codeforces::{BlogEntry, CfSubmission, CfUser, UserRating};

/// Users list response
#[derive(Debug, Serialize)]
pub struct UsersListResponse {
    pub users: Vec<CfUser>,
    pub total: usize,
}

/// Two users side by side
#[derive(Debug, Serialize)]
pub struct CompareUsersResponse {
    pub first: CfUser,
    pub second: CfUser,
}

/// Number of submissions with one verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerdictCount {
    pub verdict: String,
    pub count: usize,
}

/// Aggregates over the submissions shown on a profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionStats {
    pub total: usize,
    pub accepted: usize,
    /// Percentage of accepted submissions, one decimal
    pub accuracy: f64,
    pub top_verdicts: Vec<VerdictCount>,
}

/// User profile page
#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    pub user: CfUser,
    pub rating_history: Vec<UserRating>,
    pub recent_submissions: Vec<CfSubmission>,
    pub blog_entries: Vec<BlogEntry>,
    pub stats: SubmissionStats,
}

/// Submissions list response
#[derive(Debug, Serialize)]
pub struct UserStatusResponse {
    pub submissions: Vec<CfSubmission>,
}
