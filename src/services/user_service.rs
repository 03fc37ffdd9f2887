//! User service

use std::collections::HashMap;

use cfdesk_common::ContestId;
use tracing::debug;

use super::best_effort;
use crate::{
    codeforces::{BlogEntry, CfSubmission, CfUser, CodeforcesApi, UserRating},
    constants::{PROFILE_SUBMISSIONS_COUNT, TOP_VERDICTS, VERDICT_ACCEPTED, VERDICT_UNKNOWN},
    error::{AppError, AppResult},
    handlers::users::response::{
        CompareUsersResponse, SubmissionStats, UserProfileResponse, VerdictCount,
    },
    utils::validate_handle,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    pub async fn get_users(api: &dyn CodeforcesApi, handles: Vec<String>) -> AppResult<Vec<CfUser>> {
        api.user_info(handles).await
    }

    pub async fn rated_list(
        api: &dyn CodeforcesApi,
        active_only: bool,
        include_retired: bool,
        contest_id: Option<ContestId>,
    ) -> AppResult<Vec<CfUser>> {
        api.user_rated_list(active_only, include_retired, contest_id)
            .await
    }

    /// Fetch one user, failing with `NotFound` on an empty answer
    pub async fn get_user(api: &dyn CodeforcesApi, handle: &str) -> AppResult<CfUser> {
        validate_handle(handle)?;

        api.user_info(vec![handle.to_string()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", handle)))
    }

    /// Both users in one upstream call
    pub async fn compare(
        api: &dyn CodeforcesApi,
        first: &str,
        second: &str,
    ) -> AppResult<CompareUsersResponse> {
        validate_handle(first)?;
        validate_handle(second)?;

        let users = api
            .user_info(vec![first.to_string(), second.to_string()])
            .await?;

        let pick = |handle: &str| {
            users
                .iter()
                .find(|u| u.handle.eq_ignore_ascii_case(handle))
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("User {} not found", handle)))
        };

        Ok(CompareUsersResponse {
            first: pick(first)?,
            second: pick(second)?,
        })
    }

    /// Profile page: user info is required, the rest is best-effort.
    pub async fn get_profile(api: &dyn CodeforcesApi, handle: &str) -> AppResult<UserProfileResponse> {
        validate_handle(handle)?;

        let (users, rating_history, submissions, blog_entries) = futures::join!(
            api.user_info(vec![handle.to_string()]),
            api.user_rating(handle.to_string()),
            api.user_status(handle.to_string(), 1, PROFILE_SUBMISSIONS_COUNT),
            api.user_blog_entries(handle.to_string()),
        );

        let user = users?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", handle)))?;
        let rating_history = best_effort(rating_history, "user.rating");
        let recent_submissions = best_effort(submissions, "user.status");
        let blog_entries = best_effort(blog_entries, "user.blogEntries");

        let stats = submission_stats(&recent_submissions);
        debug!(
            handle,
            submissions = stats.total,
            accepted = stats.accepted,
            "Assembled user profile"
        );

        Ok(UserProfileResponse {
            user,
            rating_history,
            recent_submissions,
            blog_entries,
            stats,
        })
    }

    pub async fn get_rating(api: &dyn CodeforcesApi, handle: &str) -> AppResult<Vec<UserRating>> {
        validate_handle(handle)?;
        api.user_rating(handle.to_string()).await
    }

    pub async fn get_status(
        api: &dyn CodeforcesApi,
        handle: &str,
        from: u32,
        count: u32,
    ) -> AppResult<Vec<CfSubmission>> {
        validate_handle(handle)?;
        api.user_status(handle.to_string(), from, count).await
    }

    pub async fn get_blog_entries(api: &dyn CodeforcesApi, handle: &str) -> AppResult<Vec<BlogEntry>> {
        validate_handle(handle)?;
        api.user_blog_entries(handle.to_string()).await
    }
}

/// Totals, accuracy and the most frequent verdicts.
///
/// Verdicts with equal counts keep the order in which they were first seen.
pub fn submission_stats(submissions: &[CfSubmission]) -> SubmissionStats {
    let total = submissions.len();

    let mut order: Vec<VerdictCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for submission in submissions {
        let verdict = submission.verdict.as_deref().unwrap_or(VERDICT_UNKNOWN);
        match positions.get(verdict) {
            Some(&i) => order[i].count += 1,
            None => {
                positions.insert(verdict, order.len());
                order.push(VerdictCount {
                    verdict: verdict.to_string(),
                    count: 1,
                });
            }
        }
    }

    let accepted = positions
        .get(VERDICT_ACCEPTED)
        .map(|&i| order[i].count)
        .unwrap_or(0);

    let accuracy = if total == 0 {
        0.0
    } else {
        (accepted as f64 * 1000.0 / total as f64).round() / 10.0
    };

    order.sort_by(|a, b| b.count.cmp(&a.count));
    order.truncate(TOP_VERDICTS);

    SubmissionStats {
        total,
        accepted,
        accuracy,
        top_verdicts: order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeforces::{MockCodeforcesApi, ProblemDto};

    fn submission(id: i64, verdict: Option<&str>) -> CfSubmission {
        CfSubmission {
            id,
            contest_id: Some(4),
            creation_time_seconds: 1_700_000_000 + id,
            relative_time_seconds: 0,
            problem: ProblemDto {
                contest_id: Some(4),
                problemset_name: None,
                index: "A".to_string(),
                name: "Watermelon".to_string(),
                rating: Some(800),
                tags: Vec::new(),
            },
            programming_language: "GNU C++17".to_string(),
            verdict: verdict.map(str::to_string),
            time_consumed_millis: 15,
            memory_consumed_bytes: 0,
        }
    }

    fn user(handle: &str) -> CfUser {
        serde_json::from_value(serde_json::json!({ "handle": handle, "rating": 3500 })).unwrap()
    }

    #[test]
    fn test_stats_empty() {
        let stats = submission_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.accepted, 0);
        assert_eq!(stats.accuracy, 0.0);
        assert!(stats.top_verdicts.is_empty());
    }

    #[test]
    fn test_stats_counts_and_accuracy() {
        let submissions = vec![
            submission(1, Some("WRONG_ANSWER")),
            submission(2, Some("OK")),
            submission(3, None),
            submission(4, Some("OK")),
            submission(5, Some("TIME_LIMIT_EXCEEDED")),
            submission(6, Some("WRONG_ANSWER")),
        ];
        let stats = submission_stats(&submissions);

        assert_eq!(stats.total, 6);
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.accuracy, 33.3);

        let verdicts: Vec<(&str, usize)> = stats
            .top_verdicts
            .iter()
            .map(|v| (v.verdict.as_str(), v.count))
            .collect();
        assert_eq!(
            verdicts,
            vec![
                ("WRONG_ANSWER", 2),
                ("OK", 2),
                ("Unknown", 1),
                ("TIME_LIMIT_EXCEEDED", 1),
            ]
        );
    }

    #[test]
    fn test_stats_keeps_five_verdicts() {
        let verdicts = [
            "OK",
            "WRONG_ANSWER",
            "TIME_LIMIT_EXCEEDED",
            "MEMORY_LIMIT_EXCEEDED",
            "RUNTIME_ERROR",
            "COMPILATION_ERROR",
        ];
        let submissions: Vec<CfSubmission> = verdicts
            .iter()
            .enumerate()
            .map(|(i, v)| submission(i as i64, Some(v)))
            .collect();

        let stats = submission_stats(&submissions);
        assert_eq!(stats.top_verdicts.len(), 5);
        assert_eq!(stats.accuracy, 16.7);
    }

    #[tokio::test]
    async fn test_profile_tolerates_secondary_failures() {
        let mut api = MockCodeforcesApi::new();
        api.expect_user_info()
            .returning(|handles| Ok(handles.iter().map(|h| user(h)).collect()));
        api.expect_user_rating()
            .returning(|_| Err(AppError::UpstreamUnavailable("timeout".to_string())));
        api.expect_user_status()
            .withf(|_, from, count| *from == 1 && *count == 100)
            .returning(|_, _, _| Ok(vec![submission(1, Some("OK"))]));
        api.expect_user_blog_entries()
            .returning(|_| Err(AppError::Upstream("handle: Blog is empty".to_string())));

        let profile = UserService::get_profile(&api, "tourist").await.unwrap();
        assert_eq!(profile.user.handle, "tourist");
        assert!(profile.rating_history.is_empty());
        assert_eq!(profile.stats.accuracy, 100.0);
    }

    #[tokio::test]
    async fn test_profile_requires_user_info() {
        let mut api = MockCodeforcesApi::new();
        api.expect_user_info()
            .returning(|_| Err(AppError::Upstream("handles: User with handle nobody_x not found".to_string())));
        api.expect_user_rating().returning(|_| Ok(Vec::new()));
        api.expect_user_status().returning(|_, _, _| Ok(Vec::new()));
        api.expect_user_blog_entries().returning(|_| Ok(Vec::new()));

        let result = UserService::get_profile(&api, "nobody_x").await;
        assert!(matches!(result, Err(AppError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_invalid_handle_skips_upstream() {
        let api = MockCodeforcesApi::new();
        let result = UserService::get_rating(&api, "a b").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_compare_matches_case_insensitively() {
        let mut api = MockCodeforcesApi::new();
        api.expect_user_info()
            .returning(|_| Ok(vec![user("Petr"), user("tourist")]));

        let pair = UserService::compare(&api, "tourist", "petr").await.unwrap();
        assert_eq!(pair.first.handle, "tourist");
        assert_eq!(pair.second.handle, "Petr");
    }
}
