//! Contest service

use cfdesk_common::ContestId;
use tracing::debug;

use super::best_effort;
use crate::{
    codeforces::{CfContest, CfSubmission, CodeforcesApi, Hack, RatingChange, StandingsQuery},
    constants::DETAIL_STANDINGS_COUNT,
    error::{AppError, AppResult},
    handlers::contests::response::{ContestDetailResponse, StandingsResponse},
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// List contests (regular rounds or gym)
    pub async fn list_contests(api: &dyn CodeforcesApi, gym: bool) -> AppResult<Vec<CfContest>> {
        api.contest_list(gym).await
    }

    /// Contest page.
    ///
    /// All four requests run concurrently and each is optional; the contest
    /// itself comes from the list, else from the standings header.
    pub async fn get_contest(
        api: &dyn CodeforcesApi,
        contest_id: ContestId,
    ) -> AppResult<ContestDetailResponse> {
        let standings_query = StandingsQuery {
            count: DETAIL_STANDINGS_COUNT,
            ..Default::default()
        };

        let (contests, standings, hacks, rating_changes) = futures::join!(
            api.contest_list(false),
            api.contest_standings(contest_id, standings_query),
            api.contest_hacks(contest_id),
            api.contest_rating_changes(contest_id),
        );

        let contests = best_effort(contests, "contest.list");
        let standings = best_effort(standings.map(Some), "contest.standings");
        let hacks = best_effort(hacks, "contest.hacks");
        let rating_changes = best_effort(rating_changes, "contest.ratingChanges");

        let listed = contests.into_iter().find(|c| c.id == contest_id);
        let (header, problems, rows) = match standings {
            Some(s) => (Some(s.contest), s.problems, s.rows),
            None => (None, Vec::new(), Vec::new()),
        };

        let contest = listed
            .or(header)
            .ok_or_else(|| AppError::NotFound(format!("Contest {} not found", contest_id)))?;

        debug!(
            contest_id,
            rows = rows.len(),
            hacks = hacks.len(),
            rating_changes = rating_changes.len(),
            "Assembled contest detail"
        );

        Ok(ContestDetailResponse {
            contest,
            problems,
            standings: rows,
            hacks,
            rating_changes,
        })
    }

    pub async fn get_standings(
        api: &dyn CodeforcesApi,
        contest_id: ContestId,
        query: StandingsQuery,
    ) -> AppResult<StandingsResponse> {
        let standings = api.contest_standings(contest_id, query).await?;

        Ok(StandingsResponse {
            contest: standings.contest,
            problems: standings.problems,
            rows: standings.rows,
        })
    }

    pub async fn get_hacks(api: &dyn CodeforcesApi, contest_id: ContestId) -> AppResult<Vec<Hack>> {
        api.contest_hacks(contest_id).await
    }

    pub async fn get_rating_changes(
        api: &dyn CodeforcesApi,
        contest_id: ContestId,
    ) -> AppResult<Vec<RatingChange>> {
        api.contest_rating_changes(contest_id).await
    }

    pub async fn get_status(
        api: &dyn CodeforcesApi,
        contest_id: ContestId,
        handle: Option<String>,
        from: u32,
        count: u32,
    ) -> AppResult<Vec<CfSubmission>> {
        api.contest_status(contest_id, handle, from, count).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeforces::{ContestStandings, MockCodeforcesApi};
    use mockall::predicate::eq;

    fn contest(id: ContestId, name: &str) -> CfContest {
        CfContest {
            id,
            name: name.to_string(),
            kind: "CF".to_string(),
            phase: "FINISHED".to_string(),
            frozen: false,
            duration_seconds: 7200,
            start_time_seconds: Some(1_700_000_000),
            relative_time_seconds: None,
        }
    }

    fn standings(id: ContestId) -> ContestStandings {
        ContestStandings {
            contest: contest(id, "From standings"),
            problems: Vec::new(),
            rows: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_detail_prefers_contest_list() {
        let mut api = MockCodeforcesApi::new();
        api.expect_contest_list()
            .with(eq(false))
            .returning(|_| Ok(vec![contest(1, "Other"), contest(2000, "From list")]));
        api.expect_contest_standings()
            .withf(|id, query| *id == 2000 && query.from == 1 && query.count == 50)
            .returning(|id, _| Ok(standings(id)));
        api.expect_contest_hacks()
            .returning(|_| Err(AppError::Upstream("Hacks are not available".to_string())));
        api.expect_contest_rating_changes()
            .returning(|_| Ok(Vec::new()));

        let detail = ContestService::get_contest(&api, 2000).await.unwrap();
        assert_eq!(detail.contest.name, "From list");
        assert!(detail.hacks.is_empty());
    }

    #[tokio::test]
    async fn test_detail_falls_back_to_standings_header() {
        let mut api = MockCodeforcesApi::new();
        api.expect_contest_list()
            .returning(|_| Err(AppError::UpstreamUnavailable("timeout".to_string())));
        api.expect_contest_standings()
            .returning(|id, _| Ok(standings(id)));
        api.expect_contest_hacks().returning(|_| Ok(Vec::new()));
        api.expect_contest_rating_changes()
            .returning(|_| Ok(Vec::new()));

        let detail = ContestService::get_contest(&api, 2000).await.unwrap();
        assert_eq!(detail.contest.name, "From standings");
    }

    #[tokio::test]
    async fn test_detail_not_found_without_any_source() {
        let mut api = MockCodeforcesApi::new();
        api.expect_contest_list().returning(|_| Ok(Vec::new()));
        api.expect_contest_standings()
            .returning(|id, _| Err(AppError::Upstream(format!("contestId: Contest with id {} not found", id))));
        api.expect_contest_hacks().returning(|_| Ok(Vec::new()));
        api.expect_contest_rating_changes()
            .returning(|_| Ok(Vec::new()));

        let result = ContestService::get_contest(&api, 999_999).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_standings_passthrough_error() {
        let mut api = MockCodeforcesApi::new();
        api.expect_contest_standings()
            .returning(|_, _| Err(AppError::Upstream("contestId: Contest not started".to_string())));

        let result = ContestService::get_standings(&api, 1, StandingsQuery::default()).await;
        assert!(matches!(result, Err(AppError::Upstream(_))));
    }
}
