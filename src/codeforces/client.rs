//! Codeforces API client

use std::time::{Duration, Instant};

use async_trait::async_trait;
use cfdesk_common::ContestId;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::models::{
    BlogEntry, CfApiResponse, CfContest, CfSubmission, CfUser, Comment, ContestStandings, Hack,
    ProblemsetResult, RatingChange, RecentAction, UserRating,
};
use crate::{
    config::CodeforcesConfig,
    constants::DEFAULT_STANDINGS_COUNT,
    error::{AppError, AppResult},
};

/// Options of `contest.standings`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsQuery {
    /// 1-based index of the first row
    pub from: u32,
    pub count: u32,
    pub handles: Vec<String>,
    pub room: Option<i32>,
    pub show_unofficial: bool,
}

impl Default for StandingsQuery {
    fn default() -> Self {
        Self {
            from: 1,
            count: DEFAULT_STANDINGS_COUNT,
            handles: Vec::new(),
            room: None,
            show_unofficial: false,
        }
    }
}

/// Read-only view of the public Codeforces API.
///
/// Every method unwraps the response envelope: a non-`OK` status becomes
/// [`AppError::Upstream`], transport and decoding failures become
/// [`AppError::UpstreamUnavailable`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeforcesApi: Send + Sync {
    /// `problemset.problems` (full catalog, no tag filter)
    async fn problemset(&self) -> AppResult<ProblemsetResult>;

    async fn recent_status(
        &self,
        count: u32,
        problemset_name: Option<String>,
    ) -> AppResult<Vec<CfSubmission>>;

    async fn contest_list(&self, gym: bool) -> AppResult<Vec<CfContest>>;

    async fn contest_standings(
        &self,
        contest_id: ContestId,
        query: StandingsQuery,
    ) -> AppResult<ContestStandings>;

    async fn contest_hacks(&self, contest_id: ContestId) -> AppResult<Vec<Hack>>;

    async fn contest_rating_changes(&self, contest_id: ContestId) -> AppResult<Vec<RatingChange>>;

    async fn contest_status(
        &self,
        contest_id: ContestId,
        handle: Option<String>,
        from: u32,
        count: u32,
    ) -> AppResult<Vec<CfSubmission>>;

    async fn user_info(&self, handles: Vec<String>) -> AppResult<Vec<CfUser>>;

    async fn user_rated_list(
        &self,
        active_only: bool,
        include_retired: bool,
        contest_id: Option<ContestId>,
    ) -> AppResult<Vec<CfUser>>;

    async fn user_rating(&self, handle: String) -> AppResult<Vec<UserRating>>;

    async fn user_status(&self, handle: String, from: u32, count: u32)
    -> AppResult<Vec<CfSubmission>>;

    async fn user_blog_entries(&self, handle: String) -> AppResult<Vec<BlogEntry>>;

    async fn blog_entry(&self, blog_entry_id: i64) -> AppResult<BlogEntry>;

    async fn blog_entry_comments(&self, blog_entry_id: i64) -> AppResult<Vec<Comment>>;

    async fn recent_actions(&self, max_count: u32) -> AppResult<Vec<RecentAction>>;
}

/// HTTP implementation backed by `reqwest`
#[derive(Debug, Clone)]
pub struct CodeforcesClient {
    http: reqwest::Client,
    base_url: String,
}

type Query = Vec<(&'static str, String)>;

impl CodeforcesClient {
    pub fn new(config: &CodeforcesConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("cfdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_url.clone(),
        })
    }

    /// Full URL of an API method
    pub fn method_url(&self, method: &str) -> String {
        format!("{}{}", self.base_url, method)
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, query: Query) -> AppResult<T> {
        let started = Instant::now();

        // Failed calls still carry a JSON envelope, so the HTTP status is not checked
        let response = self
            .http
            .get(self.method_url(method))
            .query(&query)
            .send()
            .await?;
        let http_status = response.status();
        let envelope: CfApiResponse<T> = response.json().await?;

        debug!(
            method,
            http_status = http_status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Codeforces API call"
        );

        envelope.into_result().inspect_err(|e| {
            warn!(method, error = %e, "Codeforces API returned an error");
        })
    }
}

#[async_trait]
impl CodeforcesApi for CodeforcesClient {
    async fn problemset(&self) -> AppResult<ProblemsetResult> {
        self.call("problemset.problems", Vec::new()).await
    }

    async fn recent_status(
        &self,
        count: u32,
        problemset_name: Option<String>,
    ) -> AppResult<Vec<CfSubmission>> {
        let mut query: Query = vec![("count", count.to_string())];
        if let Some(name) = problemset_name {
            query.push(("problemsetName", name));
        }
        self.call("problemset.recentStatus", query).await
    }

    async fn contest_list(&self, gym: bool) -> AppResult<Vec<CfContest>> {
        self.call("contest.list", vec![("gym", gym.to_string())])
            .await
    }

    async fn contest_standings(
        &self,
        contest_id: ContestId,
        query: StandingsQuery,
    ) -> AppResult<ContestStandings> {
        let mut params: Query = vec![
            ("contestId", contest_id.to_string()),
            ("from", query.from.to_string()),
            ("count", query.count.to_string()),
            ("showUnofficial", query.show_unofficial.to_string()),
        ];
        if !query.handles.is_empty() {
            params.push(("handles", query.handles.join(";")));
        }
        if let Some(room) = query.room {
            params.push(("room", room.to_string()));
        }
        self.call("contest.standings", params).await
    }

    async fn contest_hacks(&self, contest_id: ContestId) -> AppResult<Vec<Hack>> {
        self.call("contest.hacks", vec![("contestId", contest_id.to_string())])
            .await
    }

    async fn contest_rating_changes(&self, contest_id: ContestId) -> AppResult<Vec<RatingChange>> {
        self.call(
            "contest.ratingChanges",
            vec![("contestId", contest_id.to_string())],
        )
        .await
    }

    async fn contest_status(
        &self,
        contest_id: ContestId,
        handle: Option<String>,
        from: u32,
        count: u32,
    ) -> AppResult<Vec<CfSubmission>> {
        let mut query: Query = vec![
            ("contestId", contest_id.to_string()),
            ("from", from.to_string()),
            ("count", count.to_string()),
        ];
        if let Some(handle) = handle {
            query.push(("handle", handle));
        }
        self.call("contest.status", query).await
    }

    async fn user_info(&self, handles: Vec<String>) -> AppResult<Vec<CfUser>> {
        self.call("user.info", vec![("handles", handles.join(";"))])
            .await
    }

    async fn user_rated_list(
        &self,
        active_only: bool,
        include_retired: bool,
        contest_id: Option<ContestId>,
    ) -> AppResult<Vec<CfUser>> {
        let mut query: Query = vec![
            ("activeOnly", active_only.to_string()),
            ("includeRetired", include_retired.to_string()),
        ];
        if let Some(contest_id) = contest_id {
            query.push(("contestId", contest_id.to_string()));
        }
        self.call("user.ratedList", query).await
    }

    async fn user_rating(&self, handle: String) -> AppResult<Vec<UserRating>> {
        self.call("user.rating", vec![("handle", handle)]).await
    }

    async fn user_status(
        &self,
        handle: String,
        from: u32,
        count: u32,
    ) -> AppResult<Vec<CfSubmission>> {
        self.call(
            "user.status",
            vec![
                ("handle", handle),
                ("from", from.to_string()),
                ("count", count.to_string()),
            ],
        )
        .await
    }

    async fn user_blog_entries(&self, handle: String) -> AppResult<Vec<BlogEntry>> {
        self.call("user.blogEntries", vec![("handle", handle)]).await
    }

    async fn blog_entry(&self, blog_entry_id: i64) -> AppResult<BlogEntry> {
        self.call(
            "blogEntry.view",
            vec![("blogEntryId", blog_entry_id.to_string())],
        )
        .await
    }

    async fn blog_entry_comments(&self, blog_entry_id: i64) -> AppResult<Vec<Comment>> {
        self.call(
            "blogEntry.comments",
            vec![("blogEntryId", blog_entry_id.to_string())],
        )
        .await
    }

    async fn recent_actions(&self, max_count: u32) -> AppResult<Vec<RecentAction>> {
        self.call("recentActions", vec![("maxCount", max_count.to_string())])
            .await
    }
}
