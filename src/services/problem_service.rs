//! Problem service

use std::sync::Arc;

use cfdesk_common::Problem;
use cfdesk_rules::{ProblemFilter, filter_and_sort};
use tracing::{debug, info};

use crate::{
    cache::ProblemCache,
    codeforces::{CfSubmission, CodeforcesApi},
    error::{AppError, AppResult},
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// Return the problem catalog.
    ///
    /// Uses the cached snapshot unless it is empty or `refresh` is set. The
    /// full catalog is always fetched: the upstream tag query matches all tags,
    /// while the filter keeps problems matching any of them.
    pub async fn load_catalog(
        api: &dyn CodeforcesApi,
        cache: &ProblemCache,
        refresh: bool,
    ) -> AppResult<Arc<Vec<Problem>>> {
        if !refresh {
            if let Some(catalog) = cache.catalog() {
                debug!(problems = catalog.len(), "Serving cached problemset");
                return Ok(catalog);
            }
        }

        let problems = api.problemset().await?.into_problems();
        info!(problems = problems.len(), refresh, "Loaded problemset from Codeforces");

        Ok(cache.store_catalog(problems))
    }

    /// Load the catalog and apply the filter.
    ///
    /// Returns the kept problems and the catalog size before filtering.
    pub async fn list_problems(
        api: &dyn CodeforcesApi,
        cache: &ProblemCache,
        filter: &ProblemFilter,
        refresh: bool,
    ) -> AppResult<(Vec<Problem>, usize)> {
        let catalog = Self::load_catalog(api, cache, refresh).await?;
        let problems = filter_and_sort(&catalog, filter);

        debug!(
            kept = problems.len(),
            catalog = catalog.len(),
            sort_by = %filter.sort_by,
            "Applied problem filter"
        );

        Ok((problems, catalog.len()))
    }

    /// Look up a problem seen in a previous catalog load
    pub fn get_problem(cache: &ProblemCache, problem_id: &str) -> AppResult<Problem> {
        cache
            .get(problem_id)
            .ok_or_else(|| AppError::NotFound(format!("Problem {} not found", problem_id)))
    }

    /// Latest problemset submissions
    pub async fn recent_status(
        api: &dyn CodeforcesApi,
        count: u32,
        problemset_name: Option<String>,
    ) -> AppResult<Vec<CfSubmission>> {
        api.recent_status(count, problemset_name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeforces::{MockCodeforcesApi, ProblemDto, ProblemStatisticsDto, ProblemsetResult};
    use cfdesk_rules::SortBy;

    fn dto(contest_id: i32, index: &str, rating: Option<i32>, tags: &[&str]) -> ProblemDto {
        ProblemDto {
            contest_id: Some(contest_id),
            problemset_name: None,
            index: index.to_string(),
            name: format!("Problem {}{}", contest_id, index),
            rating,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn problemset() -> ProblemsetResult {
        ProblemsetResult {
            problems: vec![
                dto(4, "A", Some(800), &["math"]),
                dto(4, "B", Some(1900), &["dp", "graphs"]),
                dto(4, "C", None, &["geometry"]),
            ],
            statistics: vec![ProblemStatisticsDto {
                contest_id: Some(4),
                index: "A".to_string(),
                solved_count: 100,
            }],
        }
    }

    #[tokio::test]
    async fn test_catalog_is_fetched_once() {
        let mut api = MockCodeforcesApi::new();
        api.expect_problemset()
            .times(1)
            .returning(|| Ok(problemset()));
        let cache = ProblemCache::new();

        let first = ProblemService::load_catalog(&api, &cache, false).await.unwrap();
        let second = ProblemService::load_catalog(&api, &cache, false).await.unwrap();

        assert_eq!(first.len(), 3);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.get("4-A").and_then(|p| p.solved_count), Some(100));
    }

    #[tokio::test]
    async fn test_empty_problemset_is_not_refetched() {
        let mut api = MockCodeforcesApi::new();
        api.expect_problemset().times(1).returning(|| {
            Ok(ProblemsetResult {
                problems: Vec::new(),
                statistics: Vec::new(),
            })
        });
        let cache = ProblemCache::new();

        let first = ProblemService::load_catalog(&api, &cache, false).await.unwrap();
        let second = ProblemService::load_catalog(&api, &cache, false).await.unwrap();

        assert!(first.is_empty());
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_refresh_refetches() {
        let mut api = MockCodeforcesApi::new();
        api.expect_problemset()
            .times(2)
            .returning(|| Ok(problemset()));
        let cache = ProblemCache::new();

        ProblemService::load_catalog(&api, &cache, false).await.unwrap();
        ProblemService::load_catalog(&api, &cache, true).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_problems_applies_filter() {
        let mut api = MockCodeforcesApi::new();
        api.expect_problemset().returning(|| Ok(problemset()));
        let cache = ProblemCache::new();

        let filter = ProblemFilter {
            min_rating: Some(1000),
            sort_by: SortBy::RatingDesc,
            ..Default::default()
        };
        let (problems, catalog_size) =
            ProblemService::list_problems(&api, &cache, &filter, false)
                .await
                .unwrap();

        let ids: Vec<&str> = problems.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["4-B", "4-C"]);
        assert_eq!(catalog_size, 3);
    }

    #[tokio::test]
    async fn test_upstream_error_propagates() {
        let mut api = MockCodeforcesApi::new();
        api.expect_problemset()
            .returning(|| Err(AppError::Upstream("Call limit exceeded".to_string())));
        let cache = ProblemCache::new();

        let result = ProblemService::load_catalog(&api, &cache, false).await;
        assert!(matches!(result, Err(AppError::Upstream(_))));
        assert!(cache.catalog().is_none());
    }

    #[test]
    fn test_get_problem_not_found() {
        let cache = ProblemCache::new();
        assert!(matches!(
            ProblemService::get_problem(&cache, "4-A"),
            Err(AppError::NotFound(_))
        ));

        cache.insert(Problem::new(Some(4), "A", "Watermelon"));
        assert_eq!(ProblemService::get_problem(&cache, "4-A").unwrap().name, "Watermelon");
    }
}
