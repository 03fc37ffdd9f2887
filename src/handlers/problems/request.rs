//! Problem request DTOs

use cfdesk_rules::{ProblemFilter, SortBy};
use serde::Deserialize;

/// List problems query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListProblemsQuery {
    /// Comma-separated tag list (OR semantics)
    pub tags: Option<String>,
    pub min_rating: Option<i32>,
    pub max_rating: Option<i32>,
    pub search: Option<String>,
    pub sort_by: Option<SortBy>,
    /// Reload the catalog from Codeforces instead of using the cached snapshot
    pub refresh: Option<bool>,
}

impl ListProblemsQuery {
    /// Build the filter applied to the catalog
    pub fn to_filter(&self) -> ProblemFilter {
        let tags = self
            .tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        ProblemFilter {
            tags,
            min_rating: self.min_rating,
            max_rating: self.max_rating,
            search: self.search.clone().unwrap_or_default(),
            sort_by: self.sort_by.unwrap_or_default(),
        }
    }
}

/// `problemset.recentStatus` query parameters
#[derive(Debug, Deserialize)]
pub struct RecentStatusQuery {
    pub count: Option<u32>,
    pub problemset_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_empty_filter() {
        assert!(ListProblemsQuery::default().to_filter().is_empty());
    }

    #[test]
    fn test_tags_are_split_and_trimmed() {
        let query = ListProblemsQuery {
            tags: Some("dp, graphs,,brute force ".to_string()),
            sort_by: Some(SortBy::RatingDesc),
            ..Default::default()
        };
        let filter = query.to_filter();

        assert_eq!(filter.tags.len(), 3);
        assert!(filter.tags.contains("brute force"));
        assert_eq!(filter.sort_by, SortBy::RatingDesc);
    }
}
