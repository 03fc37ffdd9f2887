//! Problem filter/sort engine.
//!
//! A [`ProblemFilter`] is a transient value built from client input. Applying it
//! keeps the problems that satisfy every predicate category (rating range, tags,
//! text) and then reorders them with a stable sort on the selected key.

use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use cfdesk_common::Problem;
use serde::{Deserialize, Serialize};

use crate::operators::Spec;
use crate::rules::{HasTag, MatchesText, RatingAtLeast, RatingAtMost};
use crate::specification::{AlwaysTrue, AnyOf, BoxedSpec, Specification};

/// Tags offered as quick filters by the client
pub const POPULAR_TAGS: &[&str] = &[
    "dp",
    "greedy",
    "math",
    "implementation",
    "brute force",
    "data structures",
    "binary search",
    "graphs",
    "constructive algorithms",
    "sortings",
    "strings",
    "number theory",
    "geometry",
    "trees",
    "dfs and similar",
    "two pointers",
];

/// Lowest rating the client's range slider offers
pub const RATING_FLOOR: i32 = 800;

/// Highest rating the client's range slider offers
pub const RATING_CEILING: i32 = 3500;

/// Sort key applied after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Keep the source order
    #[default]
    Default,
    RatingAsc,
    RatingDesc,
    SolvedAsc,
    SolvedDesc,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::RatingAsc => write!(f, "rating_asc"),
            Self::RatingDesc => write!(f, "rating_desc"),
            Self::SolvedAsc => write!(f, "solved_asc"),
            Self::SolvedDesc => write!(f, "solved_desc"),
        }
    }
}

/// Filter specification for a problem list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemFilter {
    /// Keep problems having at least one of these tags; empty keeps all
    pub tags: BTreeSet<String>,
    pub min_rating: Option<i32>,
    pub max_rating: Option<i32>,
    /// Case-insensitive substring of the name or id; blank matches all
    pub search: String,
    pub sort_by: SortBy,
}

impl ProblemFilter {
    /// True when the filter neither drops nor reorders anything
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
            && self.min_rating.is_none()
            && self.max_rating.is_none()
            && self.search.trim().is_empty()
            && self.sort_by == SortBy::Default
    }

    /// Build the predicate a problem must satisfy to stay in the result.
    pub fn specification(&self) -> impl Specification<Problem> + use<> {
        Spec(RatingAtLeast::new(self.min_rating))
            & Spec(RatingAtMost::new(self.max_rating))
            & Spec(self.tag_specification())
            & Spec(MatchesText::new(&self.search))
    }

    fn tag_specification(&self) -> BoxedSpec<Problem> {
        if self.tags.is_empty() {
            return Arc::new(AlwaysTrue);
        }

        let any_tag: Vec<BoxedSpec<Problem>> = self
            .tags
            .iter()
            .map(|tag| Spec(HasTag::new(tag.as_str())).boxed())
            .collect();

        Arc::new(AnyOf::new(any_tag))
    }
}

/// Apply a filter to a problem list.
///
/// Keeps the problems satisfying the rating range, the tag set and the text search,
/// then applies `filter.sort_by` with a stable sort. Missing ratings and solved
/// counts sort as `0`.
pub fn filter_and_sort(problems: &[Problem], filter: &ProblemFilter) -> Vec<Problem> {
    let spec = filter.specification();

    let mut kept: Vec<Problem> = problems
        .iter()
        .filter(|problem| spec.is_satisfied_by(problem))
        .cloned()
        .collect();

    sort_problems(&mut kept, filter.sort_by);
    kept
}

/// Stable in-place sort on the given key.
pub fn sort_problems(problems: &mut [Problem], sort_by: SortBy) {
    match sort_by {
        SortBy::Default => {}
        SortBy::RatingAsc => problems.sort_by_key(rating_key),
        SortBy::RatingDesc => problems.sort_by_key(|p| Reverse(rating_key(p))),
        SortBy::SolvedAsc => problems.sort_by_key(solved_key),
        SortBy::SolvedDesc => problems.sort_by_key(|p| Reverse(solved_key(p))),
    }
}

fn rating_key(problem: &Problem) -> i32 {
    problem.rating.unwrap_or(0)
}

fn solved_key(problem: &Problem) -> i64 {
    problem.solved_count.unwrap_or(0)
}
