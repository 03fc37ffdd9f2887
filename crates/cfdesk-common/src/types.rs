//! Problem types shared by the filter engine and the service.

use serde::{Deserialize, Serialize};

/// Problem identity key, `"{contest_id}-{index}"` or just the index.
pub type ProblemId = String;

/// Codeforces contest identifier
pub type ContestId = i32;

/// Build the identity key for a problem.
///
/// Problems that belong to a contest are keyed as `"{contest_id}-{index}"`;
/// problems without a contest (rare acm.sgu-style entries) fall back to the bare index.
pub fn problem_id(contest_id: Option<ContestId>, index: &str) -> ProblemId {
    match contest_id {
        Some(contest_id) => format!("{}-{}", contest_id, index),
        None => index.to_string(),
    }
}

/// A single problem from the Codeforces problemset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: ProblemId,
    pub contest_id: Option<ContestId>,
    pub index: String,
    pub name: String,
    pub rating: Option<i32>,
    /// Tags in source display order
    #[serde(default)]
    pub tags: Vec<String>,
    pub solved_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit_millis: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_limit_mb: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_html: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<SampleTest>,
}

impl Problem {
    /// Create a problem, deriving its id from the contest id and index.
    pub fn new(
        contest_id: Option<ContestId>,
        index: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let index = index.into();
        Self {
            id: problem_id(contest_id, &index),
            contest_id,
            index,
            name: name.into(),
            rating: None,
            tags: Vec::new(),
            solved_count: None,
            time_limit_millis: None,
            memory_limit_mb: None,
            statement_html: None,
            samples: Vec::new(),
        }
    }

    pub fn with_rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_solved_count(mut self, solved_count: i64) -> Self {
        self.solved_count = Some(solved_count);
        self
    }

    /// Check whether the problem carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Codeforces URL of the problem statement
    pub fn url(&self) -> Option<String> {
        self.contest_id.map(|contest_id| {
            format!(
                "https://codeforces.com/problemset/problem/{}/{}",
                contest_id, self.index
            )
        })
    }
}

/// Sample input/output pair shown with a problem statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleTest {
    pub input: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}
