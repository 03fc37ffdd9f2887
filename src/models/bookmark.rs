//! Bookmark model

use cfdesk_common::Problem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Problem saved by the user, keyed by problem id
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct BookmarkedProblem {
    pub problem_id: String,
    pub name: String,
    pub contest_id: Option<i32>,
    #[sqlx(rename = "problem_index")]
    pub index: String,
    pub rating: Option<i32>,
    pub tags: Vec<String>,
    pub bookmarked_at: DateTime<Utc>,
}

impl BookmarkedProblem {
    /// Snapshot a problem as a bookmark taken now
    pub fn from_problem(problem: &Problem) -> Self {
        Self {
            problem_id: problem.id.clone(),
            name: problem.name.clone(),
            contest_id: problem.contest_id,
            index: problem.index.clone(),
            rating: problem.rating,
            tags: problem.tags.clone(),
            bookmarked_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmark_snapshots_problem() {
        let problem = Problem::new(Some(1850), "G2", "Hard version")
            .with_rating(2400)
            .with_tags(["dp", "graphs"]);

        let bookmark = BookmarkedProblem::from_problem(&problem);
        assert_eq!(bookmark.problem_id, "1850-G2");
        assert_eq!(bookmark.index, "G2");
        assert_eq!(bookmark.contest_id, Some(1850));
        assert_eq!(bookmark.rating, Some(2400));
        assert_eq!(bookmark.tags, problem.tags);
    }
}
