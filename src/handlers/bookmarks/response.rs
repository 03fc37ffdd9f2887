//! Bookmark response DTOs

use serde::Serialize;

use crate::models::BookmarkedProblem;

#[derive(Debug, Serialize)]
pub struct BookmarksListResponse {
    pub bookmarks: Vec<BookmarkedProblem>,
    pub total: usize,
}

/// Whether a problem is bookmarked
#[derive(Debug, Serialize)]
pub struct BookmarkStatusResponse {
    pub problem_id: String,
    pub bookmarked: bool,
}
