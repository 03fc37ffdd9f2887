//! Blog response DTOs

use serde::Serialize;

use crate::codeforces::{BlogEntry, Comment, RecentAction};

#[derive(Debug, Serialize)]
pub struct RecentActionsResponse {
    pub actions: Vec<RecentAction>,
}

/// Blog entry page
#[derive(Debug, Serialize)]
pub struct BlogEntryResponse {
    pub entry: BlogEntry,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}
