//! Blog service

use super::best_effort;
use crate::{
    codeforces::{CodeforcesApi, Comment, RecentAction},
    error::AppResult,
    handlers::blogs::response::BlogEntryResponse,
};

/// Blog service for business logic
pub struct BlogService;

impl BlogService {
    pub async fn recent_actions(
        api: &dyn CodeforcesApi,
        max_count: u32,
    ) -> AppResult<Vec<RecentAction>> {
        api.recent_actions(max_count).await
    }

    /// Entry with its comments; a failed comments request leaves them empty
    pub async fn get_entry(api: &dyn CodeforcesApi, blog_entry_id: i64) -> AppResult<BlogEntryResponse> {
        let (entry, comments) = futures::join!(
            api.blog_entry(blog_entry_id),
            api.blog_entry_comments(blog_entry_id),
        );

        Ok(BlogEntryResponse {
            entry: entry?,
            comments: best_effort(comments, "blogEntry.comments"),
        })
    }

    pub async fn get_comments(api: &dyn CodeforcesApi, blog_entry_id: i64) -> AppResult<Vec<Comment>> {
        api.blog_entry_comments(blog_entry_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeforces::{BlogEntry, MockCodeforcesApi};
    use crate::error::AppError;

    fn entry(id: i64) -> BlogEntry {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "creationTimeSeconds": 1_700_000_000,
            "authorHandle": "MikeMirzayanov",
            "title": "Codeforces: Results of 2023",
            "content": "<p>Hello</p>",
            "rating": 512
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_entry_with_failed_comments() {
        let mut api = MockCodeforcesApi::new();
        api.expect_blog_entry().returning(|id| Ok(entry(id)));
        api.expect_blog_entry_comments()
            .returning(|_| Err(AppError::UpstreamUnavailable("connection reset".to_string())));

        let response = BlogService::get_entry(&api, 123_456).await.unwrap();
        assert_eq!(response.entry.id, 123_456);
        assert!(response.comments.is_empty());
    }

    #[tokio::test]
    async fn test_entry_failure_propagates() {
        let mut api = MockCodeforcesApi::new();
        api.expect_blog_entry()
            .returning(|_| Err(AppError::Upstream("blogEntryId: Blog entry not found".to_string())));
        api.expect_blog_entry_comments().returning(|_| Ok(Vec::new()));

        let result = BlogService::get_entry(&api, 1).await;
        assert!(matches!(result, Err(AppError::Upstream(_))));
    }
}
