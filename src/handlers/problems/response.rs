//! Problem response DTOs

use cfdesk_common::Problem;
use cfdesk_rules::ProblemFilter;
use serde::Serialize;

/// Filtered problem list
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub problems: Vec<Problem>,
    /// Problems kept by the filter
    pub total: usize,
    /// Problems in the catalog before filtering
    pub catalog_size: usize,
    /// Filter as applied
    pub filter: ProblemFilter,
}

/// Quick-filter tags and rating slider bounds
#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<&'static str>,
    pub rating_floor: i32,
    pub rating_ceiling: i32,
}
