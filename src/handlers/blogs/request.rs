//! Blog request DTOs

use serde::Deserialize;

/// Query parameters for recent actions
#[derive(Debug, Default, Deserialize)]
pub struct RecentActionsQuery {
    pub max_count: Option<u32>,
}
