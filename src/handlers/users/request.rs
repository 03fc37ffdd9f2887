//! User request DTOs

use cfdesk_common::ContestId;
use serde::Deserialize;

use crate::{
    constants::DEFAULT_STATUS_COUNT,
    error::{AppError, AppResult},
    utils::{cap_count, parse_handles, validate_handle},
};

/// Query parameters for `GET /users`
#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    /// Semicolon or comma separated handles
    pub handles: Option<String>,
}

impl UsersQuery {
    /// Split and validate the handles; at least one is required
    pub fn handles(&self) -> AppResult<Vec<String>> {
        let handles = self
            .handles
            .as_deref()
            .map(parse_handles)
            .unwrap_or_default();
        if handles.is_empty() {
            return Err(AppError::InvalidInput(
                "At least one handle is required".to_string(),
            ));
        }
        for handle in &handles {
            validate_handle(handle)?;
        }
        Ok(handles)
    }
}

/// Query parameters for the rated list
#[derive(Debug, Default, Deserialize)]
pub struct RatedListQuery {
    pub active_only: Option<bool>,
    pub include_retired: Option<bool>,
    pub contest_id: Option<ContestId>,
}

/// Query parameters for comparing two users
#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub first: String,
    pub second: String,
}

/// Query parameters for a user's submissions
#[derive(Debug, Default, Deserialize)]
pub struct UserStatusQuery {
    pub from: Option<u32>,
    pub count: Option<u32>,
}

impl UserStatusQuery {
    pub fn from(&self) -> u32 {
        self.from.unwrap_or(1).max(1)
    }

    pub fn count(&self) -> u32 {
        cap_count(self.count, DEFAULT_STATUS_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_required() {
        let query = UsersQuery::default();
        assert!(matches!(query.handles(), Err(AppError::InvalidInput(_))));

        let query = UsersQuery {
            handles: Some(" ; ,".to_string()),
        };
        assert!(query.handles().is_err());
    }

    #[test]
    fn test_handles_split() {
        let query = UsersQuery {
            handles: Some("tourist;Petr".to_string()),
        };
        assert_eq!(query.handles().unwrap(), vec!["tourist", "Petr"]);
    }

    #[test]
    fn test_status_paging() {
        let query = UserStatusQuery {
            from: Some(0),
            count: Some(0),
        };
        assert_eq!(query.from(), 1);
        assert_eq!(query.count(), 1);
    }
}
