//! Contest request DTOs

use serde::Deserialize;

use crate::{
    codeforces::StandingsQuery,
    constants::{DEFAULT_STANDINGS_COUNT, DEFAULT_STATUS_COUNT},
    error::AppResult,
    utils::{cap_count, parse_handles, validate_handle},
};

/// Query parameters for the contest list
#[derive(Debug, Default, Deserialize)]
pub struct ListContestsQuery {
    /// Gym contests instead of regular rounds
    pub gym: Option<bool>,
}

/// Query parameters for contest standings
#[derive(Debug, Default, Deserialize)]
pub struct StandingsParams {
    pub from: Option<u32>,
    pub count: Option<u32>,
    /// Semicolon or comma separated handles
    pub handles: Option<String>,
    pub room: Option<i32>,
    pub show_unofficial: Option<bool>,
}

impl StandingsParams {
    /// Validate the handles and build the upstream query
    pub fn to_query(&self) -> AppResult<StandingsQuery> {
        let handles = self
            .handles
            .as_deref()
            .map(parse_handles)
            .unwrap_or_default();
        for handle in &handles {
            validate_handle(handle)?;
        }

        Ok(StandingsQuery {
            from: self.from.unwrap_or(1).max(1),
            count: cap_count(self.count, DEFAULT_STANDINGS_COUNT),
            handles,
            room: self.room,
            show_unofficial: self.show_unofficial.unwrap_or(false),
        })
    }
}

/// Query parameters for contest submissions
#[derive(Debug, Default, Deserialize)]
pub struct ContestStatusQuery {
    pub handle: Option<String>,
    pub from: Option<u32>,
    pub count: Option<u32>,
}

impl ContestStatusQuery {
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
    use crate::error::AppError;

    #[test]
    fn test_standings_defaults() {
        let query = StandingsParams::default().to_query().unwrap();
        assert_eq!(query, StandingsQuery::default());
    }

    #[test]
    fn test_standings_handles_are_split_and_validated() {
        let params = StandingsParams {
            handles: Some("tourist;Petr, jiangly".to_string()),
            count: Some(5000),
            ..Default::default()
        };
        let query = params.to_query().unwrap();
        assert_eq!(query.handles, vec!["tourist", "Petr", "jiangly"]);
        assert_eq!(query.count, 1000);

        let bad = StandingsParams {
            handles: Some("ok_handle;x".to_string()),
            ..Default::default()
        };
        assert!(matches!(bad.to_query(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_status_defaults() {
        let query = ContestStatusQuery::default();
        assert_eq!(query.from(), 1);
        assert_eq!(query.count(), 10);
    }
}
