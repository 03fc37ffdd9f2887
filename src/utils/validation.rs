//! Input validation utilities

use validator::ValidationError;

use crate::{
    constants::{
        MAX_HANDLE_LENGTH, MAX_PROBLEM_ID_LENGTH, MAX_QUERY_COUNT, MAX_SOURCE_CODE_SIZE,
        MAX_TEST_DATA_SIZE, MIN_HANDLE_LENGTH,
    },
    error::{AppError, AppResult},
};

/// Validate a Codeforces handle
pub fn validate_handle(handle: &str) -> AppResult<()> {
    let length = handle.chars().count();
    if length < MIN_HANDLE_LENGTH {
        return Err(AppError::InvalidInput(format!(
            "Handle must be at least {} characters",
            MIN_HANDLE_LENGTH
        )));
    }
    if length > MAX_HANDLE_LENGTH {
        return Err(AppError::InvalidInput(format!(
            "Handle must be at most {} characters",
            MAX_HANDLE_LENGTH
        )));
    }
    if !handle
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return Err(AppError::InvalidInput(
            "Handle can only contain letters, digits, underscores, hyphens and dots".to_string(),
        ));
    }
    Ok(())
}

/// Validate a problem id such as `1850-G2`
pub fn validate_problem_id(problem_id: &str) -> AppResult<()> {
    if problem_id.is_empty() {
        return Err(AppError::InvalidInput("Problem id cannot be empty".to_string()));
    }
    if problem_id.len() > MAX_PROBLEM_ID_LENGTH {
        return Err(AppError::InvalidInput(format!(
            "Problem id must be at most {} characters",
            MAX_PROBLEM_ID_LENGTH
        )));
    }
    if !problem_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(AppError::InvalidInput(
            "Problem id can only contain letters, digits and hyphens".to_string(),
        ));
    }
    Ok(())
}

/// Split a handle list on `;` or `,`, dropping blanks
pub fn parse_handles(raw: &str) -> Vec<String> {
    raw.split([';', ','])
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .collect()
}

/// Apply a default to a `count` query parameter and keep it in `1..=1000`
pub fn cap_count(count: Option<u32>, default: u32) -> u32 {
    count.unwrap_or(default).clamp(1, MAX_QUERY_COUNT)
}

/// `validator` hook: source code size limit
pub fn validate_source_size(code: &str) -> Result<(), ValidationError> {
    if code.len() > MAX_SOURCE_CODE_SIZE {
        return Err(ValidationError::new("source_too_large")
            .with_message("Source code exceeds maximum size of 64KB".into()));
    }
    Ok(())
}

/// `validator` hook: custom test input/output size limit
pub fn validate_test_data_size(data: &str) -> Result<(), ValidationError> {
    if data.len() > MAX_TEST_DATA_SIZE {
        return Err(ValidationError::new("test_data_too_large")
            .with_message("Test data exceeds maximum size of 1MB".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_handle() {
        assert!(validate_handle("tourist").is_ok());
        assert!(validate_handle("Um_nik").is_ok());
        assert!(validate_handle("jiangly.fan-1").is_ok());
        assert!(validate_handle("ab").is_err());
        assert!(validate_handle("a".repeat(25).as_str()).is_err());
        assert!(validate_handle("bad handle").is_err());
        assert!(validate_handle("semi;colon").is_err());
    }

    #[test]
    fn test_validate_problem_id() {
        assert!(validate_problem_id("4-A").is_ok());
        assert!(validate_problem_id("1850-G2").is_ok());
        assert!(validate_problem_id("A").is_ok());
        assert!(validate_problem_id("").is_err());
        assert!(validate_problem_id("4 A").is_err());
        assert!(validate_problem_id("4-A/../x").is_err());
        assert!(validate_problem_id(&"1".repeat(33)).is_err());
    }

    #[test]
    fn test_parse_handles() {
        assert_eq!(
            parse_handles("tourist; Petr,,  Um_nik "),
            vec!["tourist", "Petr", "Um_nik"]
        );
        assert!(parse_handles(" ; ").is_empty());
    }

    #[test]
    fn test_cap_count() {
        assert_eq!(cap_count(None, 30), 30);
        assert_eq!(cap_count(Some(5000), 30), 1000);
        assert_eq!(cap_count(Some(0), 30), 1);
    }

    #[test]
    fn test_size_hooks() {
        assert!(validate_source_size("int main() {}").is_ok());
        assert!(validate_source_size(&"x".repeat(MAX_SOURCE_CODE_SIZE + 1)).is_err());
        assert!(validate_test_data_size(&"1\n".repeat(1000)).is_ok());
        assert!(validate_test_data_size(&"x".repeat(MAX_TEST_DATA_SIZE + 1)).is_err());
    }
}
