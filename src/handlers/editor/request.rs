//! Editor request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::{validate_source_size, validate_test_data_size};

/// Save editor session request
#[derive(Debug, Deserialize, Validate)]
pub struct SaveSessionRequest {
    #[validate(custom(function = "validate_source_size"))]
    pub code: String,

    /// Codeforces language id; unknown ids fall back to the default template
    pub language_id: i32,

    #[validate(custom(function = "validate_test_data_size"))]
    pub custom_input: Option<String>,
}

/// Change language request
#[derive(Debug, Deserialize)]
pub struct ChangeLanguageRequest {
    pub language_id: i32,
}

/// Add custom test request
#[derive(Debug, Deserialize, Validate)]
pub struct AddCustomTestRequest {
    #[validate(custom(function = "validate_test_data_size"))]
    pub input: String,

    #[serde(default)]
    #[validate(custom(function = "validate_test_data_size"))]
    pub expected_output: String,
}
