//! Execution request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::{validate_source_size, validate_test_data_size};

/// Run code request
#[derive(Debug, Deserialize, Validate)]
pub struct ExecutionRequest {
    #[validate(custom(function = "validate_source_size"))]
    pub source_code: String,

    pub language_id: i32,

    #[validate(custom(function = "validate_test_data_size"))]
    pub stdin: Option<String>,

    pub problem_id: Option<String>,
}
