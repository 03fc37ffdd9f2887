//! Remote execution models
//!
//! Only the shapes exist; no execution backend is wired in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionStatus {
    pub code: i32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub status: ExecutionStatus,
    pub time_seconds: Option<f64>,
    pub memory_kb: Option<i32>,
    pub compile_output: Option<String>,
}

/// Test case shared by other users of a problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityTestCase {
    pub id: String,
    pub input: String,
    pub expected_output: String,
    #[serde(default)]
    pub votes: i32,
    pub author: Option<String>,
    pub note: Option<String>,
}
