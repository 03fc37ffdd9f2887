//! Problem note model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Free-text note attached to a problem
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ProblemNote {
    pub problem_id: String,
    pub note: String,
    pub last_modified: DateTime<Utc>,
}
