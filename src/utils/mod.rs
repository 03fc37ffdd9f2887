//! Utility functions

pub mod validation;

pub use validation::{cap_count, parse_handles, validate_handle, validate_problem_id};
