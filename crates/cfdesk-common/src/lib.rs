//! Common types shared by the cfdesk crates.

pub mod types;

pub use types::*;
