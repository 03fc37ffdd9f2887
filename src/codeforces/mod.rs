//! Codeforces REST API access

pub mod client;
pub mod models;

pub use client::{CodeforcesApi, CodeforcesClient, StandingsQuery};
pub use models::*;

#[cfg(test)]
pub use client::MockCodeforcesApi;
