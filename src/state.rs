//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{cache::ProblemCache, codeforces::CodeforcesApi};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    db: PgPool,

    /// Codeforces API client
    codeforces: Arc<dyn CodeforcesApi>,

    /// Problems seen in the last catalog loads
    problems: ProblemCache,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, codeforces: Arc<dyn CodeforcesApi>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                codeforces,
                problems: ProblemCache::new(),
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a reference to the Codeforces API client
    pub fn codeforces(&self) -> &dyn CodeforcesApi {
        self.inner.codeforces.as_ref()
    }

    /// Get a reference to the problem cache
    pub fn problems(&self) -> &ProblemCache {
        &self.inner.problems
    }
}
