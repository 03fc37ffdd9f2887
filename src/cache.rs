//! In-memory problem cache
//!
//! Unbounded map from problem id to the last loaded [`Problem`], plus the last
//! catalog snapshot in upstream order. Entries are never evicted; a later
//! write for the same id replaces the earlier one.

use std::collections::HashMap;
use std::sync::Arc;

use cfdesk_common::Problem;
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct ProblemCache {
    entries: RwLock<HashMap<String, Problem>>,
    catalog: RwLock<Option<Arc<Vec<Problem>>>>,
}

impl ProblemCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<Problem> {
        self.entries.read().get(id).cloned()
    }

    pub fn insert(&self, problem: Problem) {
        self.entries.write().insert(problem.id.clone(), problem);
    }

    /// Replace the catalog snapshot and index every problem in it.
    pub fn store_catalog(&self, problems: Vec<Problem>) -> Arc<Vec<Problem>> {
        {
            let mut entries = self.entries.write();
            for problem in &problems {
                entries.insert(problem.id.clone(), problem.clone());
            }
        }

        let snapshot = Arc::new(problems);
        *self.catalog.write() = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Last catalog snapshot, or `None` if nothing has been loaded yet.
    ///
    /// An empty catalog is still a loaded one.
    pub fn catalog(&self) -> Option<Arc<Vec<Problem>>> {
        self.catalog.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
