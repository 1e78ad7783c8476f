//! In-process implementation of ArchivalRunRepository

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use hourboard_core::traits::{ArchivalRunRepository, RepoResult};
use hourboard_core::{ArchivalRun, SchoolYear};

/// In-process `archivalRuns` collection
#[derive(Debug, Clone, Default)]
pub struct MemoryArchivalRunRepository {
    docs: Arc<RwLock<Vec<ArchivalRun>>>,
}

impl MemoryArchivalRunRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArchivalRunRepository for MemoryArchivalRunRepository {
    async fn find(&self, school_year: &SchoolYear) -> RepoResult<Option<ArchivalRun>> {
        Ok(self
            .docs
            .read()
            .iter()
            .find(|r| r.school_year == *school_year)
            .cloned())
    }

    async fn save(&self, run: &ArchivalRun) -> RepoResult<()> {
        let mut docs = self.docs.write();
        match docs.iter_mut().find(|r| r.school_year == run.school_year) {
            Some(existing) => *existing = run.clone(),
            None => docs.push(run.clone()),
        }
        Ok(())
    }
}
