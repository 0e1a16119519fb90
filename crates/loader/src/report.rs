use chrono::Utc;
use jph_core::resource::Resource;
use jph_core::types::Timestamp;
use serde::Serialize;

use crate::session::TransactionMode;

/// Rows fetched and written for one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceCount {
    pub resource: Resource,
    pub fetched: usize,
    pub inserted: u64,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub mode: TransactionMode,
    pub started_at: Timestamp,
    pub finished_at: Option<Timestamp>,
    pub resources: Vec<ResourceCount>,
}

impl LoadReport {
    pub fn new(mode: TransactionMode) -> Self {
        Self {
            mode,
            started_at: Utc::now(),
            finished_at: None,
            resources: Vec::with_capacity(Resource::LOAD_ORDER.len()),
        }
    }

    pub fn record(&mut self, resource: Resource, fetched: usize, inserted: u64) {
        self.resources.push(ResourceCount {
            resource,
            fetched,
            inserted,
        });
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Count for one resource, if it has been loaded.
    pub fn count(&self, resource: Resource) -> Option<ResourceCount> {
        self.resources.iter().copied().find(|c| c.resource == resource)
    }

    pub fn total_inserted(&self) -> u64 {
        self.resources.iter().map(|c| c.inserted).sum()
    }
}
