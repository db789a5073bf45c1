//! The desk session — owns the store handle and the activity feed.
//!
//! RULE: one writer, no ambient state. Whoever owns the application session
//! holds the [`Desk`]; every operation is a synchronous request/response
//! call that runs to completion before returning.

use crate::activity::ActivityLog;
use crate::config::DeskConfig;
use crate::error::DeskResult;
use crate::store::DeskStore;

pub struct Desk {
    pub(crate) store: DeskStore,
    pub(crate) activity: ActivityLog,
}

impl Desk {
    /// Open (or create) the desk database at `path` and apply the schema.
    pub fn open(path: &str) -> DeskResult<Self> {
        Self::with_store(DeskStore::open(path)?, default_capacity())
    }

    /// Fully in-memory desk (used in tests).
    pub fn in_memory() -> DeskResult<Self> {
        Self::with_store(DeskStore::in_memory()?, default_capacity())
    }

    pub fn from_config(config: &DeskConfig) -> DeskResult<Self> {
        let store = if config.database_path == ":memory:" {
            DeskStore::in_memory()?
        } else {
            DeskStore::open(&config.database_path)?
        };
        Self::with_store(store, config.activity_capacity)
    }

    fn with_store(store: DeskStore, activity_capacity: usize) -> DeskResult<Self> {
        store.migrate()?;
        Ok(Self {
            store,
            activity: ActivityLog::new(activity_capacity),
        })
    }

    /// Read access to the raw activity feed, newest first.
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }
}

fn default_capacity() -> usize {
    DeskConfig::default().activity_capacity
}
