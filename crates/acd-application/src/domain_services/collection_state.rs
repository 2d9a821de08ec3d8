//! Collection State Machine
//!
//! A single guarded state cell tracking whether a collection is running,
//! the outcome of the last attempt, and the current snapshot. All lifecycle
//! transitions go through this type; there is no other writer.
//!
//! ## Transitions
//!
//! | From | Via | To |
//! |------|-----|----|
//! | Idle | `try_start` | Collecting |
//! | Collecting | `try_start` | rejected with `CollectionInProgress` |
//! | Collecting | `complete` | Idle (snapshot replaced, error cleared) |
//! | Collecting | `fail` | Idle (snapshot untouched, error recorded) |
//!
//! `Idle -> Collecting` is an atomic check-and-set under the status mutex,
//! so two simultaneous start requests can never both be admitted. The
//! snapshot itself lives in an [`ArcSwapOption`]: it is replaced wholesale
//! on completion and readers always observe either the previous complete
//! snapshot or the new one, never an intermediate state.

use acd_domain::entities::{CapacitySnapshot, CollectionStatus};
use acd_domain::error::{Error, Result};
use arc_swap::ArcSwapOption;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Default)]
struct StateInner {
    in_progress: bool,
    last_collection_time: Option<DateTime<Utc>>,
    last_error: Option<String>,
    array_id: Option<String>,
}

/// Guarded collection lifecycle state and current snapshot
pub struct CollectionStateMachine {
    state: Mutex<StateInner>,
    snapshot: ArcSwapOption<CapacitySnapshot>,
}

impl CollectionStateMachine {
    /// Create a state machine in the "never collected" state
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StateInner::default()),
            snapshot: ArcSwapOption::const_empty(),
        }
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Admit a collection for `array_id`
    ///
    /// Rejects with [`Error::CollectionInProgress`] when a collection is
    /// already running; the caller is informed immediately and must not
    /// retry-loop.
    pub fn try_start(&self, array_id: &str) -> Result<()> {
        let mut state = self.lock_state();
        if state.in_progress {
            return Err(Error::CollectionInProgress);
        }
        state.in_progress = true;
        state.array_id = Some(array_id.to_string());
        state.last_error = None;
        Ok(())
    }

    /// Terminal transition for a successful collection
    ///
    /// Atomically replaces the current snapshot and returns the shared
    /// handle now visible to readers.
    pub fn complete(&self, snapshot: CapacitySnapshot) -> Arc<CapacitySnapshot> {
        let snapshot = Arc::new(snapshot);
        self.snapshot.store(Some(Arc::clone(&snapshot)));

        let mut state = self.lock_state();
        state.in_progress = false;
        state.last_collection_time = Some(Utc::now());
        state.last_error = None;
        snapshot
    }

    /// Terminal transition for a fatally failed collection
    ///
    /// Any previously stored snapshot stays current: stale data is
    /// preferred over no data.
    pub fn fail(&self, message: impl Into<String>) {
        let mut state = self.lock_state();
        state.in_progress = false;
        state.last_error = Some(message.into());
    }

    /// Current status for observers
    pub fn status(&self) -> CollectionStatus {
        let state = self.lock_state();
        CollectionStatus {
            in_progress: state.in_progress,
            last_collection_time: state.last_collection_time,
            has_data: self.snapshot.load().is_some(),
            last_error: state.last_error.clone(),
            array_id: state.array_id.clone(),
        }
    }

    /// Current snapshot, if any collection has completed
    pub fn snapshot(&self) -> Option<Arc<CapacitySnapshot>> {
        self.snapshot.load_full()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, StateInner> {
        // A poisoned lock only means a panic elsewhere; the state itself
        // stays consistent because every transition writes complete values.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CollectionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CollectionStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock_state();
        f.debug_struct("CollectionStateMachine")
            .field("in_progress", &state.in_progress)
            .field("has_data", &self.snapshot.load().is_some())
            .finish()
    }
}
