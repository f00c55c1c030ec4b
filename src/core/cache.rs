//! Cache lifecycle: population, refresh and atomic snapshot swap.
//!
//! Readers clone the current `Arc<Snapshot>` under a short read lock
//! and then work against it for the whole query, so a concurrent swap
//! never mixes generations. Only one refresh builds at a time; callers
//! that arrive while one is running wait for it and share its result.

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::error::{DocError, Result};
use crate::core::snapshot::{Snapshot, SnapshotBuilder};
use crate::core::types::{Category, ScanWarning};

/// Lifecycle state of the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheState {
    Uninitialized,
    Populating,
    Ready,
    Refreshing,
}

/// Result of a refresh request
#[derive(Debug, Clone)]
pub enum RefreshOutcome {
    /// This call built and published a new snapshot
    Refreshed(Arc<Snapshot>),

    /// Another refresh was in flight; this call shares its result
    Coalesced(Arc<Snapshot>),
}

impl RefreshOutcome {
    pub fn snapshot(&self) -> &Arc<Snapshot> {
        match self {
            RefreshOutcome::Refreshed(s) | RefreshOutcome::Coalesced(s) => s,
        }
    }

    pub fn is_coalesced(&self) -> bool {
        matches!(self, RefreshOutcome::Coalesced(_))
    }
}

/// Point-in-time view of the cache for status reporting
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    pub state: CacheState,
    pub generation: Option<u64>,
    pub built_at: Option<DateTime<Utc>>,
    pub document_count: usize,
    pub documents_by_category: BTreeMap<Category, usize>,
    pub warnings: Vec<ScanWarning>,
    pub last_error: Option<String>,
}

/// Owner of the live snapshot (single writer, many readers)
pub struct DocCache {
    builder: SnapshotBuilder,
    current: RwLock<Option<Arc<Snapshot>>>,
    state: Mutex<CacheState>,
    refresh_lock: Mutex<()>,
    last_error: Mutex<Option<String>>,
}

impl DocCache {
    pub fn new(builder: SnapshotBuilder) -> Self {
        Self {
            builder,
            current: RwLock::new(None),
            state: Mutex::new(CacheState::Uninitialized),
            refresh_lock: Mutex::new(()),
            last_error: Mutex::new(None),
        }
    }

    pub fn builder(&self) -> &SnapshotBuilder {
        &self.builder
    }

    pub fn state(&self) -> CacheState {
        *self.state.lock()
    }

    /// The live snapshot
    ///
    /// # Errors
    ///
    /// `RefreshFailure` only if no population has ever succeeded
    pub fn snapshot(&self) -> Result<Arc<Snapshot>> {
        self.current.read().clone().ok_or_else(|| {
            let reason = self
                .last_error
                .lock()
                .clone()
                .unwrap_or_else(|| "documentation cache has not been populated".to_string());
            DocError::RefreshFailure(reason)
        })
    }

    /// Build a new snapshot and publish it
    ///
    /// If a refresh is already running, waits for it and shares its
    /// result instead of building again, including its failure. On
    /// failure the previous snapshot stays live; the first population
    /// reports the original error (e.g. `RootNotFound`), later ones
    /// `RefreshFailure`.
    pub fn refresh(&self) -> Result<RefreshOutcome> {
        let _guard = match self.refresh_lock.try_lock() {
            Some(guard) => guard,
            None => {
                tracing::debug!("Refresh already in progress, coalescing");
                let _wait = self.refresh_lock.lock();
                // last_error always describes the most recent finished build
                if let Some(reason) = self.last_error.lock().clone() {
                    return Err(DocError::RefreshFailure(reason));
                }
                return self.snapshot().map(RefreshOutcome::Coalesced);
            }
        };

        let previous = self.current.read().clone();
        *self.state.lock() = if previous.is_some() {
            CacheState::Refreshing
        } else {
            CacheState::Populating
        };

        let generation = previous.as_ref().map_or(1, |s| s.generation() + 1);

        match self.builder.build(generation) {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                *self.current.write() = Some(Arc::clone(&snapshot));
                *self.last_error.lock() = None;
                *self.state.lock() = CacheState::Ready;
                Ok(RefreshOutcome::Refreshed(snapshot))
            }
            Err(e) => {
                tracing::warn!("Snapshot build failed: {}", e);
                *self.last_error.lock() = Some(e.to_string());
                match previous {
                    Some(_) => {
                        *self.state.lock() = CacheState::Ready;
                        Err(DocError::RefreshFailure(e.to_string()))
                    }
                    None => {
                        *self.state.lock() = CacheState::Uninitialized;
                        Err(e)
                    }
                }
            }
        }
    }

    /// Whether the filesystem no longer matches the live snapshot
    pub fn is_stale(&self) -> Result<bool> {
        let Some(current) = self.current.read().clone() else {
            return Ok(true);
        };
        let on_disk = self.builder.fingerprint()?;
        Ok(&on_disk != current.fingerprint())
    }

    /// Refresh only when stale; `None` when the snapshot is current
    pub fn refresh_if_stale(&self) -> Result<Option<RefreshOutcome>> {
        if self.is_stale()? {
            tracing::info!("Documentation changed on disk, refreshing");
            self.refresh().map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn status(&self) -> CacheStatus {
        let current = self.current.read().clone();
        let state = self.state();
        let last_error = self.last_error.lock().clone();

        match current {
            Some(snapshot) => CacheStatus {
                state,
                generation: Some(snapshot.generation()),
                built_at: Some(snapshot.built_at()),
                document_count: snapshot.store().len(),
                documents_by_category: snapshot.store().counts(),
                warnings: snapshot.warnings().to_vec(),
                last_error,
            },
            None => CacheStatus {
                state,
                generation: None,
                built_at: None,
                document_count: 0,
                documents_by_category: BTreeMap::new(),
                warnings: Vec::new(),
                last_error,
            },
        }
    }
}
