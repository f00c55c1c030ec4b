//! Unified service container for docindex
//!
//! Provides shared access to all core services.

use crate::core::cache::DocCache;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::resolver::QueryResolver;
use crate::core::snapshot::{Snapshot, SnapshotBuilder};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Snapshot owner (population, refresh, swap)
    pub cache: Arc<DocCache>,

    /// Operation dispatch against the live snapshot
    pub resolver: Arc<QueryResolver>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    ///
    /// The cache starts uninitialized; call [`Services::populate`]
    /// before serving queries.
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);
        let cache = Arc::new(DocCache::new(SnapshotBuilder::from_config(&config)?));
        let resolver = Arc::new(QueryResolver::new(
            Arc::clone(&cache),
            Arc::clone(&config),
        ));

        Ok(Self {
            cache,
            resolver,
            config,
        })
    }

    /// Create services and perform the initial population
    ///
    /// Fails with `RootNotFound` when the documentation root is missing.
    pub fn start(config: Config) -> Result<Self> {
        let services = Self::new(config)?;
        services.populate()?;
        Ok(services)
    }

    /// Initial population of the cache
    pub fn populate(&self) -> Result<Arc<Snapshot>> {
        let outcome = self.cache.refresh()?;
        let snapshot = Arc::clone(outcome.snapshot());

        for warning in snapshot.warnings() {
            tracing::warn!("{}", warning);
        }

        Ok(snapshot)
    }
}
