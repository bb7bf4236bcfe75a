//! Read-through cache of word watches per scope.
//!
//! Every message in a channel needs that channel's watches, while the watches
//! themselves change rarely. Writers call [`WatchCache::invalidate`] after
//! committing; a load that overlaps an invalidation is returned to its caller but
//! never stored. Channels without watches are not cached, so the map only holds
//! scopes that have at least one watch.

use crate::{
    core::{scope::Scope, word_watch},
    entities::word_watch::Model,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::trace;

#[derive(Debug, Default)]
struct CacheState {
    generation: u64,
    entries: HashMap<Scope, Arc<Vec<Model>>>,
}

/// Word watches keyed by scope.
#[derive(Debug, Default)]
pub struct WatchCache {
    enabled: bool,
    state: RwLock<CacheState>,
}

impl WatchCache {
    /// Creates an empty cache. A disabled cache always reads storage.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            state: RwLock::new(CacheState::default()),
        }
    }

    /// Returns the word watches of `scope`, loading them on a miss.
    pub async fn get_or_load(
        &self,
        db: &DatabaseConnection,
        scope: &Scope,
    ) -> Result<Arc<Vec<Model>>> {
        if !self.enabled {
            return Ok(Arc::new(word_watch::watches_in_scope(db, scope).await?));
        }

        let generation = {
            let state = self.state.read().await;
            if let Some(watches) = state.entries.get(scope) {
                trace!("Watch cache hit for {scope}");
                return Ok(Arc::clone(watches));
            }
            state.generation
        };

        let loaded = Arc::new(word_watch::watches_in_scope(db, scope).await?);

        let mut state = self.state.write().await;
        if state.generation == generation && !loaded.is_empty() {
            state.entries.insert(scope.clone(), Arc::clone(&loaded));
        }
        Ok(loaded)
    }

    /// Drops the cached watches of `scope`.
    pub async fn invalidate(&self, scope: &Scope) {
        let mut state = self.state.write().await;
        state.generation = state.generation.wrapping_add(1);
        state.entries.remove(scope);
    }

    /// Whether `scope` currently has a cached entry.
    pub async fn contains(&self, scope: &Scope) -> bool {
        self.state.read().await.entries.contains_key(scope)
    }
}
