//! Derived books caching using Moka.
//!
//! Keys are the serialized entry snapshot and ledger options, so an unchanged
//! snapshot reuses its books and any change misses. Clearing the cache only
//! costs a recomputation.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use serde::Serialize;
use tracing::debug;

use ledgerly_shared::config::CacheSettings;

use super::{Books, LedgerOptions};
use crate::journal::types::JournalEntry;
use crate::ledger::{LedgerError, OpeningBalances};

/// Default cache capacity (number of snapshots).
const DEFAULT_CACHE_CAPACITY: u64 = 16;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// What a derivation depends on.
#[derive(Serialize)]
struct SnapshotKey<'a> {
    entries: &'a [JournalEntry],
    fiscal_year: i32,
    opening_balances: &'a OpeningBalances,
}

/// Cache of derived books. Thread-safe and cheap to clone.
#[derive(Clone)]
pub struct BooksCache {
    cache: Cache<Vec<u8>, Arc<Books>>,
}

impl BooksCache {
    /// Creates a cache with default settings (16 snapshots, 5 minute TTL).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a cache with custom capacity and time-to-live.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Creates a cache from configuration.
    #[must_use]
    pub fn from_settings(settings: &CacheSettings) -> Self {
        Self::with_config(settings.max_capacity, settings.ttl_secs)
    }

    /// Cache key of a snapshot: its full serialized content.
    ///
    /// Two snapshots share a key only when they serialize identically. The
    /// fiscal year is resolved first, so an unset year keys on the current
    /// one.
    #[must_use]
    pub fn snapshot_key(entries: &[JournalEntry], options: &LedgerOptions) -> Vec<u8> {
        let key = SnapshotKey {
            entries,
            fiscal_year: options.resolved_fiscal_year(),
            opening_balances: &options.opening_balances,
        };
        // Serializing plain data to a Vec cannot fail; fall back to the
        // debug form rather than panic.
        serde_json::to_vec(&key).unwrap_or_else(|_| format!("{entries:?}{options:?}").into_bytes())
    }

    /// Derives books, returning the cached result for an unchanged snapshot.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` on integrity anomalies in the entries. Failures
    /// are not cached.
    pub fn derive_cached(
        &self,
        entries: &[JournalEntry],
        options: &LedgerOptions,
    ) -> Result<Arc<Books>, LedgerError> {
        let key = Self::snapshot_key(entries, options);

        if let Some(books) = self.cache.get(&key) {
            debug!(snapshot_bytes = key.len(), "Books cache hit");
            return Ok(books);
        }

        debug!(
            snapshot_bytes = key.len(),
            entries = entries.len(),
            "Books cache miss"
        );
        let books = Arc::new(Books::derive(entries, options)?);
        self.cache.insert(key, Arc::clone(&books));
        Ok(books)
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks so counts and evictions are up to date.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for BooksCache {
    fn default() -> Self {
        Self::new()
    }
}
