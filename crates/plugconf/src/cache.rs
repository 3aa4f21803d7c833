//! Bounded in-process cache backend for resolved configuration values.

use lru::LruCache;
use std::num::NonZeroUsize;

use crate::prelude::*;

const DEFAULT_CAPACITY: usize = 1024;

/// LRU cache of configuration value snapshots
///
/// Entries are whole [`CachedConfig`] snapshots; `set` replaces the entry
/// under its key, so concurrent writers can only race whole snapshots,
/// never partial updates.
pub struct LruConfigCache {
	cache: parking_lot::RwLock<LruCache<Box<str>, CachedConfig>>,
}

impl std::fmt::Debug for LruConfigCache {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LruConfigCache").field("len", &self.cache.read().len()).finish()
	}
}

impl LruConfigCache {
	pub fn new(capacity: usize) -> Self {
		let capacity = NonZeroUsize::new(capacity)
			.unwrap_or(NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN));
		Self { cache: parking_lot::RwLock::new(LruCache::new(capacity)) }
	}
}

impl Default for LruConfigCache {
	fn default() -> Self {
		Self::new(DEFAULT_CAPACITY)
	}
}

impl ConfigCache for LruConfigCache {
	fn get(&self, key: &str) -> Option<CachedConfig> {
		// get promotes the entry, which needs the write half of the lock
		let mut cache = self.cache.write();
		cache.get(key).cloned()
	}

	fn set(&self, value: CachedConfig) {
		let mut cache = self.cache.write();
		cache.put(value.cache_key(), value);
	}
}


// vim: ts=4
