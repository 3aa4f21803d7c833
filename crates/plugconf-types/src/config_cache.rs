//! Cache collaborator contract and the cached value snapshot type.

use std::fmt::Debug;

/// Builds the cache key of a configuration value: the lowercase, trimmed
/// concatenation of (name, plugin, user). Collisions are possible only when
/// the concatenated fields become ambiguous, which is accepted for the
/// typical field character sets.
pub fn cache_key_name(config_name: &str, plugin_name: &str, user_name: &str) -> Box<str> {
	format!("{}{}{}", config_name, plugin_name, user_name).to_lowercase().trim().into()
}

/// Immutable snapshot of a resolved configuration value.
///
/// Snapshots are replaced in the cache as a whole, never mutated in place.
#[derive(Debug, Clone)]
pub struct CachedConfig {
	pub config_name: Box<str>,
	pub plugin_name: Box<str>,
	pub user_name: Box<str>,
	/// Raw stored value; `None` when the store held no value
	pub value: Option<Box<str>>,
}

impl CachedConfig {
	pub fn new(
		config_name: &str,
		plugin_name: &str,
		user_name: &str,
		value: Option<Box<str>>,
	) -> Self {
		Self {
			config_name: config_name.into(),
			plugin_name: plugin_name.into(),
			user_name: user_name.into(),
			value,
		}
	}

	/// The key under which this snapshot identifies itself in the cache
	pub fn cache_key(&self) -> Box<str> {
		cache_key_name(&self.config_name, &self.plugin_name, &self.user_name)
	}
}

/// A plugconf cache backend
///
/// Keyed raw-value snapshots; `set` replaces whole entries. No explicit
/// invalidation is used by the core.
pub trait ConfigCache: Debug + Send + Sync {
	fn get(&self, key: &str) -> Option<CachedConfig>;
	fn set(&self, value: CachedConfig);
}


// vim: ts=4
