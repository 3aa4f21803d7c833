//! Configuration resolution service: cache-aside reads with hierarchical
//! fallback, write-through sets, and lazy override creation.

use std::sync::Arc;

use crate::coerce::{ConfigDecode, ConfigEncode};
use crate::prelude::*;

/// A configuration value decoded for a caller
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig<T> {
	pub config_name: Box<str>,
	pub plugin_name: Box<str>,
	pub user_name: Box<str>,
	pub value: T,
}

/// Resolves configuration values against a store and a cache.
///
/// The store is the source of truth; the cache is an optimization layer and
/// is never consulted for write-shape decisions.
pub struct ConfigResolver {
	store: Arc<dyn ConfigAdapter>,
	cache: Arc<dyn ConfigCache>,
}

impl ConfigResolver {
	pub fn new(store: Arc<dyn ConfigAdapter>, cache: Arc<dyn ConfigCache>) -> Self {
		Self { store, cache }
	}

	/// Gets a configuration value decoded to `T`.
	///
	/// With `use_cache` a cache hit is returned without touching the store.
	/// On a miss the exact (plugin, user, name) entry is read; a blank or
	/// missing value falls back once to the user-independent entry. The
	/// resolved value is cached under the key of the *requested* scope,
	/// not the fallback's.
	pub async fn get_value<T: ConfigDecode>(
		&self,
		config_name: &str,
		plugin_name: &str,
		user_name: &str,
		use_cache: bool,
	) -> PcResult<T> {
		if use_cache {
			if let Some(hit) = self.cache.get(&cache_key_name(config_name, plugin_name, user_name))
			{
				debug!("Config cache hit: {}/{}/{}", plugin_name, user_name, config_name);
				return Ok(T::decode(hit.value.as_deref()));
			}
		}

		let mut value = self.store.read_value(plugin_name, user_name, config_name).await?;

		// No user specific value, try to load the user independent one
		if value.as_deref().is_none_or(|v| v.trim().is_empty()) && !user_name.is_empty() {
			value = self.store.read_value(plugin_name, "", config_name).await?;
		}

		let decoded = T::decode(value.as_deref());
		if use_cache {
			self.cache.set(CachedConfig::new(config_name, plugin_name, user_name, value));
		}

		Ok(decoded)
	}

	/// Sets a configuration value.
	///
	/// The store decides the write shape (template copy, plain insert, or
	/// value-only update); the cache entry for this key is replaced
	/// afterwards regardless of whether the store write changed a row.
	pub async fn set_value<T: ConfigEncode>(
		&self,
		config_name: &str,
		plugin_name: &str,
		user_name: &str,
		value: T,
	) -> PcResult<()> {
		let raw = value.encode();
		self.store.write_value(plugin_name, user_name, config_name, &raw).await?;
		self.cache.set(CachedConfig::new(config_name, plugin_name, user_name, Some(raw)));
		Ok(())
	}

	/// Creates a global template entry, then persists the initial value
	/// through [`set_value`](Self::set_value) so the cache is populated.
	///
	/// Does not check for a pre-existing entry of the same key; guarding
	/// against duplicates (e.g. via [`exists`](Self::exists)) is the
	/// caller's responsibility.
	pub async fn create<T: ConfigEncode>(
		&self,
		config_name: &str,
		plugin_name: &str,
		content_type: ContentType,
		editable: bool,
		value: T,
	) -> PcResult<()> {
		self.store.create_entry(config_name, plugin_name, content_type, editable, "").await?;
		self.set_value(config_name, plugin_name, "", value).await
	}

	/// Checks whether a configuration entry exists for plugin + name in any
	/// user scope
	pub async fn exists(&self, config_name: &str, plugin_name: &str) -> PcResult<bool> {
		self.store.entry_exists(config_name, plugin_name).await
	}

	/// Enumerates the values stored exactly under (plugin, user), each
	/// decoded to `T` as it is yielded. Global-scope entries are not merged
	/// in for non-empty users.
	pub async fn get_values<T: ConfigDecode>(
		&self,
		plugin_name: &str,
		user_name: &str,
	) -> PcResult<impl Iterator<Item = ResolvedConfig<T>>> {
		let rows = self.store.list_values(plugin_name, user_name).await?;

		Ok(rows.into_iter().map(|row| ResolvedConfig {
			value: T::decode(row.value.as_deref()),
			config_name: row.config_name,
			plugin_name: row.plugin_name,
			user_name: row.user_name,
		}))
	}
}

// vim: ts=4
