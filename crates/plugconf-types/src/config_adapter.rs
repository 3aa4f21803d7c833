//! Adapter that stores configuration entries and tenant connection descriptors.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::config_cache::CachedConfig;
use crate::error::PcResult;

/// Integer tag describing a configuration value's intended interpretation.
///
/// Informational metadata only: the resolver coerces to the caller's
/// requested type at read time, independent of this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
	#[serde(rename = "text")]
	Text,
	#[serde(rename = "integer")]
	Integer,
	#[serde(rename = "boolean")]
	Boolean,
}

impl ContentType {
	/// Stored column representation (0 = text, 1 = integer, 5 = boolean)
	pub fn as_i64(self) -> i64 {
		match self {
			ContentType::Text => 0,
			ContentType::Integer => 1,
			ContentType::Boolean => 5,
		}
	}
}

/// Connection descriptor of a tenant database
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionEntry {
	/// Store-assigned identity; 0 means "not yet persisted"
	pub id: i64,
	pub tenant_name: Box<str>,
	pub tenant_number: i64,
	pub connection_string: Box<str>,
	pub connection_type: i64,
}

/// A plugconf store adapter
///
/// Every store backend is required to implement this trait. An adapter is
/// responsible for persisting configuration entries keyed by
/// (plugin, user, name) and tenant connection descriptors keyed by identity.
#[async_trait]
pub trait ConfigAdapter: Debug + Send + Sync {
	/// # Configuration entries
	/// Reads the raw value of the exact (plugin, user, name) entry.
	/// Returns `None` when no entry exists or its value column is NULL.
	async fn read_value(
		&self,
		plugin_name: &str,
		user_name: &str,
		config_name: &str,
	) -> PcResult<Option<Box<str>>>;

	/// Writes a raw value, deciding the write shape:
	/// a per-user entry that does not exist yet is created by copying
	/// content_type / is_editable / user_can_overwrite from the
	/// (plugin, "", name) template (store defaults when no template exists);
	/// an existing entry gets only its value column updated.
	async fn write_value(
		&self,
		plugin_name: &str,
		user_name: &str,
		config_name: &str,
		value: &str,
	) -> PcResult<()>;

	/// Creates a global template entry (user scope "") with the given
	/// metadata. Does not guard against a pre-existing entry.
	async fn create_entry(
		&self,
		config_name: &str,
		plugin_name: &str,
		content_type: ContentType,
		editable: bool,
		value: &str,
	) -> PcResult<()>;

	/// Existence probe matched by plugin + name across all user scopes
	async fn entry_exists(&self, config_name: &str, plugin_name: &str) -> PcResult<bool>;

	/// Lists the entries matching exactly (plugin, user); global-scope
	/// entries are not merged in
	async fn list_values(&self, plugin_name: &str, user_name: &str) -> PcResult<Vec<CachedConfig>>;

	/// # Connections
	/// Reads a connection descriptor by its identity
	async fn read_connection(&self, id: i64) -> PcResult<ConnectionEntry>;

	/// Reads a connection descriptor by its tenant name
	async fn read_connection_by_name(&self, tenant_name: &str) -> PcResult<ConnectionEntry>;

	/// Lists all connection descriptors
	async fn list_connections(&self) -> PcResult<Vec<ConnectionEntry>>;

	/// Inserts or updates a connection descriptor; an id of 0 lets the
	/// store assign a new identity. Returns the persisted identity.
	async fn save_connection(&self, conn: &ConnectionEntry) -> PcResult<i64>;

	/// Deletes the connection descriptor with the given identity.
	/// Returns whether exactly one row was removed.
	async fn delete_connection(&self, id: i64) -> PcResult<bool>;
}

// vim: ts=4
