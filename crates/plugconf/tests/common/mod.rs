//! Common test utilities
//!
//! In-memory stub store implementing the `ConfigAdapter` contract, with
//! knobs for failure injection and read accounting.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};

use plugconf::prelude::*;

#[derive(Debug, Clone)]
pub struct StubEntry {
	pub value: Option<Box<str>>,
	pub content_type: i64,
	pub is_editable: bool,
	pub user_can_overwrite: bool,
}

/// In-memory `ConfigAdapter` honoring the store's write-shape contract
#[derive(Debug, Default)]
pub struct MemStore {
	entries: Mutex<HashMap<(String, String, String), StubEntry>>,
	connections: Mutex<Vec<ConnectionEntry>>,
	next_connection_id: AtomicI64,
	reads: AtomicU32,
	read_limit: Option<u32>,
	fail_connection_writes: bool,
}

impl MemStore {
	pub fn new() -> Self {
		Self { next_connection_id: AtomicI64::new(1), ..Self::default() }
	}

	/// Fails every `read_value` call past the given count
	pub fn with_read_limit(limit: u32) -> Self {
		Self { read_limit: Some(limit), ..Self::new() }
	}

	/// Fails every connection write
	pub fn with_failing_connection_writes() -> Self {
		Self { fail_connection_writes: true, ..Self::new() }
	}

	pub fn reads(&self) -> u32 {
		self.reads.load(Ordering::SeqCst)
	}

	pub fn raw_value(&self, plugin: &str, user: &str, name: &str) -> Option<Box<str>> {
		let entries = self.entries.lock();
		entries.get(&key(plugin, user, name)).and_then(|e| e.value.clone())
	}

	pub fn entry(&self, plugin: &str, user: &str, name: &str) -> Option<StubEntry> {
		let entries = self.entries.lock();
		entries.get(&key(plugin, user, name)).cloned()
	}

	pub fn insert_entry(&self, plugin: &str, user: &str, name: &str, entry: StubEntry) {
		let mut entries = self.entries.lock();
		entries.insert(key(plugin, user, name), entry);
	}

	pub fn insert_connection(&self, conn: ConnectionEntry) {
		self.next_connection_id.fetch_max(conn.id + 1, Ordering::SeqCst);
		self.connections.lock().push(conn);
	}
}

fn key(plugin: &str, user: &str, name: &str) -> (String, String, String) {
	(plugin.to_owned(), user.to_owned(), name.to_owned())
}

#[async_trait]
impl ConfigAdapter for MemStore {
	async fn read_value(
		&self,
		plugin_name: &str,
		user_name: &str,
		config_name: &str,
	) -> PcResult<Option<Box<str>>> {
		let count = self.reads.fetch_add(1, Ordering::SeqCst) + 1;
		if self.read_limit.is_some_and(|limit| count > limit) {
			return Err(Error::DbError);
		}

		let entries = self.entries.lock();
		Ok(entries.get(&key(plugin_name, user_name, config_name)).and_then(|e| e.value.clone()))
	}

	async fn write_value(
		&self,
		plugin_name: &str,
		user_name: &str,
		config_name: &str,
		value: &str,
	) -> PcResult<()> {
		let mut entries = self.entries.lock();
		let entry_key = key(plugin_name, user_name, config_name);

		if let Some(entry) = entries.get_mut(&entry_key) {
			entry.value = Some(value.into());
			return Ok(());
		}

		// New per-user entries clone the template's metadata when present
		let template = if user_name.is_empty() {
			None
		} else {
			entries.get(&key(plugin_name, "", config_name)).cloned()
		};
		let (content_type, is_editable, user_can_overwrite) = template
			.map(|t| (t.content_type, t.is_editable, t.user_can_overwrite))
			.unwrap_or((0, true, true));

		entries.insert(
			entry_key,
			StubEntry { value: Some(value.into()), content_type, is_editable, user_can_overwrite },
		);
		Ok(())
	}

	async fn create_entry(
		&self,
		config_name: &str,
		plugin_name: &str,
		content_type: ContentType,
		editable: bool,
		value: &str,
	) -> PcResult<()> {
		let mut entries = self.entries.lock();
		entries.insert(
			key(plugin_name, "", config_name),
			StubEntry {
				value: Some(value.into()),
				content_type: content_type.as_i64(),
				is_editable: editable,
				user_can_overwrite: true,
			},
		);
		Ok(())
	}

	async fn entry_exists(&self, config_name: &str, plugin_name: &str) -> PcResult<bool> {
		let entries = self.entries.lock();
		Ok(entries.keys().any(|(plugin, _, name)| plugin == plugin_name && name == config_name))
	}

	async fn list_values(
		&self,
		plugin_name: &str,
		user_name: &str,
	) -> PcResult<Vec<CachedConfig>> {
		let entries = self.entries.lock();
		Ok(entries
			.iter()
			.filter(|((plugin, user, _), _)| plugin == plugin_name && user == user_name)
			.map(|((_, _, name), entry)| {
				CachedConfig::new(name, plugin_name, user_name, entry.value.clone())
			})
			.collect())
	}

	async fn read_connection(&self, id: i64) -> PcResult<ConnectionEntry> {
		let connections = self.connections.lock();
		connections.iter().find(|c| c.id == id).cloned().ok_or(Error::NotFound)
	}

	async fn read_connection_by_name(&self, tenant_name: &str) -> PcResult<ConnectionEntry> {
		let connections = self.connections.lock();
		connections.iter().find(|c| &*c.tenant_name == tenant_name).cloned().ok_or(Error::NotFound)
	}

	async fn list_connections(&self) -> PcResult<Vec<ConnectionEntry>> {
		Ok(self.connections.lock().clone())
	}

	async fn save_connection(&self, conn: &ConnectionEntry) -> PcResult<i64> {
		if self.fail_connection_writes {
			return Err(Error::DbError);
		}

		let mut connections = self.connections.lock();
		if conn.id == 0 {
			let id = self.next_connection_id.fetch_add(1, Ordering::SeqCst);
			connections.push(ConnectionEntry { id, ..conn.clone() });
			Ok(id)
		} else {
			if let Some(existing) = connections.iter_mut().find(|c| c.id == conn.id) {
				*existing = conn.clone();
			} else {
				connections.push(conn.clone());
			}
			Ok(conn.id)
		}
	}

	async fn delete_connection(&self, id: i64) -> PcResult<bool> {
		let mut connections = self.connections.lock();
		let before = connections.len();
		connections.retain(|c| c.id != id);
		Ok(before - connections.len() == 1)
	}
}

// vim: ts=4
