//! Tenant connection registry: plain CRUD with upsert-by-identity over the
//! shared store.

use std::sync::Arc;

use crate::prelude::*;

/// Service for managing tenant connection descriptors
pub struct ConnectionRegistry {
	store: Arc<dyn ConfigAdapter>,
}

impl ConnectionRegistry {
	pub fn new(store: Arc<dyn ConfigAdapter>) -> Self {
		Self { store }
	}

	/// Gets a connection descriptor by its identity
	pub async fn get(&self, id: i64) -> PcResult<ConnectionEntry> {
		self.store.read_connection(id).await
	}

	/// Gets all connection descriptors
	pub async fn get_all(&self) -> PcResult<Vec<ConnectionEntry>> {
		self.store.list_connections().await
	}

	/// Gets a connection descriptor by its tenant name
	pub async fn get_by_name(&self, tenant_name: &str) -> PcResult<ConnectionEntry> {
		self.store.read_connection_by_name(tenant_name).await
	}

	/// Saves a connection descriptor, assigning a store identity when
	/// `conn.id` is 0.
	///
	/// Degenerate input fails fast with `Error::InvalidArgument` before the
	/// store is touched. A store failure is logged and reported as
	/// `Ok(false)` instead of propagating.
	pub async fn save(&self, conn: &mut ConnectionEntry) -> PcResult<bool> {
		if conn.tenant_name.trim().is_empty() {
			return Err(Error::InvalidArgument("connection tenant name must not be empty".into()));
		}

		match self.store.save_connection(conn).await {
			Ok(id) => {
				conn.id = id;
				Ok(true)
			}
			Err(err) => {
				error!("Error while trying to save connection '{}': {}", conn.tenant_name, err);
				Ok(false)
			}
		}
	}

	/// Deletes the connection descriptor with the given identity; reports
	/// whether exactly one row was removed
	pub async fn delete(&self, id: i64) -> PcResult<bool> {
		self.store.delete_connection(id).await
	}

	/// Deletes the given connection descriptor by its identity
	pub async fn delete_entry(&self, conn: &ConnectionEntry) -> PcResult<bool> {
		self.delete(conn.id).await
	}
}

// vim: ts=4
