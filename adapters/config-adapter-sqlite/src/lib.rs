//! SQLite-backed store adapter for plugconf.
//!
//! Persists configuration entries and tenant connection descriptors in a
//! single SQLite database. The entry key (plugin, user, name) is declared
//! unique here, so the template-copy / plain-insert / value-update decision
//! collapses into one conditional statement with no race window.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use plugconf_types::prelude::*;

mod config;
mod connection;
mod schema;
mod utils;

use utils::inspect;

#[derive(Debug)]
pub struct ConfigAdapterSqlite {
	db: SqlitePool,
}

impl ConfigAdapterSqlite {
	/// Opens (creating if missing) the database at `path` and bootstraps
	/// the schema
	pub async fn new(path: impl AsRef<Path>) -> PcResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		schema::init_db(&db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		Ok(Self { db })
	}
}

#[async_trait]
impl ConfigAdapter for ConfigAdapterSqlite {
	// Configuration entries
	//***********************
	async fn read_value(
		&self,
		plugin_name: &str,
		user_name: &str,
		config_name: &str,
	) -> PcResult<Option<Box<str>>> {
		config::read_value(&self.db, plugin_name, user_name, config_name).await
	}

	async fn write_value(
		&self,
		plugin_name: &str,
		user_name: &str,
		config_name: &str,
		value: &str,
	) -> PcResult<()> {
		config::write_value(&self.db, plugin_name, user_name, config_name, value).await
	}

	async fn create_entry(
		&self,
		config_name: &str,
		plugin_name: &str,
		content_type: ContentType,
		editable: bool,
		value: &str,
	) -> PcResult<()> {
		config::create_entry(&self.db, config_name, plugin_name, content_type, editable, value)
			.await
	}

	async fn entry_exists(&self, config_name: &str, plugin_name: &str) -> PcResult<bool> {
		config::entry_exists(&self.db, config_name, plugin_name).await
	}

	async fn list_values(
		&self,
		plugin_name: &str,
		user_name: &str,
	) -> PcResult<Vec<CachedConfig>> {
		config::list_values(&self.db, plugin_name, user_name).await
	}

	// Connections
	//*************
	async fn read_connection(&self, id: i64) -> PcResult<ConnectionEntry> {
		connection::read(&self.db, id).await
	}

	async fn read_connection_by_name(&self, tenant_name: &str) -> PcResult<ConnectionEntry> {
		connection::read_by_name(&self.db, tenant_name).await
	}

	async fn list_connections(&self) -> PcResult<Vec<ConnectionEntry>> {
		connection::list(&self.db).await
	}

	async fn save_connection(&self, conn: &ConnectionEntry) -> PcResult<i64> {
		connection::save(&self.db, conn).await
	}

	async fn delete_connection(&self, id: i64) -> PcResult<bool> {
		connection::delete(&self.db, id).await
	}
}

// vim: ts=4
