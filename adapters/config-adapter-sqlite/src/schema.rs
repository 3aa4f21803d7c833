//! Database schema initialization
//!
//! Creates the configuration entry and connection tables. The entry table
//! enforces the (plugin, user, name) key the service layer relies on for
//! its conditional upsert.

use sqlx::SqlitePool;

pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Configuration entries
	//***********************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS config_entries (
			plugin_name text NOT NULL,
			user_name text NOT NULL DEFAULT '',		-- '' is the global scope
			config_name text NOT NULL,
			config_value text,
			content_type integer NOT NULL DEFAULT 0,
			is_editable boolean NOT NULL DEFAULT TRUE,
			user_can_overwrite boolean NOT NULL DEFAULT TRUE,
			PRIMARY KEY(plugin_name, user_name, config_name)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Connections
	//*************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS connections (
			id integer PRIMARY KEY AUTOINCREMENT,
			tenant_name text NOT NULL,
			tenant_number integer,
			connection_string text,
			connection_type integer
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
