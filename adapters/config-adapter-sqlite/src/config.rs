//! Configuration entry storage
//!
//! Point lookup, pattern existence probe, scoped enumeration, and the
//! conditional upsert that decides the write shape.

use sqlx::{Row, SqlitePool};

use crate::utils::inspect;
use plugconf_types::prelude::*;

/// Reads the raw value of the (plugin, user, name) entry
pub(crate) async fn read_value(
	db: &SqlitePool,
	plugin_name: &str,
	user_name: &str,
	config_name: &str,
) -> PcResult<Option<Box<str>>> {
	// LIKE keeps the observed matching semantics: pattern characters in the
	// names pass through unescaped and can widen the match
	let row = sqlx::query(
		"SELECT config_value FROM config_entries
		WHERE plugin_name LIKE ?1 AND user_name LIKE ?2 AND config_name LIKE ?3",
	)
	.bind(plugin_name)
	.bind(user_name)
	.bind(config_name)
	.fetch_optional(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	match row {
		Some(row) => row.try_get("config_value").inspect_err(inspect).map_err(|_| Error::DbError),
		None => Ok(None),
	}
}

/// Writes a raw value in one conditional statement: a missing entry is
/// inserted seeded with the metadata of the (plugin, '', name) template
/// when one exists (column defaults otherwise); an existing entry only
/// gets its value column replaced.
pub(crate) async fn write_value(
	db: &SqlitePool,
	plugin_name: &str,
	user_name: &str,
	config_name: &str,
	value: &str,
) -> PcResult<()> {
	sqlx::query(
		"INSERT INTO config_entries
			(plugin_name, user_name, config_name, config_value, content_type, is_editable, user_can_overwrite)
		VALUES (?1, ?2, ?3, ?4,
			coalesce((SELECT content_type FROM config_entries
				WHERE plugin_name = ?1 AND user_name = '' AND config_name = ?3), 0),
			coalesce((SELECT is_editable FROM config_entries
				WHERE plugin_name = ?1 AND user_name = '' AND config_name = ?3), TRUE),
			coalesce((SELECT user_can_overwrite FROM config_entries
				WHERE plugin_name = ?1 AND user_name = '' AND config_name = ?3), TRUE))
		ON CONFLICT (plugin_name, user_name, config_name)
			DO UPDATE SET config_value = excluded.config_value",
	)
	.bind(plugin_name)
	.bind(user_name)
	.bind(config_name)
	.bind(value)
	.execute(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	Ok(())
}

/// Inserts a global template entry. Duplicate keys surface as a store
/// error; guarding against them is the caller's contract.
pub(crate) async fn create_entry(
	db: &SqlitePool,
	config_name: &str,
	plugin_name: &str,
	content_type: ContentType,
	editable: bool,
	value: &str,
) -> PcResult<()> {
	sqlx::query(
		"INSERT INTO config_entries
			(plugin_name, user_name, config_name, config_value, is_editable, content_type)
		VALUES (?1, '', ?2, ?3, ?4, ?5)",
	)
	.bind(plugin_name)
	.bind(config_name)
	.bind(value)
	.bind(editable)
	.bind(content_type.as_i64())
	.execute(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	Ok(())
}

/// Existence probe matched by plugin + name across all user scopes
pub(crate) async fn entry_exists(
	db: &SqlitePool,
	config_name: &str,
	plugin_name: &str,
) -> PcResult<bool> {
	let count: i64 = sqlx::query_scalar(
		"SELECT count(*) FROM config_entries
		WHERE plugin_name LIKE ?1 AND config_name LIKE ?2",
	)
	.bind(plugin_name)
	.bind(config_name)
	.fetch_one(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	Ok(count > 0)
}

/// Lists the entries matching exactly (plugin, user)
pub(crate) async fn list_values(
	db: &SqlitePool,
	plugin_name: &str,
	user_name: &str,
) -> PcResult<Vec<CachedConfig>> {
	let rows = sqlx::query(
		"SELECT config_name, config_value FROM config_entries
		WHERE plugin_name = ?1 AND user_name = ?2",
	)
	.bind(plugin_name)
	.bind(user_name)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	let mut values = Vec::with_capacity(rows.len());
	for row in rows {
		values.push(CachedConfig {
			config_name: row.try_get("config_name").or(Err(Error::DbError))?,
			plugin_name: plugin_name.into(),
			user_name: user_name.into(),
			value: row.try_get("config_value").or(Err(Error::DbError))?,
		});
	}

	Ok(values)
}

// vim: ts=4
