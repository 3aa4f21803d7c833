//! Tenant connection descriptor storage

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::utils::inspect;
use plugconf_types::prelude::*;

fn from_row(row: &SqliteRow) -> PcResult<ConnectionEntry> {
	Ok(ConnectionEntry {
		id: row.try_get("id").or(Err(Error::DbError))?,
		tenant_name: row.try_get("tenant_name").or(Err(Error::DbError))?,
		tenant_number: row.try_get("tenant_number").or(Err(Error::DbError))?,
		connection_string: row.try_get("connection_string").or(Err(Error::DbError))?,
		connection_type: row.try_get("connection_type").or(Err(Error::DbError))?,
	})
}

/// Reads a connection descriptor by its identity
pub(crate) async fn read(db: &SqlitePool, id: i64) -> PcResult<ConnectionEntry> {
	let res = sqlx::query(
		"SELECT id, tenant_name, tenant_number, connection_string, connection_type
		FROM connections WHERE id = ?1",
	)
	.bind(id)
	.fetch_one(db)
	.await;

	match res {
		Ok(row) => from_row(&row),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

/// Reads a connection descriptor by its tenant name
pub(crate) async fn read_by_name(db: &SqlitePool, tenant_name: &str) -> PcResult<ConnectionEntry> {
	let res = sqlx::query(
		"SELECT id, tenant_name, tenant_number, connection_string, connection_type
		FROM connections WHERE tenant_name = ?1",
	)
	.bind(tenant_name)
	.fetch_one(db)
	.await;

	match res {
		Ok(row) => from_row(&row),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

/// Lists all connection descriptors
pub(crate) async fn list(db: &SqlitePool) -> PcResult<Vec<ConnectionEntry>> {
	let rows = sqlx::query(
		"SELECT id, tenant_name, tenant_number, connection_string, connection_type
		FROM connections",
	)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	rows.iter().map(from_row).collect()
}

/// Inserts or updates a connection descriptor; an id of 0 lets the store
/// assign a new identity. Returns the persisted identity.
pub(crate) async fn save(db: &SqlitePool, conn: &ConnectionEntry) -> PcResult<i64> {
	if conn.id == 0 {
		let id: i64 = sqlx::query_scalar(
			"INSERT INTO connections (tenant_name, tenant_number, connection_string, connection_type)
			VALUES (?1, ?2, ?3, ?4) RETURNING id",
		)
		.bind(&conn.tenant_name)
		.bind(conn.tenant_number)
		.bind(&conn.connection_string)
		.bind(conn.connection_type)
		.fetch_one(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

		Ok(id)
	} else {
		sqlx::query(
			"INSERT INTO connections (id, tenant_name, tenant_number, connection_string, connection_type)
			VALUES (?1, ?2, ?3, ?4, ?5)
			ON CONFLICT (id) DO UPDATE SET
				tenant_name = excluded.tenant_name,
				tenant_number = excluded.tenant_number,
				connection_string = excluded.connection_string,
				connection_type = excluded.connection_type",
		)
		.bind(conn.id)
		.bind(&conn.tenant_name)
		.bind(conn.tenant_number)
		.bind(&conn.connection_string)
		.bind(conn.connection_type)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

		Ok(conn.id)
	}
}

/// Deletes the connection descriptor with the given identity
pub(crate) async fn delete(db: &SqlitePool, id: i64) -> PcResult<bool> {
	let res = sqlx::query("DELETE FROM connections WHERE id = ?1")
		.bind(id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(res.rows_affected() == 1)
}

// vim: ts=4
