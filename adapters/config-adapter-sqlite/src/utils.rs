//! Shared utilities for the SQLite adapter

use plugconf_types::prelude::*;

pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

// vim: ts=4
