// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Append-only confirmation log writes.
//!
//! The log has exactly one mutation: append. No update or delete path
//! exists anywhere in this crate.

use crate::backend::PersistenceBackend;
use crate::data_models::NewConfirmationLogEntry;
use crate::diesel_schema::confirmation_log;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

backend_fn! {

/// Append a confirmation log entry and return its assigned id.
///
/// # Errors
///
/// Returns an error if the database insert fails.
pub fn append_confirmation_entry(
    conn: &mut _,
    record: &NewConfirmationLogEntry,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(confirmation_log::table)
        .values(record)
        .execute(conn)?;
    conn.get_last_insert_rowid()
}

}
