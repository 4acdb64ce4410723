// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Confirmation log timeline queries.

use crate::data_models::ConfirmationLogRecord;
use crate::diesel_schema::confirmation_log;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

/// Diesel Queryable struct for confirmation log rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = confirmation_log)]
struct LogRow {
    entry_id: i64,
    booking_id: i64,
    reminder_type: String,
    sent_by: i64,
    sent_by_type: String,
    method: String,
    notes: Option<String>,
    created_at: String,
}

backend_fn! {

/// Lists a booking's confirmation log entries in insertion order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_confirmation_log(
    conn: &mut _,
    booking_id: i64,
) -> Result<Vec<ConfirmationLogRecord>, PersistenceError> {
    let rows: Vec<LogRow> = confirmation_log::table
        .filter(confirmation_log::booking_id.eq(booking_id))
        .order(confirmation_log::entry_id.asc())
        .select(LogRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| ConfirmationLogRecord {
            entry_id: row.entry_id,
            booking_id: row.booking_id,
            reminder_type: row.reminder_type,
            sent_by: row.sent_by,
            sent_by_type: row.sent_by_type,
            method: row.method,
            notes: row.notes,
            created_at: row.created_at,
        })
        .collect())
}

}
