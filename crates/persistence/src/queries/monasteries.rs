// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monastery, confirmation policy and admin queries.

use crate::diesel_schema::{monasteries, monastery_admins};
use crate::error::PersistenceError;
use alms_slot_domain::{ConfirmationPolicy, Monastery, MonasteryAdmin};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

/// Diesel Queryable struct for monastery rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = monasteries)]
struct MonasteryRow {
    monastery_id: i64,
    name: String,
    seating_capacity: i32,
    breakfast_time: String,
    lunch_time: String,
    dinner_time: String,
    confirmation_policy_json: String,
}

impl MonasteryRow {
    fn into_domain(self) -> Result<Monastery, PersistenceError> {
        let policy: ConfirmationPolicy = serde_json::from_str(&self.confirmation_policy_json)?;
        Ok(Monastery {
            monastery_id: self.monastery_id,
            name: self.name,
            seating_capacity: self.seating_capacity,
            breakfast_time: self.breakfast_time,
            lunch_time: self.lunch_time,
            dinner_time: self.dinner_time,
            policy,
        })
    }
}

/// Diesel Queryable struct for admin rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = monastery_admins)]
struct AdminRow {
    admin_id: i64,
    monastery_id: i64,
    display_name: String,
}

impl AdminRow {
    fn into_domain(self) -> MonasteryAdmin {
        MonasteryAdmin {
            admin_id: self.admin_id,
            monastery_id: self.monastery_id,
            display_name: self.display_name,
        }
    }
}

backend_fn! {

/// Retrieves a monastery by id.
///
/// # Errors
///
/// Returns an error if the monastery is not found or the stored policy
/// cannot be deserialized.
pub fn get_monastery(
    conn: &mut _,
    monastery_id: i64,
) -> Result<Monastery, PersistenceError> {
    let row: MonasteryRow = monasteries::table
        .filter(monasteries::monastery_id.eq(monastery_id))
        .select(MonasteryRow::as_select())
        .first(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => PersistenceError::NotFound(format!(
                "Monastery {monastery_id} not found"
            )),
            other => PersistenceError::from(other),
        })?;

    row.into_domain()
}

}

backend_fn! {

/// Retrieves a monastery admin by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the admin is not found.
pub fn get_admin(
    conn: &mut _,
    admin_id: i64,
) -> Result<Option<MonasteryAdmin>, PersistenceError> {
    let result: Result<AdminRow, diesel::result::Error> = monastery_admins::table
        .filter(monastery_admins::admin_id.eq(admin_id))
        .select(AdminRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_domain())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

}

backend_fn! {

/// Lists all admins of a monastery.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_admins(
    conn: &mut _,
    monastery_id: i64,
) -> Result<Vec<MonasteryAdmin>, PersistenceError> {
    let rows: Vec<AdminRow> = monastery_admins::table
        .filter(monastery_admins::monastery_id.eq(monastery_id))
        .order(monastery_admins::admin_id.asc())
        .select(AdminRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(AdminRow::into_domain).collect())
}

}
