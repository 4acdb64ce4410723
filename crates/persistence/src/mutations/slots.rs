// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Donation slot mutations.
//!
//! Slot identity (monastery, date, meal) is protected by a unique index;
//! `insert_slot` surfaces collisions as `UniqueViolation` and callers
//! (single creation and the bulk generator alike) decide what that means.

use crate::backend::PersistenceBackend;
use crate::data_models::NewSlot;
use crate::diesel_schema::donation_slots;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

backend_fn! {

/// Insert a donation slot and return its assigned id.
///
/// # Errors
///
/// Returns an error if the database insert fails, including a
/// `UniqueViolation` when a slot already exists for the
/// (monastery, date, meal) key.
pub fn insert_slot(
    conn: &mut _,
    record: &NewSlot,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(donation_slots::table)
        .values(record)
        .execute(conn)?;
    conn.get_last_insert_rowid()
}

}

backend_fn! {

/// Update a slot's non-identity fields.
///
/// The (monastery, date, meal) identity is deliberately not updatable:
/// changing it could violate slot uniqueness.
///
/// # Errors
///
/// Returns an error if the slot doesn't exist or the update fails.
pub fn update_slot_fields(
    conn: &mut _,
    slot_id: i64,
    time_of_day: &str,
    monks_capacity: i32,
    max_donors: i32,
    booking_notes: Option<&str>,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(
        donation_slots::table.filter(donation_slots::slot_id.eq(slot_id)),
    )
    .set((
        donation_slots::time_of_day.eq(time_of_day),
        donation_slots::monks_capacity.eq(monks_capacity),
        donation_slots::max_donors.eq(max_donors),
        donation_slots::booking_notes.eq(booking_notes.map(ToString::to_string)),
    ))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Slot {slot_id} not found"
        )));
    }
    Ok(())
}

}

backend_fn! {

/// Set a slot's availability toggle.
///
/// Disabling a slot does not touch its bookings.
///
/// # Errors
///
/// Returns an error if the slot doesn't exist or the update fails.
pub fn set_slot_availability(
    conn: &mut _,
    slot_id: i64,
    is_available: bool,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(
        donation_slots::table.filter(donation_slots::slot_id.eq(slot_id)),
    )
    .set(donation_slots::is_available.eq(i32::from(is_available)))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Slot {slot_id} not found"
        )));
    }
    Ok(())
}

}

backend_fn! {

/// Delete a slot row.
///
/// The caller checks for active bookings first; this function only
/// removes the row.
///
/// # Errors
///
/// Returns an error if the slot doesn't exist or the delete fails.
pub fn delete_slot(
    conn: &mut _,
    slot_id: i64,
) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(
        donation_slots::table.filter(donation_slots::slot_id.eq(slot_id)),
    )
    .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Slot {slot_id} not found"
        )));
    }
    Ok(())
}

}
