// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Active-booking aggregation for occupancy figures.
//!
//! Occupancy is never stored: these queries read the serving counts of a
//! slot's non-cancelled bookings on every call and the domain layer does
//! the arithmetic. Recomputing per read trades an aggregation query for
//! the entire class of increment/decrement drift bugs.

use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

backend_fn! {

/// Returns the estimated servings of each active booking on a slot.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn slot_active_servings(
    conn: &mut _,
    slot_id: i64,
) -> Result<Vec<i32>, PersistenceError> {
    Ok(bookings::table
        .filter(bookings::donation_slot_id.eq(slot_id))
        .filter(bookings::status.ne("cancelled"))
        .select(bookings::estimated_servings)
        .load(conn)?)
}

}

backend_fn! {

/// Counts the active bookings on a slot.
///
/// Used by slot deletion to refuse removing a claimed slot.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_active_bookings(
    conn: &mut _,
    slot_id: i64,
) -> Result<i64, PersistenceError> {
    Ok(bookings::table
        .filter(bookings::donation_slot_id.eq(slot_id))
        .filter(bookings::status.ne("cancelled"))
        .count()
        .get_result(conn)?)
}

}
