// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking mutations.
//!
//! Bookings are never hard-deleted; cancellation is a status write like
//! any other. One-active-booking-per-identity-per-slot is enforced by
//! partial unique indexes (generated-column indexes on MySQL), so the
//! insert path surfaces lost check-then-insert races as `UniqueViolation`.

use crate::backend::PersistenceBackend;
use crate::data_models::NewBooking;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use alms_slot_audit::ReminderKind;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

backend_fn! {

/// Insert a booking and return its assigned id.
///
/// # Errors
///
/// Returns an error if the database insert fails, including a
/// `UniqueViolation` when the identity already holds an active booking
/// on the slot.
pub fn insert_booking(
    conn: &mut _,
    record: &NewBooking,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(bookings::table)
        .values(record)
        .execute(conn)?;
    conn.get_last_insert_rowid()
}

}

backend_fn! {

/// Overwrite the mutable, donor-supplied fields of a booking.
///
/// Used when the caller resolves a duplicate-booking conflict by
/// choosing "update existing".
///
/// # Errors
///
/// Returns an error if the booking doesn't exist or the update fails.
pub fn update_booking_draft(
    conn: &mut _,
    booking_id: i64,
    food_type: &str,
    estimated_servings: i32,
    special_notes: Option<&str>,
    contact_phone: &str,
    updated_at: &str,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(
        bookings::table.filter(bookings::booking_id.eq(booking_id)),
    )
    .set((
        bookings::food_type.eq(food_type),
        bookings::estimated_servings.eq(estimated_servings),
        bookings::special_notes.eq(special_notes.map(ToString::to_string)),
        bookings::contact_phone.eq(contact_phone),
        bookings::updated_at.eq(updated_at),
    ))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Booking {booking_id} not found"
        )));
    }
    Ok(())
}

}

backend_fn! {

/// Write a booking's lifecycle status, with optional approval stamps.
///
/// Approval transitions carry `monastery_approved_at`/`_by`; all other
/// transitions pass `None` and leave any earlier stamps untouched.
///
/// # Errors
///
/// Returns an error if the booking doesn't exist or the update fails.
pub fn update_booking_status(
    conn: &mut _,
    booking_id: i64,
    status: &str,
    monastery_approved_at: Option<&str>,
    monastery_approved_by: Option<i64>,
    updated_at: &str,
) -> Result<(), PersistenceError> {
    let target = bookings::table.filter(bookings::booking_id.eq(booking_id));
    let updated: usize = if let Some(approved_at) = monastery_approved_at {
        diesel::update(target)
            .set((
                bookings::status.eq(status),
                bookings::monastery_approved_at.eq(approved_at),
                bookings::monastery_approved_by.eq(monastery_approved_by),
                bookings::updated_at.eq(updated_at),
            ))
            .execute(conn)?
    } else {
        diesel::update(target)
            .set((
                bookings::status.eq(status),
                bookings::updated_at.eq(updated_at),
            ))
            .execute(conn)?
    };

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Booking {booking_id} not found"
        )));
    }
    Ok(())
}

}

backend_fn! {

/// Stamp one confirmation timestamp on a booking.
///
/// This is the only write path for the three confirmation timestamps;
/// they are never backfilled by any other mutation.
///
/// # Errors
///
/// Returns an error if the booking doesn't exist or the update fails.
pub fn stamp_confirmation(
    conn: &mut _,
    booking_id: i64,
    kind: ReminderKind,
    stamped_at: &str,
    updated_at: &str,
) -> Result<(), PersistenceError> {
    let target = bookings::table.filter(bookings::booking_id.eq(booking_id));
    let updated: usize = match kind {
        ReminderKind::FiveDay => diesel::update(target)
            .set((
                bookings::confirmed_5_days_at.eq(stamped_at),
                bookings::updated_at.eq(updated_at),
            ))
            .execute(conn)?,
        ReminderKind::OneDay => diesel::update(target)
            .set((
                bookings::confirmed_1_day_at.eq(stamped_at),
                bookings::updated_at.eq(updated_at),
            ))
            .execute(conn)?,
        ReminderKind::MonasteryApproval => diesel::update(target)
            .set((
                bookings::monastery_approved_at.eq(stamped_at),
                bookings::updated_at.eq(updated_at),
            ))
            .execute(conn)?,
    };

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Booking {booking_id} not found"
        )));
    }
    Ok(())
}

}
