// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking queries.

use crate::diesel_schema::{bookings, donation_slots};
use crate::error::PersistenceError;
use alms_slot_domain::{
    Booking, BookingIdentity, BookingStatus, InitiatedBy, parse_date,
};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use std::str::FromStr;
use time::Date;

/// Diesel Queryable struct for booking rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = bookings)]
pub(crate) struct BookingRow {
    pub booking_id: i64,
    pub donation_slot_id: i64,
    pub donor_id: Option<i64>,
    pub guest_profile_id: Option<i64>,
    pub food_type: String,
    pub estimated_servings: i32,
    pub special_notes: Option<String>,
    pub contact_phone: String,
    pub status: String,
    pub monastery_approved_at: Option<String>,
    pub monastery_approved_by: Option<i64>,
    pub confirmed_5_days_at: Option<String>,
    pub confirmed_1_day_at: Option<String>,
    pub initiated_by: String,
    pub initiated_by_admin_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl BookingRow {
    pub(crate) fn into_domain(self) -> Result<Booking, PersistenceError> {
        Ok(Booking {
            booking_id: self.booking_id,
            slot_id: self.donation_slot_id,
            identity: BookingIdentity::from_columns(self.donor_id, self.guest_profile_id)?,
            food_type: self.food_type,
            estimated_servings: self.estimated_servings,
            special_notes: self.special_notes,
            contact_phone: self.contact_phone,
            status: BookingStatus::from_str(&self.status)?,
            monastery_approved_at: self.monastery_approved_at,
            monastery_approved_by: self.monastery_approved_by,
            confirmed_5_days_at: self.confirmed_5_days_at,
            confirmed_1_day_at: self.confirmed_1_day_at,
            initiated_by: InitiatedBy::from_str(&self.initiated_by)?,
            initiated_by_admin_id: self.initiated_by_admin_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

backend_fn! {

/// Retrieves a booking by id.
///
/// # Errors
///
/// Returns an error if the booking is not found or its row cannot be
/// mapped back to a domain value.
pub fn get_booking(
    conn: &mut _,
    booking_id: i64,
) -> Result<Booking, PersistenceError> {
    let row: BookingRow = bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .select(BookingRow::as_select())
        .first(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => {
                PersistenceError::NotFound(format!("Booking {booking_id} not found"))
            }
            other => PersistenceError::from(other),
        })?;

    row.into_domain()
}

}

backend_fn! {

/// Finds the identity's active (non-cancelled) booking on a slot, if any.
///
/// This is the pre-check half of the duplicate-booking rule; the unique
/// index on the table covers the race the pre-check cannot see.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be mapped.
/// Returns `Ok(None)` if the identity holds no active booking.
pub fn find_active_booking(
    conn: &mut _,
    slot_id: i64,
    donor_id: Option<i64>,
    guest_profile_id: Option<i64>,
) -> Result<Option<Booking>, PersistenceError> {
    let base = bookings::table
        .filter(bookings::donation_slot_id.eq(slot_id))
        .filter(bookings::status.ne("cancelled"));

    let result: Result<BookingRow, diesel::result::Error> = if let Some(donor_id) = donor_id {
        base.filter(bookings::donor_id.eq(donor_id))
            .select(BookingRow::as_select())
            .first(conn)
    } else if let Some(guest_profile_id) = guest_profile_id {
        base.filter(bookings::guest_profile_id.eq(guest_profile_id))
            .select(BookingRow::as_select())
            .first(conn)
    } else {
        return Err(PersistenceError::QueryFailed(String::from(
            "active booking lookup requires a donor or guest profile id",
        )));
    };

    match result {
        Ok(row) => Ok(Some(row.into_domain()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

}

backend_fn! {

/// Lists every booking against a slot, cancelled included, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn list_bookings_for_slot(
    conn: &mut _,
    slot_id: i64,
) -> Result<Vec<Booking>, PersistenceError> {
    let rows: Vec<BookingRow> = bookings::table
        .filter(bookings::donation_slot_id.eq(slot_id))
        .order(bookings::booking_id.asc())
        .select(BookingRow::as_select())
        .load(conn)?;

    rows.into_iter().map(BookingRow::into_domain).collect()
}

}

backend_fn! {

/// Lists a monastery's active bookings joined with their slot dates.
///
/// The slot date rides along because the outstanding-confirmation
/// classification needs it; fetching it here avoids a per-booking slot
/// lookup on the triage path.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn list_bookings_for_monastery(
    conn: &mut _,
    monastery_id: i64,
) -> Result<Vec<(Booking, Date)>, PersistenceError> {
    let rows: Vec<(BookingRow, String)> = bookings::table
        .inner_join(donation_slots::table)
        .filter(donation_slots::monastery_id.eq(monastery_id))
        .filter(bookings::status.ne("cancelled"))
        .order((donation_slots::slot_date.asc(), bookings::booking_id.asc()))
        .select((BookingRow::as_select(), donation_slots::slot_date))
        .load(conn)?;

    rows.into_iter()
        .map(|(row, slot_date)| {
            let booking: Booking = row.into_domain()?;
            let date: Date = parse_date(&slot_date)?;
            Ok((booking, date))
        })
        .collect()
}

}
