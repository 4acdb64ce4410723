// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Donation slot queries.

use crate::diesel_schema::donation_slots;
use crate::error::PersistenceError;
use alms_slot_domain::{MealType, Slot, parse_date};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use std::str::FromStr;

/// Diesel Queryable struct for slot rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = donation_slots)]
pub(crate) struct SlotRow {
    pub slot_id: i64,
    pub monastery_id: i64,
    pub slot_date: String,
    pub meal_type: String,
    pub time_of_day: String,
    pub monks_capacity: i32,
    pub max_donors: i32,
    pub is_available: i32,
    pub booking_notes: Option<String>,
}

impl SlotRow {
    pub(crate) fn into_domain(self) -> Result<Slot, PersistenceError> {
        Ok(Slot {
            slot_id: self.slot_id,
            monastery_id: self.monastery_id,
            slot_date: parse_date(&self.slot_date)?,
            meal_type: MealType::from_str(&self.meal_type)?,
            time_of_day: self.time_of_day,
            monks_capacity: self.monks_capacity,
            max_donors: self.max_donors,
            is_available: self.is_available != 0,
            booking_notes: self.booking_notes,
        })
    }
}

backend_fn! {

/// Retrieves a slot by id.
///
/// # Errors
///
/// Returns an error if the slot is not found or its row cannot be
/// mapped back to a domain value.
pub fn get_slot(
    conn: &mut _,
    slot_id: i64,
) -> Result<Slot, PersistenceError> {
    let row: SlotRow = donation_slots::table
        .filter(donation_slots::slot_id.eq(slot_id))
        .select(SlotRow::as_select())
        .first(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => {
                PersistenceError::NotFound(format!("Slot {slot_id} not found"))
            }
            other => PersistenceError::from(other),
        })?;

    row.into_domain()
}

}

backend_fn! {

/// Lists a monastery's slots within an inclusive date range.
///
/// Dates are stored as ISO 8601 strings, so lexicographic range filters
/// match chronological order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `monastery_id` - The monastery to list slots for
/// * `from_date` - Range start, inclusive (ISO 8601)
/// * `to_date` - Range end, inclusive (ISO 8601)
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be mapped.
pub fn list_slots(
    conn: &mut _,
    monastery_id: i64,
    from_date: &str,
    to_date: &str,
) -> Result<Vec<Slot>, PersistenceError> {
    let rows: Vec<SlotRow> = donation_slots::table
        .filter(donation_slots::monastery_id.eq(monastery_id))
        .filter(donation_slots::slot_date.ge(from_date))
        .filter(donation_slots::slot_date.le(to_date))
        .order((donation_slots::slot_date.asc(), donation_slots::slot_id.asc()))
        .select(SlotRow::as_select())
        .load(conn)?;

    rows.into_iter().map(SlotRow::into_domain).collect()
}

}
