// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Phone-based identity lookups.
//!
//! Resolution order is the caller's concern (registered donors first,
//! then monastery-scoped guest profiles); these queries are the two
//! halves of that lookup.

use crate::diesel_schema::{donors, guest_profiles};
use crate::error::PersistenceError;
use alms_slot_domain::{Donor, GuestProfile};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

/// Diesel Queryable struct for donor rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = donors)]
struct DonorRow {
    donor_id: i64,
    full_name: String,
    phone: String,
    email: Option<String>,
}

/// Diesel Queryable struct for guest profile rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = guest_profiles)]
struct GuestProfileRow {
    guest_profile_id: i64,
    monastery_id: i64,
    phone: String,
    full_name: String,
    email: Option<String>,
}

backend_fn! {

/// Finds a registered donor by phone number.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no registered donor has the phone.
pub fn find_donor_by_phone(
    conn: &mut _,
    phone: &str,
) -> Result<Option<Donor>, PersistenceError> {
    debug!("Looking up registered donor by phone");

    let result: Result<DonorRow, diesel::result::Error> = donors::table
        .filter(donors::phone.eq(phone))
        .select(DonorRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(Donor {
            donor_id: row.donor_id,
            full_name: row.full_name,
            phone: row.phone,
            email: row.email,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

}

backend_fn! {

/// Finds a guest profile by phone, scoped to one monastery.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the monastery has no guest profile for the phone.
pub fn find_guest_profile(
    conn: &mut _,
    monastery_id: i64,
    phone: &str,
) -> Result<Option<GuestProfile>, PersistenceError> {
    debug!("Looking up guest profile by phone for monastery {monastery_id}");

    let result: Result<GuestProfileRow, diesel::result::Error> = guest_profiles::table
        .filter(guest_profiles::monastery_id.eq(monastery_id))
        .filter(guest_profiles::phone.eq(phone))
        .select(GuestProfileRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(GuestProfile {
            guest_profile_id: row.guest_profile_id,
            monastery_id: row.monastery_id,
            phone: row.phone,
            full_name: row.full_name,
            email: row.email,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

}
