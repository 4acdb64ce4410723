// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registered donor and guest profile mutations.
//!
//! Guest profiles are created lazily at booking time. Their
//! (monastery, phone) uniqueness is a database constraint; concurrent
//! creation of the same guest surfaces as a `UniqueViolation` the caller
//! resolves by re-fetching.

use crate::backend::PersistenceBackend;
use crate::data_models::{NewDonor, NewGuestProfile};
use crate::diesel_schema::{donors, guest_profiles};
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

backend_fn! {

/// Insert a registered donor and return its assigned id.
///
/// # Errors
///
/// Returns an error if the database insert fails, including a
/// `UniqueViolation` when the phone is already registered.
pub fn insert_donor(
    conn: &mut _,
    record: &NewDonor,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(donors::table)
        .values(record)
        .execute(conn)?;
    conn.get_last_insert_rowid()
}

}

backend_fn! {

/// Insert a guest profile and return its assigned id.
///
/// # Errors
///
/// Returns an error if the database insert fails, including a
/// `UniqueViolation` when the (monastery, phone) pair already exists.
pub fn insert_guest_profile(
    conn: &mut _,
    record: &NewGuestProfile,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(guest_profiles::table)
        .values(record)
        .execute(conn)?;
    conn.get_last_insert_rowid()
}

}
