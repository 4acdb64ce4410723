// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monastery, confirmation policy and admin mutations.

use crate::backend::PersistenceBackend;
use crate::data_models::{NewMonastery, NewMonasteryAdmin};
use crate::diesel_schema::monasteries;
use crate::error::PersistenceError;
use alms_slot_domain::MealType;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

backend_fn! {

/// Insert a monastery and return its assigned id.
///
/// # Errors
///
/// Returns an error if the database insert fails.
pub fn insert_monastery(
    conn: &mut _,
    record: &NewMonastery,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(monasteries::table)
        .values(record)
        .execute(conn)?;
    conn.get_last_insert_rowid()
}

}

backend_fn! {

/// Insert a monastery admin and return its assigned id.
///
/// # Errors
///
/// Returns an error if the database insert fails.
pub fn insert_admin(
    conn: &mut _,
    record: &NewMonasteryAdmin,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(crate::diesel_schema::monastery_admins::table)
        .values(record)
        .execute(conn)?;
    conn.get_last_insert_rowid()
}

}

backend_fn! {

/// Replace a monastery's confirmation policy.
///
/// The policy is stored as a JSON column; serialization happens in the
/// adapter so this mutation stays a plain column write.
///
/// # Errors
///
/// Returns an error if the monastery doesn't exist or the update fails.
pub fn update_confirmation_policy(
    conn: &mut _,
    monastery_id: i64,
    policy_json: &str,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(
        monasteries::table.filter(monasteries::monastery_id.eq(monastery_id)),
    )
    .set(monasteries::confirmation_policy_json.eq(policy_json))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Monastery {monastery_id} not found"
        )));
    }
    Ok(())
}

}

backend_fn! {

/// Update a monastery's default time for one meal.
///
/// Slot creation calls this when a new slot's time differs from the
/// current default; defaults drift through slot creation over time.
///
/// # Errors
///
/// Returns an error if the monastery doesn't exist or the update fails.
pub fn update_default_meal_time(
    conn: &mut _,
    monastery_id: i64,
    meal_type: MealType,
    time_of_day: &str,
) -> Result<(), PersistenceError> {
    let target = monasteries::table.filter(monasteries::monastery_id.eq(monastery_id));
    let updated: usize = match meal_type {
        MealType::Breakfast => diesel::update(target)
            .set(monasteries::breakfast_time.eq(time_of_day))
            .execute(conn)?,
        MealType::Lunch => diesel::update(target)
            .set(monasteries::lunch_time.eq(time_of_day))
            .execute(conn)?,
        MealType::Dinner => diesel::update(target)
            .set(monasteries::dinner_time.eq(time_of_day))
            .execute(conn)?,
    };

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Monastery {monastery_id} not found"
        )));
    }
    Ok(())
}

}
