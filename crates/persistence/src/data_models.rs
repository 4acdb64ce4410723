// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::diesel_schema::{
    bookings, confirmation_log, donation_slots, donors, guest_profiles, monasteries,
    monastery_admins,
};
use diesel::prelude::*;

/// Insertable monastery row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = monasteries)]
pub struct NewMonastery {
    pub name: String,
    pub seating_capacity: i32,
    pub breakfast_time: String,
    pub lunch_time: String,
    pub dinner_time: String,
    pub confirmation_policy_json: String,
}

/// Insertable monastery admin row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = monastery_admins)]
pub struct NewMonasteryAdmin {
    pub monastery_id: i64,
    pub display_name: String,
}

/// Insertable registered donor row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = donors)]
pub struct NewDonor {
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
}

/// Insertable guest profile row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = guest_profiles)]
pub struct NewGuestProfile {
    pub monastery_id: i64,
    pub phone: String,
    pub full_name: String,
    pub email: Option<String>,
}

/// Insertable donation slot row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = donation_slots)]
pub struct NewSlot {
    pub monastery_id: i64,
    pub slot_date: String,
    pub meal_type: String,
    pub time_of_day: String,
    pub monks_capacity: i32,
    pub max_donors: i32,
    pub is_available: i32,
    pub booking_notes: Option<String>,
}

/// Insertable booking row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBooking {
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

/// Insertable confirmation log row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = confirmation_log)]
pub struct NewConfirmationLogEntry {
    pub booking_id: i64,
    pub reminder_type: String,
    pub sent_by: i64,
    pub sent_by_type: String,
    pub method: String,
    pub notes: Option<String>,
    pub created_at: String,
}

/// A persisted confirmation log entry, with its assigned id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationLogRecord {
    /// The entry's assigned id (insertion order).
    pub entry_id: i64,
    /// The booking the entry belongs to.
    pub booking_id: i64,
    /// The recorded reminder kind (string form).
    pub reminder_type: String,
    /// The recording actor's id.
    pub sent_by: i64,
    /// The recording actor's type.
    pub sent_by_type: String,
    /// The contact method (string form).
    pub method: String,
    /// Optional notes about the contact.
    pub notes: Option<String>,
    /// When the entry was appended (RFC 3339).
    pub created_at: String,
}
