// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking_status::BookingStatus;
use crate::error::DomainError;
use crate::meal::MealType;
use crate::policy::ConfirmationPolicy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// A monastery accepting meal donations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monastery {
    /// The canonical numeric identifier assigned by the database.
    pub monastery_id: i64,
    /// The monastery's display name.
    pub name: String,
    /// Default expected meal count for newly created slots.
    pub seating_capacity: i32,
    /// Default breakfast time (HH:MM).
    pub breakfast_time: String,
    /// Default lunch time (HH:MM).
    pub lunch_time: String,
    /// Default dinner time (HH:MM).
    pub dinner_time: String,
    /// The monastery's confirmation policy.
    pub policy: ConfirmationPolicy,
}

impl Monastery {
    /// Returns the monastery's current default time for a meal type.
    #[must_use]
    pub fn default_time_for(&self, meal_type: MealType) -> &str {
        match meal_type {
            MealType::Breakfast => &self.breakfast_time,
            MealType::Lunch => &self.lunch_time,
            MealType::Dinner => &self.dinner_time,
        }
    }
}

/// A monastery staff member.
///
/// Admins are attribution records, not credentials: authentication lives
/// outside this engine and every operation receives its actor explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonasteryAdmin {
    /// The canonical numeric identifier assigned by the database.
    pub admin_id: i64,
    /// The monastery this admin belongs to.
    pub monastery_id: i64,
    /// The admin's display name.
    pub display_name: String,
}

/// A registered donor profile.
///
/// Registered donors are maintained by the outer platform; this engine
/// reads them for phone-based identity resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donor {
    /// The canonical numeric identifier assigned by the database.
    pub donor_id: i64,
    /// The donor's full name.
    pub full_name: String,
    /// The donor's phone number (lookup key).
    pub phone: String,
    /// The donor's email, if known.
    pub email: Option<String>,
}

/// An unauthenticated donor identity, keyed by phone and scoped to one
/// monastery. Created lazily on first guest booking; later bookings with
/// the same phone resolve to the same profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestProfile {
    /// The canonical numeric identifier assigned by the database.
    pub guest_profile_id: i64,
    /// The monastery this profile is scoped to.
    pub monastery_id: i64,
    /// The guest's phone number (lookup key within the monastery).
    pub phone: String,
    /// The guest's full name.
    pub full_name: String,
    /// The guest's email, if supplied.
    pub email: Option<String>,
}

/// The identity a booking is held under.
///
/// A booking references exactly one of a registered donor or a guest
/// profile; the tagged union makes the mutual exclusion structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingIdentity {
    /// A registered donor, by donor id.
    Donor(i64),
    /// A guest profile, by guest profile id.
    Guest(i64),
}

impl BookingIdentity {
    /// The donor id column value for this identity.
    #[must_use]
    pub const fn donor_id(&self) -> Option<i64> {
        match self {
            Self::Donor(id) => Some(*id),
            Self::Guest(_) => None,
        }
    }

    /// The guest profile id column value for this identity.
    #[must_use]
    pub const fn guest_profile_id(&self) -> Option<i64> {
        match self {
            Self::Donor(_) => None,
            Self::Guest(id) => Some(*id),
        }
    }

    /// Reassembles an identity from the two nullable columns.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly one of the two ids is present.
    pub fn from_columns(
        donor_id: Option<i64>,
        guest_profile_id: Option<i64>,
    ) -> Result<Self, DomainError> {
        match (donor_id, guest_profile_id) {
            (Some(id), None) => Ok(Self::Donor(id)),
            (None, Some(id)) => Ok(Self::Guest(id)),
            _ => Err(DomainError::InvalidInitiatedBy(String::from(
                "booking must reference exactly one of donor or guest profile",
            ))),
        }
    }
}

/// Who created a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitiatedBy {
    /// The donor created the booking themselves.
    Donor,
    /// Monastery staff created the booking on the donor's behalf.
    MonasteryAdmin,
}

impl InitiatedBy {
    /// Returns the string representation of the initiator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::MonasteryAdmin => "monastery_admin",
        }
    }
}

impl FromStr for InitiatedBy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "donor" => Ok(Self::Donor),
            "monastery_admin" => Ok(Self::MonasteryAdmin),
            _ => Err(DomainError::InvalidInitiatedBy(s.to_string())),
        }
    }
}

/// A bookable (monastery, date, meal) unit.
///
/// At most one slot exists per (monastery, date, meal type); the database
/// enforces this and bulk generation relies on it as its idempotency key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// The canonical numeric identifier assigned by the database.
    pub slot_id: i64,
    /// The monastery this slot belongs to.
    pub monastery_id: i64,
    /// The donation date.
    pub slot_date: Date,
    /// The meal this slot is for.
    pub meal_type: MealType,
    /// Serving time (HH:MM).
    pub time_of_day: String,
    /// Expected meals needed that day. Advisory, never enforced.
    pub monks_capacity: i32,
    /// Cap on distinct bookings. Advisory, never enforced.
    pub max_donors: i32,
    /// Soft availability toggle; disabling does not touch bookings.
    pub is_available: bool,
    /// Free-form staff notes shown to donors.
    pub booking_notes: Option<String>,
}

/// A donor's or guest's claim against a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The canonical numeric identifier assigned by the database.
    pub booking_id: i64,
    /// The slot this booking is against.
    pub slot_id: i64,
    /// The identity holding this booking.
    pub identity: BookingIdentity,
    /// What food the donor will bring.
    pub food_type: String,
    /// How many servings the donor estimates.
    pub estimated_servings: i32,
    /// Free-form donor notes.
    pub special_notes: Option<String>,
    /// Contact phone for confirmations.
    pub contact_phone: String,
    /// The booking's lifecycle status.
    pub status: BookingStatus,
    /// When the monastery approved, if it has (RFC 3339).
    pub monastery_approved_at: Option<String>,
    /// Which admin approved, if any.
    pub monastery_approved_by: Option<i64>,
    /// When the 5-day confirmation was recorded, if it was (RFC 3339).
    pub confirmed_5_days_at: Option<String>,
    /// When the 1-day confirmation was recorded, if it was (RFC 3339).
    pub confirmed_1_day_at: Option<String>,
    /// Who created the booking.
    pub initiated_by: InitiatedBy,
    /// The admin who created the booking, for staff-initiated bookings.
    pub initiated_by_admin_id: Option<i64>,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last update timestamp (RFC 3339).
    pub updated_at: String,
}

impl Booking {
    /// Returns true if the booking counts toward occupancy and identity
    /// uniqueness.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
