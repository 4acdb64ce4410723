// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! DTOs are distinct from domain types and represent the API contract.
//! Dates cross the boundary as ISO 8601 strings so that every caller
//! (HTTP, CLI, tests) speaks the same wire format.

use alms_slot_domain::Occupancy;
use serde::{Deserialize, Serialize};

// ============================================================================
// Monasteries
// ============================================================================

/// API request to create a monastery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMonasteryRequest {
    /// The monastery's display name.
    pub name: String,
    /// Default expected meal count for new slots.
    pub seating_capacity: i32,
    /// Default breakfast time (HH:MM).
    pub breakfast_time: String,
    /// Default lunch time (HH:MM).
    pub lunch_time: String,
    /// Default dinner time (HH:MM).
    pub dinner_time: String,
    /// Days before the donation date at which reminders become due.
    pub reminder_days: Vec<u8>,
    /// Whether donor-initiated bookings require staff approval.
    pub require_monastery_approval: bool,
}

/// API response for a successful monastery creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMonasteryResponse {
    /// The assigned monastery id.
    pub monastery_id: i64,
    /// A success message.
    pub message: String,
}

/// Monastery information for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonasteryInfo {
    /// The monastery id.
    pub monastery_id: i64,
    /// The monastery's display name.
    pub name: String,
    /// Default expected meal count for new slots.
    pub seating_capacity: i32,
    /// Default breakfast time (HH:MM).
    pub breakfast_time: String,
    /// Default lunch time (HH:MM).
    pub lunch_time: String,
    /// Default dinner time (HH:MM).
    pub dinner_time: String,
    /// Days before the donation date at which reminders become due.
    pub reminder_days: Vec<u8>,
    /// Whether donor-initiated bookings require staff approval.
    pub require_monastery_approval: bool,
}

/// API request to replace a monastery's confirmation policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePolicyRequest {
    /// The monastery to update.
    pub monastery_id: i64,
    /// Days before the donation date at which reminders become due.
    pub reminder_days: Vec<u8>,
    /// Whether donor-initiated bookings require staff approval.
    pub require_monastery_approval: bool,
}

/// API response for a policy update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePolicyResponse {
    /// The monastery id.
    pub monastery_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to change a monastery's default time for one meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMealTimeRequest {
    /// The monastery to update.
    pub monastery_id: i64,
    /// The meal whose default time changes.
    pub meal_type: String,
    /// The new default time (HH:MM).
    pub time_of_day: String,
}

/// API response for a meal time update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMealTimeResponse {
    /// The monastery id.
    pub monastery_id: i64,
    /// The meal that was updated.
    pub meal_type: String,
    /// The new default time.
    pub time_of_day: String,
    /// A success message.
    pub message: String,
}

/// API request to register a monastery admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterAdminRequest {
    /// The monastery the admin belongs to.
    pub monastery_id: i64,
    /// The admin's display name.
    pub display_name: String,
}

/// API response for a successful admin registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterAdminResponse {
    /// The assigned admin id.
    pub admin_id: i64,
    /// The monastery id.
    pub monastery_id: i64,
    /// A success message.
    pub message: String,
}

/// Admin information for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminInfo {
    /// The admin id.
    pub admin_id: i64,
    /// The admin's display name.
    pub display_name: String,
}

/// API response for listing a monastery's admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAdminsResponse {
    /// The monastery id.
    pub monastery_id: i64,
    /// The monastery's admins.
    pub admins: Vec<AdminInfo>,
}

// ============================================================================
// Slots
// ============================================================================

/// API request to create a donation slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSlotRequest {
    /// The monastery the slot belongs to.
    pub monastery_id: i64,
    /// The donation date (ISO 8601).
    pub slot_date: String,
    /// The meal type (breakfast, lunch or dinner).
    pub meal_type: String,
    /// Serving time (HH:MM). Defaults to the monastery's current default
    /// for the meal when omitted.
    pub time_of_day: Option<String>,
    /// Expected meal count. Defaults to the monastery's seating capacity.
    pub monks_capacity: Option<i32>,
    /// Advisory cap on distinct bookings.
    pub max_donors: Option<i32>,
    /// Free-form staff notes shown to donors.
    pub booking_notes: Option<String>,
}

/// API response for a successful slot creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSlotResponse {
    /// The assigned slot id.
    pub slot_id: i64,
    /// The monastery id.
    pub monastery_id: i64,
    /// The donation date (ISO 8601).
    pub slot_date: String,
    /// The meal type.
    pub meal_type: String,
    /// The serving time actually stored.
    pub time_of_day: String,
    /// Whether the monastery's default time drifted to this slot's time.
    pub default_time_updated: bool,
    /// A success message.
    pub message: String,
}

/// Slot information with advisory occupancy figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotInfo {
    /// The slot id.
    pub slot_id: i64,
    /// The monastery id.
    pub monastery_id: i64,
    /// The donation date (ISO 8601).
    pub slot_date: String,
    /// The meal type.
    pub meal_type: String,
    /// Serving time (HH:MM).
    pub time_of_day: String,
    /// Expected meal count. Advisory.
    pub monks_capacity: i32,
    /// Advisory cap on distinct bookings.
    pub max_donors: i32,
    /// Soft availability toggle.
    pub is_available: bool,
    /// Free-form staff notes.
    pub booking_notes: Option<String>,
    /// Occupancy recomputed from active bookings at query time.
    pub occupancy: Occupancy,
}

/// API request to update a slot's non-identity fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSlotRequest {
    /// The slot to update.
    pub slot_id: i64,
    /// Serving time (HH:MM).
    pub time_of_day: String,
    /// Expected meal count.
    pub monks_capacity: i32,
    /// Advisory cap on distinct bookings.
    pub max_donors: i32,
    /// Free-form staff notes.
    pub booking_notes: Option<String>,
}

/// API response for a slot update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSlotResponse {
    /// The slot id.
    pub slot_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for an availability toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleAvailabilityResponse {
    /// The slot id.
    pub slot_id: i64,
    /// The availability after the toggle.
    pub is_available: bool,
    /// A success message.
    pub message: String,
}

/// API response for a slot deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSlotResponse {
    /// The deleted slot id.
    pub slot_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to list a monastery's slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSlotsRequest {
    /// The monastery to list slots for.
    pub monastery_id: i64,
    /// Range start, inclusive (ISO 8601).
    pub from_date: String,
    /// Range end, inclusive (ISO 8601).
    pub to_date: String,
}

/// API response for listing slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSlotsResponse {
    /// The monastery id.
    pub monastery_id: i64,
    /// The slots in range, occupancy-annotated.
    pub slots: Vec<SlotInfo>,
}

/// API response for a standalone occupancy query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyResponse {
    /// The slot id.
    pub slot_id: i64,
    /// Occupancy recomputed from active bookings at query time.
    pub occupancy: Occupancy,
}

/// API request to bulk-generate weekday slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateWeekdaySlotsRequest {
    /// The monastery to generate slots for.
    pub monastery_id: i64,
    /// The first calendar day of the window (ISO 8601).
    pub start_date: String,
    /// Calendar days to cover. Defaults to 30.
    pub days: Option<u16>,
    /// Expected meal count for generated slots. Defaults to the
    /// monastery's seating capacity.
    pub default_capacity: Option<i32>,
    /// Advisory booking cap for generated slots. Defaults to 1.
    pub default_max_donors: Option<i32>,
}

/// API response for a bulk generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateWeekdaySlotsResponse {
    /// The monastery id.
    pub monastery_id: i64,
    /// How many slots this run created.
    pub created: u32,
    /// How many planned slots already existed and were skipped.
    pub skipped: u32,
    /// A success message.
    pub message: String,
}

// ============================================================================
// Identity
// ============================================================================

/// API request to resolve a phone number to an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveIdentityRequest {
    /// The monastery whose guest profiles are in scope.
    pub monastery_id: i64,
    /// The phone number to resolve.
    pub phone: String,
}

/// A resolved identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedIdentity {
    /// A registered donor matched the phone.
    Donor {
        /// The donor id.
        donor_id: i64,
        /// The donor's full name.
        full_name: String,
    },
    /// A monastery-scoped guest profile matched the phone.
    Guest {
        /// The guest profile id.
        guest_profile_id: i64,
        /// The guest's full name.
        full_name: String,
    },
}

/// API response for a successful identity resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveIdentityResponse {
    /// The resolved identity.
    pub identity: ResolvedIdentity,
}

// ============================================================================
// Bookings
// ============================================================================

/// The donor-supplied booking fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPayload {
    /// What food the donor will bring.
    pub food_type: String,
    /// How many servings the donor estimates.
    pub estimated_servings: i32,
    /// Free-form donor notes.
    pub special_notes: Option<String>,
    /// Contact phone for confirmations.
    pub contact_phone: String,
}

/// The identity a booking request is made under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookingIdentityRequest {
    /// An already-resolved registered donor.
    Donor {
        /// The donor id.
        donor_id: i64,
    },
    /// An already-resolved guest profile.
    Guest {
        /// The guest profile id.
        guest_profile_id: i64,
    },
    /// An unresolved guest: the profile is materialized lazily at
    /// booking time (or reused if the phone already has one).
    NewGuest {
        /// The guest's phone number.
        phone: String,
        /// The guest's full name.
        full_name: String,
        /// The guest's email, if supplied.
        email: Option<String>,
    },
}

/// The caller's answer to a duplicate-booking conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictDecision {
    /// Overwrite the mutable fields of the existing booking.
    UpdateExisting,
    /// Keep the existing booking untouched.
    Abort,
}

/// API request to create or update a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrUpdateBookingRequest {
    /// The slot being booked.
    pub slot_id: i64,
    /// The identity making the booking.
    pub identity: BookingIdentityRequest,
    /// The donor-supplied fields.
    pub payload: BookingPayload,
    /// The conflict decision, when the caller is answering a previously
    /// returned conflict. Absent on first submission.
    pub decision: Option<ConflictDecision>,
}

/// Booking information for display and triage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingInfo {
    /// The booking id.
    pub booking_id: i64,
    /// The slot the booking is against.
    pub slot_id: i64,
    /// The donor id, for registered-donor bookings.
    pub donor_id: Option<i64>,
    /// The guest profile id, for guest bookings.
    pub guest_profile_id: Option<i64>,
    /// What food the donor will bring.
    pub food_type: String,
    /// How many servings the donor estimates.
    pub estimated_servings: i32,
    /// Free-form donor notes.
    pub special_notes: Option<String>,
    /// Contact phone for confirmations.
    pub contact_phone: String,
    /// The booking's lifecycle status.
    pub status: String,
    /// When the monastery approved, if it has (RFC 3339).
    pub monastery_approved_at: Option<String>,
    /// When the 5-day confirmation was recorded, if it was (RFC 3339).
    pub confirmed_5_days_at: Option<String>,
    /// When the 1-day confirmation was recorded, if it was (RFC 3339).
    pub confirmed_1_day_at: Option<String>,
    /// Who created the booking.
    pub initiated_by: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last update timestamp (RFC 3339).
    pub updated_at: String,
    /// The outstanding-confirmation label, on triage listings.
    pub classification: Option<String>,
}

/// The outcome of a booking submission.
///
/// `Conflict` replaces the browser-native "already booked, overwrite?"
/// dialog: the caller receives both sides and answers by resubmitting
/// with a `ConflictDecision`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BookingOutcome {
    /// A new booking was inserted.
    Created {
        /// The new booking.
        booking: BookingInfo,
        /// A success message.
        message: String,
    },
    /// The existing booking's mutable fields were overwritten.
    Updated {
        /// The updated booking.
        booking: BookingInfo,
        /// A success message.
        message: String,
    },
    /// The identity already holds an active booking; the caller must
    /// decide between updating it and aborting.
    Conflict {
        /// The identity's existing active booking.
        existing: BookingInfo,
        /// The fields the caller proposed.
        proposed: BookingPayload,
    },
    /// The caller chose to keep the existing booking; nothing was written.
    Aborted {
        /// The untouched existing booking.
        existing: BookingInfo,
    },
}

/// API response for a booking cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelBookingResponse {
    /// The cancelled booking id.
    pub booking_id: i64,
    /// The status after cancellation (always `cancelled`).
    pub status: String,
    /// A success message.
    pub message: String,
}

/// API response for a lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionResponse {
    /// The booking id.
    pub booking_id: i64,
    /// The status after the transition.
    pub status: String,
    /// A success message.
    pub message: String,
}

/// API response for listing a slot's bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSlotBookingsResponse {
    /// The slot id.
    pub slot_id: i64,
    /// Every booking against the slot, cancelled included.
    pub bookings: Vec<BookingInfo>,
}

/// API response for the monastery triage listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMonasteryBookingsResponse {
    /// The monastery id.
    pub monastery_id: i64,
    /// Active bookings, classification-annotated.
    pub bookings: Vec<BookingInfo>,
}

// ============================================================================
// Confirmations
// ============================================================================

/// API request to record a manual confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordConfirmationRequest {
    /// The booking being confirmed.
    pub booking_id: i64,
    /// The confirmation kind (`5_day`, `1_day`, `monastery_approval`).
    pub kind: String,
    /// How the donor was reached (`phone`, `sms`, `in_app`, `in_person`).
    pub method: String,
    /// Optional notes about the contact.
    pub notes: Option<String>,
}

/// API response for a recorded manual confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordConfirmationResponse {
    /// The booking id.
    pub booking_id: i64,
    /// The confirmation kind that was recorded.
    pub kind: String,
    /// The assigned confirmation log entry id.
    pub entry_id: i64,
    /// The booking status after the confirmation.
    pub status: String,
    /// A success message.
    pub message: String,
}

/// One confirmation log entry for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationLogEntryInfo {
    /// The entry id (insertion order).
    pub entry_id: i64,
    /// The recorded reminder kind.
    pub reminder_type: String,
    /// The recording admin's id.
    pub sent_by: i64,
    /// The contact method.
    pub method: String,
    /// Optional notes about the contact.
    pub notes: Option<String>,
    /// When the entry was appended (RFC 3339).
    pub created_at: String,
}

/// API response for a booking's confirmation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationLogResponse {
    /// The booking id.
    pub booking_id: i64,
    /// The log entries, oldest first.
    pub entries: Vec<ConfirmationLogEntryInfo>,
}
