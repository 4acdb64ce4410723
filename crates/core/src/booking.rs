// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The create-or-update booking decision.
//!
//! The ledger never silently overwrites and never silently duplicates:
//! when an identity already holds an active booking on the slot, the
//! caller receives the conflict and must decide. The decision itself is
//! pure; the persistence layer executes the resulting plan and backs it
//! with a uniqueness constraint for the race the pre-check cannot see.

use crate::error::CoreError;
use alms_slot_domain::{
    Booking, BookingIdentity, BookingStatus, InitiatedBy, validate_booking_payload,
};

/// The mutable, donor-supplied fields of a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    /// What food the donor will bring.
    pub food_type: String,
    /// How many servings the donor estimates.
    pub estimated_servings: i32,
    /// Free-form donor notes.
    pub special_notes: Option<String>,
    /// Contact phone for confirmations.
    pub contact_phone: String,
}

/// Who is submitting the booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingInitiator {
    /// The donor themselves.
    Donor,
    /// Monastery staff, booking on the donor's behalf.
    MonasteryAdmin {
        /// The staff member's id.
        admin_id: i64,
    },
}

/// The caller's answer to a duplicate-booking conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateDecision {
    /// Overwrite the mutable fields of the existing booking.
    UpdateExisting,
    /// Keep the existing booking untouched and write nothing.
    Abort,
}

/// A fully determined new booking, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookingPlan {
    /// The identity the booking is held under.
    pub identity: BookingIdentity,
    /// The donor-supplied fields.
    pub draft: BookingDraft,
    /// The initial lifecycle status.
    pub status: BookingStatus,
    /// Who created the booking.
    pub initiated_by: InitiatedBy,
    /// The creating admin, for staff-initiated bookings.
    pub initiated_by_admin_id: Option<i64>,
    /// Approval stamp, pre-filled for staff-initiated bookings.
    pub monastery_approved_at: Option<String>,
    /// Approving admin, pre-filled for staff-initiated bookings.
    pub monastery_approved_by: Option<i64>,
}

/// The outcome of the create-or-update decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingPlan {
    /// No active booking exists for the identity: insert a new one.
    Insert(NewBookingPlan),
    /// The caller chose to update the existing booking's mutable fields.
    Update {
        /// The existing booking to update.
        booking_id: i64,
        /// The replacement fields.
        draft: BookingDraft,
    },
    /// An active booking exists and the caller has not decided yet.
    Conflict {
        /// The identity's existing active booking.
        existing: Booking,
        /// The fields the caller proposed.
        proposed: BookingDraft,
    },
    /// The caller chose to keep the existing booking; nothing is written.
    Aborted {
        /// The untouched existing booking.
        existing: Booking,
    },
}

/// Decides how a booking submission should be executed.
///
/// Staff-initiated bookings are born approved: status
/// `monastery_approved` with the approval stamp and admin pre-filled.
/// Donor-initiated bookings start `pending`. No capacity check happens
/// here or anywhere on the write path; over-booking is advisory only.
///
/// # Arguments
///
/// * `existing` - The identity's active booking on the slot, if any
/// * `identity` - The identity submitting the booking
/// * `draft` - The donor-supplied fields
/// * `initiator` - Who is submitting
/// * `decision` - The caller's conflict decision, if already made
/// * `now` - The current timestamp (RFC 3339), used for approval stamps
///
/// # Errors
///
/// Returns an error if the draft fields fail validation.
pub fn plan_booking(
    existing: Option<Booking>,
    identity: BookingIdentity,
    draft: BookingDraft,
    initiator: BookingInitiator,
    decision: Option<DuplicateDecision>,
    now: &str,
) -> Result<BookingPlan, CoreError> {
    validate_booking_payload(&draft.food_type, draft.estimated_servings, &draft.contact_phone)?;

    if let Some(existing) = existing {
        return Ok(match decision {
            None => BookingPlan::Conflict {
                existing,
                proposed: draft,
            },
            Some(DuplicateDecision::UpdateExisting) => BookingPlan::Update {
                booking_id: existing.booking_id,
                draft,
            },
            Some(DuplicateDecision::Abort) => BookingPlan::Aborted { existing },
        });
    }

    let plan: NewBookingPlan = match initiator {
        BookingInitiator::Donor => NewBookingPlan {
            identity,
            draft,
            status: BookingStatus::Pending,
            initiated_by: InitiatedBy::Donor,
            initiated_by_admin_id: None,
            monastery_approved_at: None,
            monastery_approved_by: None,
        },
        BookingInitiator::MonasteryAdmin { admin_id } => NewBookingPlan {
            identity,
            draft,
            status: BookingStatus::MonasteryApproved,
            initiated_by: InitiatedBy::MonasteryAdmin,
            initiated_by_admin_id: Some(admin_id),
            monastery_approved_at: Some(now.to_string()),
            monastery_approved_by: Some(admin_id),
        },
    };

    Ok(BookingPlan::Insert(plan))
}
