// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking lifecycle transitions and manual confirmations.
//!
//! Transitions and confirmation stamps are computed here as pure
//! outcomes; the persistence layer writes them. Status and confirmation
//! timestamps are orthogonal pieces of state: only the read-side
//! classification ever combines them.

use crate::error::CoreError;
use alms_slot_audit::{Actor, ConfirmationLogEntry, ConfirmationMethod, ReminderKind};
use alms_slot_domain::{Booking, BookingStatus, DomainError};

/// A staff-initiated lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOp {
    /// `pending -> monastery_approved`, stamping the approval.
    Approve {
        /// The approving admin.
        admin_id: i64,
    },
    /// `monastery_approved -> confirmed`.
    Confirm,
    /// `{monastery_approved, confirmed} -> delivered`.
    MarkDelivered,
    /// `{monastery_approved, confirmed} -> not_delivered`.
    MarkNotDelivered,
    /// Any non-terminal state `-> cancelled`.
    Cancel,
}

impl TransitionOp {
    /// The status this operation transitions into.
    #[must_use]
    pub const fn target_status(&self) -> BookingStatus {
        match self {
            Self::Approve { .. } => BookingStatus::MonasteryApproved,
            Self::Confirm => BookingStatus::Confirmed,
            Self::MarkDelivered => BookingStatus::Delivered,
            Self::MarkNotDelivered => BookingStatus::NotDelivered,
            Self::Cancel => BookingStatus::Cancelled,
        }
    }
}

/// The writes a validated transition produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    /// The status to write.
    pub new_status: BookingStatus,
    /// The approval timestamp to write, for approvals.
    pub monastery_approved_at: Option<String>,
    /// The approving admin to write, for approvals.
    pub monastery_approved_by: Option<i64>,
}

/// Validates a lifecycle transition and computes its writes.
///
/// # Arguments
///
/// * `booking` - The booking being transitioned
/// * `op` - The requested transition
/// * `now` - The current timestamp (RFC 3339), used for approval stamps
///
/// # Errors
///
/// Returns an error if the booking's current status does not permit the
/// transition (terminal state, or an incompatible source state).
pub fn apply_transition(
    booking: &Booking,
    op: TransitionOp,
    now: &str,
) -> Result<TransitionOutcome, CoreError> {
    let target: BookingStatus = op.target_status();
    booking.status.validate_transition(target)?;

    let outcome: TransitionOutcome = match op {
        TransitionOp::Approve { admin_id } => TransitionOutcome {
            new_status: target,
            monastery_approved_at: Some(now.to_string()),
            monastery_approved_by: Some(admin_id),
        },
        TransitionOp::Confirm
        | TransitionOp::MarkDelivered
        | TransitionOp::MarkNotDelivered
        | TransitionOp::Cancel => TransitionOutcome {
            new_status: target,
            monastery_approved_at: None,
            monastery_approved_by: None,
        },
    };

    Ok(outcome)
}

/// The writes a manual confirmation produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationOutcome {
    /// Which booking timestamp to stamp.
    pub stamp: ReminderKind,
    /// The status to write, when the confirmation also transitions
    /// (monastery approval only).
    pub new_status: Option<BookingStatus>,
    /// The approving admin to write, for monastery approvals.
    pub monastery_approved_by: Option<i64>,
    /// The log entry to append.
    pub log_entry: ConfirmationLogEntry,
}

/// Validates and computes a manual confirmation.
///
/// This is the only write path for the three confirmation timestamps.
/// For `monastery_approval` the booking must be `pending` and the status
/// transitions alongside the stamp; the 5-day and 1-day kinds stamp the
/// timestamp without touching status. Every confirmation appends exactly
/// one log entry.
///
/// # Arguments
///
/// * `booking` - The booking being confirmed
/// * `kind` - Which confirmation is being recorded
/// * `admin_id` - The staff member recording it
/// * `method` - How the donor was reached
/// * `notes` - Optional notes about the contact
///
/// # Errors
///
/// Returns an error if:
/// - The booking is in a terminal state
/// - A monastery approval is recorded against a non-pending booking
pub fn record_manual_confirmation(
    booking: &Booking,
    kind: ReminderKind,
    admin_id: i64,
    method: ConfirmationMethod,
    notes: Option<String>,
) -> Result<ConfirmationOutcome, CoreError> {
    if booking.status.is_terminal() {
        return Err(CoreError::DomainViolation(
            DomainError::ConfirmationNotRecordable {
                status: booking.status.as_str().to_string(),
                kind: kind.as_str().to_string(),
            },
        ));
    }

    let (new_status, monastery_approved_by) = match kind {
        ReminderKind::MonasteryApproval => {
            booking
                .status
                .validate_transition(BookingStatus::MonasteryApproved)?;
            (Some(BookingStatus::MonasteryApproved), Some(admin_id))
        }
        ReminderKind::FiveDay | ReminderKind::OneDay => (None, None),
    };

    let sent_by: Actor = Actor::new(admin_id, String::from("monastery_admin"));
    let log_entry: ConfirmationLogEntry =
        ConfirmationLogEntry::new(booking.booking_id, kind, sent_by, method, notes);

    Ok(ConfirmationOutcome {
        stamp: kind,
        new_status,
        monastery_approved_by,
        log_entry,
    })
}
