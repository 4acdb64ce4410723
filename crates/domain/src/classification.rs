// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Outstanding-confirmation classification.
//!
//! The classification is a read-side triage label derived from the
//! monastery's confirmation policy and a booking's status and
//! confirmation timestamps. It is recomputed on every query and never
//! stored; no scheduler advances it.

use crate::booking_status::BookingStatus;
use crate::policy::ConfirmationPolicy;
use serde::{Deserialize, Serialize};
use time::Date;

/// The outstanding action currently due for a booking, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutstandingConfirmation {
    /// Monastery approval has not been given yet.
    NeedsApproval,
    /// The 1-day confirmation call is due.
    Needs1DayConfirmation,
    /// The 5-day confirmation call is due.
    Needs5DayConfirmation,
    /// No confirmation is currently outstanding.
    Confirmed,
}

impl OutstandingConfirmation {
    /// Returns the string representation of the classification.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NeedsApproval => "needs_approval",
            Self::Needs1DayConfirmation => "needs_1_day_confirmation",
            Self::Needs5DayConfirmation => "needs_5_day_confirmation",
            Self::Confirmed => "confirmed",
        }
    }
}

impl std::fmt::Display for OutstandingConfirmation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies the outstanding confirmation for a booking.
///
/// This function is pure and deterministic: given the same inputs it
/// always produces the same label. The clock is an explicit argument.
///
/// Priority order: approval first, then the 1-day window (which also
/// covers overdue and same-day bookings), then the 5-day window (exact
/// match, and only when the policy configures a 5-day reminder).
///
/// # Arguments
///
/// * `status` - The booking's current lifecycle status
/// * `donation_date` - The date of the booked slot
/// * `today` - The date to classify against
/// * `policy` - The monastery's confirmation policy
/// * `confirmed_5_days` - Whether the 5-day confirmation has been recorded
/// * `confirmed_1_day` - Whether the 1-day confirmation has been recorded
#[must_use]
pub fn classify(
    status: BookingStatus,
    donation_date: Date,
    today: Date,
    policy: &ConfirmationPolicy,
    confirmed_5_days: bool,
    confirmed_1_day: bool,
) -> OutstandingConfirmation {
    let days_until: i64 = (donation_date - today).whole_days();

    if status == BookingStatus::Pending && policy.require_monastery_approval {
        OutstandingConfirmation::NeedsApproval
    } else if days_until <= 1 && !confirmed_1_day {
        OutstandingConfirmation::Needs1DayConfirmation
    } else if days_until == 5 && policy.has_reminder_day(5) && !confirmed_5_days {
        OutstandingConfirmation::Needs5DayConfirmation
    } else {
        OutstandingConfirmation::Confirmed
    }
}
