// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking lifecycle status and transition logic.
//!
//! This module defines the booking states and valid transitions.
//! Status transitions are actor-initiated only; the system never
//! advances status based on time alone. Confirmation timestamps are
//! tracked separately (see `classification`) and never drive status
//! implicitly.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle states of a booking.
///
/// A booking is created `Pending` (donor-initiated) or directly
/// `MonasteryApproved` (staff-initiated on a donor's behalf).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Awaiting monastery approval.
    Pending,
    /// Monastery staff approved the booking.
    MonasteryApproved,
    /// Donor confirmed they will deliver.
    Confirmed,
    /// The meal was delivered.
    Delivered,
    /// The meal was not delivered.
    NotDelivered,
    /// The booking was cancelled. Cancelled bookings are kept, never deleted.
    Cancelled,
}

impl BookingStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::MonasteryApproved => "monastery_approved",
            Self::Confirmed => "confirmed",
            Self::Delivered => "delivered",
            Self::NotDelivered => "not_delivered",
            Self::Cancelled => "cancelled",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "monastery_approved" => Ok(Self::MonasteryApproved),
            "confirmed" => Ok(Self::Confirmed),
            "delivered" => Ok(Self::Delivered),
            "not_delivered" => Ok(Self::NotDelivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidBookingStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (cannot transition to another state).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::NotDelivered | Self::Cancelled)
    }

    /// Returns true if the booking counts toward slot occupancy.
    ///
    /// Only cancelled bookings are excluded; delivered and not-delivered
    /// bookings still occupied the slot on the donation date.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// Cancellation is allowed from any non-terminal state. Delivery
    /// outcomes are recorded from either `MonasteryApproved` or
    /// `Confirmed`, so a skipped donor confirmation never wedges a booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        // Cancellation is reachable from every non-terminal state
        if new_status == Self::Cancelled {
            return Ok(());
        }

        let valid = match self {
            Self::Pending => matches!(new_status, Self::MonasteryApproved),
            Self::MonasteryApproved => {
                matches!(
                    new_status,
                    Self::Confirmed | Self::Delivered | Self::NotDelivered
                )
            }
            Self::Confirmed => matches!(new_status, Self::Delivered | Self::NotDelivered),
            Self::Delivered | Self::NotDelivered | Self::Cancelled => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by booking lifecycle rules".to_string(),
            })
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
