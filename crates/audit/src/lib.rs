// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use alms_slot_domain::DomainError;
use std::str::FromStr;

/// Represents the entity performing a manual confirmation.
///
/// An actor is any identifiable entity that records a confirmation.
/// In practice this is a monastery admin, but the type also covers
/// system-recorded entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: i64,
    /// The type of actor (e.g., "monastery_admin", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: i64, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// The kind of confirmation being recorded against a booking.
///
/// Each kind owns exactly one timestamp on the booking; recording a
/// confirmation is the only write path for that timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    /// The 5-day advance confirmation call.
    FiveDay,
    /// The 1-day advance confirmation call.
    OneDay,
    /// Monastery approval of the booking.
    MonasteryApproval,
}

impl ReminderKind {
    /// Returns the string representation of the reminder kind.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FiveDay => "5_day",
            Self::OneDay => "1_day",
            Self::MonasteryApproval => "monastery_approval",
        }
    }
}

impl FromStr for ReminderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5_day" => Ok(Self::FiveDay),
            "1_day" => Ok(Self::OneDay),
            "monastery_approval" => Ok(Self::MonasteryApproval),
            _ => Err(DomainError::InvalidReminderKind(s.to_string())),
        }
    }
}

/// How a manual confirmation was performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationMethod {
    /// A phone call.
    Phone,
    /// A text message.
    Sms,
    /// Through the donor-facing application.
    InApp,
    /// Face to face at the monastery.
    InPerson,
}

impl ConfirmationMethod {
    /// Returns the string representation of the method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Sms => "sms",
            Self::InApp => "in_app",
            Self::InPerson => "in_person",
        }
    }
}

impl FromStr for ConfirmationMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phone" => Ok(Self::Phone),
            "sms" => Ok(Self::Sms),
            "in_app" => Ok(Self::InApp),
            "in_person" => Ok(Self::InPerson),
            _ => Err(DomainError::InvalidConfirmationMethod(s.to_string())),
        }
    }
}

/// An immutable record of one manual confirmation action.
///
/// Every recorded confirmation appends exactly one log entry. Entries are
/// append-only: once created they are never mutated or deleted, and the
/// persistence layer exposes no update path for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationLogEntry {
    /// The booking this confirmation was recorded against.
    pub booking_id: i64,
    /// Which confirmation was recorded.
    pub reminder_type: ReminderKind,
    /// Who recorded it.
    pub sent_by: Actor,
    /// How the donor was reached.
    pub method: ConfirmationMethod,
    /// Optional free-form notes about the call.
    pub notes: Option<String>,
}

impl ConfirmationLogEntry {
    /// Creates a new `ConfirmationLogEntry`.
    ///
    /// Once created, a log entry is immutable.
    ///
    /// # Arguments
    ///
    /// * `booking_id` - The booking the confirmation applies to
    /// * `reminder_type` - Which confirmation was recorded
    /// * `sent_by` - The actor recording the confirmation
    /// * `method` - How the donor was reached
    /// * `notes` - Optional notes about the contact
    #[must_use]
    pub const fn new(
        booking_id: i64,
        reminder_type: ReminderKind,
        sent_by: Actor,
        method: ConfirmationMethod,
        notes: Option<String>,
    ) -> Self {
        Self {
            booking_id,
            reminder_type,
            sent_by,
            method,
            notes,
        }
    }
}
