// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! Every variant here is a local, user-actionable outcome: nothing is
//! retried automatically and nothing is fatal to the process. A
//! duplicate-booking conflict is deliberately NOT an error — it is a
//! structured success variant of the booking outcome (see
//! `request_response::BookingOutcome`), so any caller can resolve it
//! without a blocking dialog.

use alms_slot::CoreError;
use alms_slot_domain::DomainError;
use alms_slot_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A slot already exists for the (monastery, date, meal) key.
    DuplicateSlot {
        /// The monastery.
        monastery_id: i64,
        /// The requested date (ISO 8601).
        slot_date: String,
        /// The requested meal type.
        meal_type: String,
    },
    /// Slot deletion blocked by active bookings.
    SlotHasBookings {
        /// The slot.
        slot_id: i64,
        /// How many active bookings block the deletion.
        active_bookings: i64,
    },
    /// No registered donor or guest profile matches the phone.
    ///
    /// Callers proceed to the new-guest path on this error.
    IdentityNotFound {
        /// The phone number that was looked up.
        phone: String,
    },
    /// A booking status transition was requested from a terminal or
    /// incompatible state.
    InvalidTransition {
        /// The booking's current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is rejected.
        reason: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DuplicateSlot {
                monastery_id,
                slot_date,
                meal_type,
            } => {
                write!(
                    f,
                    "A {meal_type} slot already exists for monastery {monastery_id} on {slot_date}"
                )
            }
            Self::SlotHasBookings {
                slot_id,
                active_bookings,
            } => {
                write!(
                    f,
                    "Slot {slot_id} cannot be deleted: {active_bookings} active booking(s) exist"
                )
            }
            Self::IdentityNotFound { phone } => {
                write!(f, "No donor or guest profile found for phone {phone}")
            }
            Self::InvalidTransition { from, to, reason } => {
                write!(f, "Invalid status transition {from} -> {to}: {reason}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidStatusTransition { from, to, reason } => {
            ApiError::InvalidTransition { from, to, reason }
        }
        DomainError::InvalidMealType(value) => ApiError::InvalidInput {
            field: String::from("meal_type"),
            message: format!("Invalid meal type '{value}': must be breakfast, lunch or dinner"),
        },
        DomainError::InvalidBookingStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid booking status '{status}'"),
        },
        DomainError::InvalidServings { servings } => ApiError::InvalidInput {
            field: String::from("estimated_servings"),
            message: format!("Invalid estimated servings: {servings}. Must be greater than 0"),
        },
        DomainError::InvalidPhone(msg) => ApiError::InvalidInput {
            field: String::from("phone"),
            message: msg,
        },
        DomainError::InvalidMealTime(value) => ApiError::InvalidInput {
            field: String::from("time_of_day"),
            message: format!("Invalid meal time '{value}': must be HH:MM"),
        },
        DomainError::InvalidFoodType(msg) => ApiError::InvalidInput {
            field: String::from("food_type"),
            message: msg,
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidReminderKind(value) => ApiError::InvalidInput {
            field: String::from("kind"),
            message: format!("Invalid reminder kind '{value}'"),
        },
        DomainError::InvalidConfirmationMethod(value) => ApiError::InvalidInput {
            field: String::from("method"),
            message: format!("Invalid confirmation method '{value}'"),
        },
        DomainError::InvalidInitiatedBy(value) => ApiError::InvalidInput {
            field: String::from("initiated_by"),
            message: format!("Invalid booking initiator '{value}'"),
        },
        DomainError::InvalidReminderDay { day } => ApiError::InvalidInput {
            field: String::from("reminder_days"),
            message: format!("Invalid reminder day: {day}. Must be between 1 and 30"),
        },
        DomainError::InvalidGenerationWindow { days } => ApiError::InvalidInput {
            field: String::from("days"),
            message: format!("Invalid generation window: {days} days. Must be between 1 and 366"),
        },
        DomainError::InvalidCapacity { capacity } => ApiError::InvalidInput {
            field: String::from("monks_capacity"),
            message: format!("Invalid monks capacity: {capacity}. Must not be negative"),
        },
        DomainError::ConfirmationNotRecordable { status, kind } => ApiError::DomainRuleViolation {
            rule: String::from("confirmation_recordable"),
            message: format!("Cannot record {kind} confirmation on a booking with status {status}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Wraps an unexpected persistence failure as an internal API error.
///
/// Expected persistence outcomes (`UniqueViolation`, `NotFound`) are
/// handled by the individual handlers; everything else is internal.
#[must_use]
pub fn internal_error(context: &str, err: &PersistenceError) -> ApiError {
    ApiError::Internal {
        message: format!("{context}: {err}"),
    }
}
