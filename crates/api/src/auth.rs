// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actors and authorization.
//!
//! Authentication itself lives outside this engine: the transport layer
//! (or a test) decides who is calling and passes the actor explicitly on
//! every call. Nothing here reads ambient session state.

use crate::error::AuthError;

/// Actor roles for authorization.
///
/// Roles determine what actions an actor may perform. Staff-only
/// operations (slot management, workflow transitions, manual
/// confirmations) require the Admin role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Monastery staff with slot and workflow authority.
    Admin,
    /// A donor acting on their own bookings.
    Donor,
}

/// An authenticated actor with an associated role.
///
/// For admins, `id` is the monastery admin id used for attribution
/// (approval stamps, confirmation log entries). For donors it is the
/// donor id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: i64,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: i64, role: Role) -> Self {
        Self { id, role }
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Donor => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Admin"),
            }),
        }
    }

    /// Checks if an actor may manage slots (create, update, toggle, delete,
    /// bulk-generate).
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_slot_management(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "manage_slots")
    }

    /// Checks if an actor may drive the booking workflow (approve,
    /// confirm, delivery outcomes).
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_workflow(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "booking_workflow")
    }

    /// Checks if an actor may record manual confirmations.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_confirmation(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "record_confirmation")
    }

    /// Checks if an actor may administer monastery settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_monastery_settings(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "monastery_settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_passes_all_checks() {
        let admin: AuthenticatedActor = AuthenticatedActor::new(3, Role::Admin);
        assert!(AuthorizationService::authorize_slot_management(&admin).is_ok());
        assert!(AuthorizationService::authorize_workflow(&admin).is_ok());
        assert!(AuthorizationService::authorize_confirmation(&admin).is_ok());
        assert!(AuthorizationService::authorize_monastery_settings(&admin).is_ok());
    }

    #[test]
    fn test_donor_fails_staff_checks() {
        let donor: AuthenticatedActor = AuthenticatedActor::new(42, Role::Donor);
        let result = AuthorizationService::authorize_slot_management(&donor);
        assert!(matches!(
            result,
            Err(AuthError::Unauthorized { .. })
        ));
        assert!(AuthorizationService::authorize_workflow(&donor).is_err());
        assert!(AuthorizationService::authorize_confirmation(&donor).is_err());
    }
}
