// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers are the engine's port: every operation the UI (or any other
//! caller) may perform is a function here taking the persistence adapter,
//! a request DTO and an explicit actor. The clock is also explicit —
//! `now` (RFC 3339) for write stamps, `today` for classification — so
//! every handler is deterministic given its arguments.

use crate::auth::{AuthenticatedActor, AuthorizationService, Role};
use crate::error::{ApiError, internal_error, translate_core_error, translate_domain_error};
use crate::request_response::{
    AdminInfo, BookingIdentityRequest, BookingInfo, BookingOutcome, BookingPayload,
    CancelBookingResponse, ConfirmationLogEntryInfo, ConfirmationLogResponse, ConflictDecision,
    CreateMonasteryRequest, CreateMonasteryResponse, CreateOrUpdateBookingRequest,
    CreateSlotRequest, CreateSlotResponse, DeleteSlotResponse, GenerateWeekdaySlotsRequest,
    GenerateWeekdaySlotsResponse, ListAdminsResponse, ListMonasteryBookingsResponse,
    ListSlotBookingsResponse, ListSlotsRequest, ListSlotsResponse, MonasteryInfo,
    OccupancyResponse, RecordConfirmationRequest, RecordConfirmationResponse,
    RegisterAdminRequest, RegisterAdminResponse, ResolveIdentityRequest, ResolveIdentityResponse,
    ResolvedIdentity, SlotInfo, ToggleAvailabilityResponse, TransitionResponse,
    UpdateMealTimeRequest, UpdateMealTimeResponse, UpdatePolicyRequest, UpdatePolicyResponse,
    UpdateSlotRequest, UpdateSlotResponse,
};
use alms_slot::{
    BookingDraft, BookingInitiator, BookingPlan, DuplicateDecision, TransitionOp,
    apply_transition, plan_booking, record_manual_confirmation as core_record_manual_confirmation,
    weekday_slot_plan,
};
use alms_slot_audit::{ConfirmationMethod, ReminderKind};
use alms_slot_domain::{
    Booking, BookingIdentity, BookingStatus, ConfirmationPolicy, MealType, Monastery, Occupancy,
    Slot, classify, format_date, parse_date, validate_capacity, validate_meal_time, validate_name,
    validate_phone,
};
use alms_slot_persistence::{
    NewGuestProfile, NewMonastery, NewMonasteryAdmin, NewSlot, Persistence, PersistenceError,
};
use std::str::FromStr;
use time::Date;
use tracing::info;

// ============================================================================
// Shared helpers
// ============================================================================

fn monastery_not_found(monastery_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Monastery"),
        message: format!("Monastery {monastery_id} does not exist"),
    }
}

fn slot_not_found(slot_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Slot"),
        message: format!("Slot {slot_id} does not exist"),
    }
}

fn booking_not_found(booking_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Booking"),
        message: format!("Booking {booking_id} does not exist"),
    }
}

fn load_monastery(
    persistence: &mut Persistence,
    monastery_id: i64,
) -> Result<Monastery, ApiError> {
    persistence.get_monastery(monastery_id).map_err(|e| match e {
        PersistenceError::NotFound(_) => monastery_not_found(monastery_id),
        other => internal_error("Failed to load monastery", &other),
    })
}

fn load_slot(persistence: &mut Persistence, slot_id: i64) -> Result<Slot, ApiError> {
    persistence.get_slot(slot_id).map_err(|e| match e {
        PersistenceError::NotFound(_) => slot_not_found(slot_id),
        other => internal_error("Failed to load slot", &other),
    })
}

fn load_booking(persistence: &mut Persistence, booking_id: i64) -> Result<Booking, ApiError> {
    persistence.get_booking(booking_id).map_err(|e| match e {
        PersistenceError::NotFound(_) => booking_not_found(booking_id),
        other => internal_error("Failed to load booking", &other),
    })
}

fn booking_info(booking: Booking, classification: Option<String>) -> BookingInfo {
    BookingInfo {
        booking_id: booking.booking_id,
        slot_id: booking.slot_id,
        donor_id: booking.identity.donor_id(),
        guest_profile_id: booking.identity.guest_profile_id(),
        food_type: booking.food_type,
        estimated_servings: booking.estimated_servings,
        special_notes: booking.special_notes,
        contact_phone: booking.contact_phone,
        status: booking.status.as_str().to_string(),
        monastery_approved_at: booking.monastery_approved_at,
        confirmed_5_days_at: booking.confirmed_5_days_at,
        confirmed_1_day_at: booking.confirmed_1_day_at,
        initiated_by: booking.initiated_by.as_str().to_string(),
        created_at: booking.created_at,
        updated_at: booking.updated_at,
        classification,
    }
}

fn slot_info(persistence: &mut Persistence, slot: Slot) -> Result<SlotInfo, ApiError> {
    let servings: Vec<i32> = persistence
        .slot_active_servings(slot.slot_id)
        .map_err(|e| internal_error("Failed to compute occupancy", &e))?;
    let occupancy: Occupancy = Occupancy::from_servings(slot.monks_capacity, &servings);
    let slot_date: String = format_date(slot.slot_date).map_err(translate_domain_error)?;

    Ok(SlotInfo {
        slot_id: slot.slot_id,
        monastery_id: slot.monastery_id,
        slot_date,
        meal_type: slot.meal_type.as_str().to_string(),
        time_of_day: slot.time_of_day,
        monks_capacity: slot.monks_capacity,
        max_donors: slot.max_donors,
        is_available: slot.is_available,
        booking_notes: slot.booking_notes,
        occupancy,
    })
}

// ============================================================================
// Monasteries
// ============================================================================

/// Creates a monastery.
///
/// # Errors
///
/// Returns an error if any field fails validation or persistence fails.
pub fn create_monastery(
    persistence: &mut Persistence,
    request: &CreateMonasteryRequest,
) -> Result<CreateMonasteryResponse, ApiError> {
    validate_name(&request.name).map_err(translate_domain_error)?;
    validate_capacity(request.seating_capacity).map_err(translate_domain_error)?;
    for time in [
        &request.breakfast_time,
        &request.lunch_time,
        &request.dinner_time,
    ] {
        validate_meal_time(time).map_err(translate_domain_error)?;
    }

    let policy: ConfirmationPolicy = ConfirmationPolicy {
        reminder_days: request.reminder_days.clone(),
        require_monastery_approval: request.require_monastery_approval,
    };
    policy.validate().map_err(translate_domain_error)?;
    let policy_json: String = serde_json::to_string(&policy).map_err(|e| ApiError::Internal {
        message: format!("Failed to serialize policy: {e}"),
    })?;

    let monastery_id: i64 = persistence
        .create_monastery(&NewMonastery {
            name: request.name.clone(),
            seating_capacity: request.seating_capacity,
            breakfast_time: request.breakfast_time.clone(),
            lunch_time: request.lunch_time.clone(),
            dinner_time: request.dinner_time.clone(),
            confirmation_policy_json: policy_json,
        })
        .map_err(|e| internal_error("Failed to create monastery", &e))?;

    info!("Created monastery {monastery_id} ('{}')", request.name);

    Ok(CreateMonasteryResponse {
        monastery_id,
        message: format!("Successfully created monastery '{}'", request.name),
    })
}

/// Retrieves a monastery for display.
///
/// # Errors
///
/// Returns an error if the monastery does not exist.
pub fn get_monastery(
    persistence: &mut Persistence,
    monastery_id: i64,
) -> Result<MonasteryInfo, ApiError> {
    let monastery: Monastery = load_monastery(persistence, monastery_id)?;

    Ok(MonasteryInfo {
        monastery_id: monastery.monastery_id,
        name: monastery.name,
        seating_capacity: monastery.seating_capacity,
        breakfast_time: monastery.breakfast_time,
        lunch_time: monastery.lunch_time,
        dinner_time: monastery.dinner_time,
        reminder_days: monastery.policy.reminder_days,
        require_monastery_approval: monastery.policy.require_monastery_approval,
    })
}

/// Replaces a monastery's confirmation policy.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The policy fails validation
/// - The monastery does not exist
pub fn update_confirmation_policy(
    persistence: &mut Persistence,
    request: &UpdatePolicyRequest,
    actor: &AuthenticatedActor,
) -> Result<UpdatePolicyResponse, ApiError> {
    AuthorizationService::authorize_monastery_settings(actor)?;

    let policy: ConfirmationPolicy = ConfirmationPolicy {
        reminder_days: request.reminder_days.clone(),
        require_monastery_approval: request.require_monastery_approval,
    };
    policy.validate().map_err(translate_domain_error)?;

    persistence
        .update_confirmation_policy(request.monastery_id, &policy)
        .map_err(|e| match e {
            PersistenceError::NotFound(_) => monastery_not_found(request.monastery_id),
            other => internal_error("Failed to update policy", &other),
        })?;

    Ok(UpdatePolicyResponse {
        monastery_id: request.monastery_id,
        message: format!(
            "Updated confirmation policy for monastery {}",
            request.monastery_id
        ),
    })
}

/// Changes a monastery's default time for one meal.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The meal type or time is invalid
/// - The monastery does not exist
pub fn update_meal_time(
    persistence: &mut Persistence,
    request: &UpdateMealTimeRequest,
    actor: &AuthenticatedActor,
) -> Result<UpdateMealTimeResponse, ApiError> {
    AuthorizationService::authorize_monastery_settings(actor)?;

    let meal_type: MealType =
        MealType::from_str(&request.meal_type).map_err(translate_domain_error)?;
    validate_meal_time(&request.time_of_day).map_err(translate_domain_error)?;

    persistence
        .update_default_meal_time(request.monastery_id, meal_type, &request.time_of_day)
        .map_err(|e| match e {
            PersistenceError::NotFound(_) => monastery_not_found(request.monastery_id),
            other => internal_error("Failed to update meal time", &other),
        })?;

    Ok(UpdateMealTimeResponse {
        monastery_id: request.monastery_id,
        meal_type: meal_type.as_str().to_string(),
        time_of_day: request.time_of_day.clone(),
        message: format!(
            "Default {} time for monastery {} is now {}",
            meal_type, request.monastery_id, request.time_of_day
        ),
    })
}

/// Registers a monastery admin.
///
/// # Errors
///
/// Returns an error if the name is invalid or the monastery does not exist.
pub fn register_admin(
    persistence: &mut Persistence,
    request: &RegisterAdminRequest,
) -> Result<RegisterAdminResponse, ApiError> {
    validate_name(&request.display_name).map_err(translate_domain_error)?;
    load_monastery(persistence, request.monastery_id)?;

    let admin_id: i64 = persistence
        .create_admin(&NewMonasteryAdmin {
            monastery_id: request.monastery_id,
            display_name: request.display_name.clone(),
        })
        .map_err(|e| internal_error("Failed to register admin", &e))?;

    Ok(RegisterAdminResponse {
        admin_id,
        monastery_id: request.monastery_id,
        message: format!("Registered admin '{}'", request.display_name),
    })
}

/// Lists a monastery's admins.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_admins(
    persistence: &mut Persistence,
    monastery_id: i64,
) -> Result<ListAdminsResponse, ApiError> {
    let admins = persistence
        .list_admins(monastery_id)
        .map_err(|e| internal_error("Failed to list admins", &e))?;

    Ok(ListAdminsResponse {
        monastery_id,
        admins: admins
            .into_iter()
            .map(|admin| AdminInfo {
                admin_id: admin.admin_id,
                display_name: admin.display_name,
            })
            .collect(),
    })
}

// ============================================================================
// Slots
// ============================================================================

/// Creates a donation slot.
///
/// When the requested serving time differs from the monastery's current
/// default for the meal, the default is updated as a side effect — new
/// slot creation is how defaults drift over time.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - Any field fails validation
/// - A slot already exists for the (monastery, date, meal) key
pub fn create_slot(
    persistence: &mut Persistence,
    request: &CreateSlotRequest,
    actor: &AuthenticatedActor,
) -> Result<CreateSlotResponse, ApiError> {
    AuthorizationService::authorize_slot_management(actor)?;

    let slot_date: Date = parse_date(&request.slot_date).map_err(translate_domain_error)?;
    let meal_type: MealType =
        MealType::from_str(&request.meal_type).map_err(translate_domain_error)?;

    let monastery: Monastery = load_monastery(persistence, request.monastery_id)?;

    let time_of_day: String = match &request.time_of_day {
        Some(time) => {
            validate_meal_time(time).map_err(translate_domain_error)?;
            time.clone()
        }
        None => monastery.default_time_for(meal_type).to_string(),
    };
    let monks_capacity: i32 = request.monks_capacity.unwrap_or(monastery.seating_capacity);
    validate_capacity(monks_capacity).map_err(translate_domain_error)?;
    let max_donors: i32 = request.max_donors.unwrap_or(1);

    let slot_date_str: String = format_date(slot_date).map_err(translate_domain_error)?;
    let slot_id: i64 = persistence
        .create_slot(&NewSlot {
            monastery_id: request.monastery_id,
            slot_date: slot_date_str.clone(),
            meal_type: meal_type.as_str().to_string(),
            time_of_day: time_of_day.clone(),
            monks_capacity,
            max_donors,
            is_available: 1,
            booking_notes: request.booking_notes.clone(),
        })
        .map_err(|e| match e {
            // The unique index is the authority on slot identity
            PersistenceError::UniqueViolation(_) => ApiError::DuplicateSlot {
                monastery_id: request.monastery_id,
                slot_date: slot_date_str.clone(),
                meal_type: meal_type.as_str().to_string(),
            },
            other => internal_error("Failed to create slot", &other),
        })?;

    // Default drift: only after the constraint accepted the slot
    let default_time_updated: bool = time_of_day != monastery.default_time_for(meal_type);
    if default_time_updated {
        persistence
            .update_default_meal_time(request.monastery_id, meal_type, &time_of_day)
            .map_err(|e| internal_error("Failed to update default meal time", &e))?;
        info!(
            "Monastery {} default {} time drifted to {}",
            request.monastery_id, meal_type, time_of_day
        );
    }

    Ok(CreateSlotResponse {
        slot_id,
        monastery_id: request.monastery_id,
        slot_date: slot_date_str,
        meal_type: meal_type.as_str().to_string(),
        time_of_day,
        default_time_updated,
        message: format!("Created {meal_type} slot for {}", request.slot_date),
    })
}

/// Updates a slot's non-identity fields.
///
/// The (monastery, date, meal) identity is not updatable; changing it
/// could violate slot uniqueness.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - Any field fails validation
/// - The slot does not exist
pub fn update_slot(
    persistence: &mut Persistence,
    request: &UpdateSlotRequest,
    actor: &AuthenticatedActor,
) -> Result<UpdateSlotResponse, ApiError> {
    AuthorizationService::authorize_slot_management(actor)?;

    validate_meal_time(&request.time_of_day).map_err(translate_domain_error)?;
    validate_capacity(request.monks_capacity).map_err(translate_domain_error)?;

    persistence
        .update_slot(
            request.slot_id,
            &request.time_of_day,
            request.monks_capacity,
            request.max_donors,
            request.booking_notes.as_deref(),
        )
        .map_err(|e| match e {
            PersistenceError::NotFound(_) => slot_not_found(request.slot_id),
            other => internal_error("Failed to update slot", &other),
        })?;

    Ok(UpdateSlotResponse {
        slot_id: request.slot_id,
        message: format!("Updated slot {}", request.slot_id),
    })
}

/// Flips a slot's availability toggle.
///
/// Existing bookings are unaffected.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The slot does not exist
pub fn toggle_availability(
    persistence: &mut Persistence,
    slot_id: i64,
    actor: &AuthenticatedActor,
) -> Result<ToggleAvailabilityResponse, ApiError> {
    AuthorizationService::authorize_slot_management(actor)?;

    let slot: Slot = load_slot(persistence, slot_id)?;
    let is_available: bool = !slot.is_available;

    persistence
        .set_slot_availability(slot_id, is_available)
        .map_err(|e| internal_error("Failed to toggle availability", &e))?;

    Ok(ToggleAvailabilityResponse {
        slot_id,
        is_available,
        message: format!(
            "Slot {slot_id} is now {}",
            if is_available { "available" } else { "unavailable" }
        ),
    })
}

/// Deletes a slot.
///
/// Deletion is blocked while the slot has active bookings; staff must
/// cancel or move them first.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The slot does not exist
/// - The slot has active bookings
pub fn delete_slot(
    persistence: &mut Persistence,
    slot_id: i64,
    actor: &AuthenticatedActor,
) -> Result<DeleteSlotResponse, ApiError> {
    AuthorizationService::authorize_slot_management(actor)?;

    load_slot(persistence, slot_id)?;

    let active_bookings: i64 = persistence
        .count_active_bookings(slot_id)
        .map_err(|e| internal_error("Failed to count bookings", &e))?;
    if active_bookings > 0 {
        return Err(ApiError::SlotHasBookings {
            slot_id,
            active_bookings,
        });
    }

    persistence
        .delete_slot(slot_id)
        .map_err(|e| internal_error("Failed to delete slot", &e))?;

    Ok(DeleteSlotResponse {
        slot_id,
        message: format!("Deleted slot {slot_id}"),
    })
}

/// Lists a monastery's slots in a date range, occupancy-annotated.
///
/// # Errors
///
/// Returns an error if the dates are invalid or the query fails.
pub fn list_slots(
    persistence: &mut Persistence,
    request: &ListSlotsRequest,
) -> Result<ListSlotsResponse, ApiError> {
    let from: Date = parse_date(&request.from_date).map_err(translate_domain_error)?;
    let to: Date = parse_date(&request.to_date).map_err(translate_domain_error)?;
    let from_str: String = format_date(from).map_err(translate_domain_error)?;
    let to_str: String = format_date(to).map_err(translate_domain_error)?;

    let slots: Vec<Slot> = persistence
        .list_slots(request.monastery_id, &from_str, &to_str)
        .map_err(|e| internal_error("Failed to list slots", &e))?;

    let mut annotated: Vec<SlotInfo> = Vec::with_capacity(slots.len());
    for slot in slots {
        annotated.push(slot_info(persistence, slot)?);
    }

    Ok(ListSlotsResponse {
        monastery_id: request.monastery_id,
        slots: annotated,
    })
}

/// Returns a slot's occupancy, recomputed from its active bookings.
///
/// # Errors
///
/// Returns an error if the slot does not exist.
pub fn get_occupancy(
    persistence: &mut Persistence,
    slot_id: i64,
) -> Result<OccupancyResponse, ApiError> {
    let slot: Slot = load_slot(persistence, slot_id)?;
    let servings: Vec<i32> = persistence
        .slot_active_servings(slot_id)
        .map_err(|e| internal_error("Failed to compute occupancy", &e))?;

    Ok(OccupancyResponse {
        slot_id,
        occupancy: Occupancy::from_servings(slot.monks_capacity, &servings),
    })
}

/// Bulk-generates breakfast/lunch/dinner slots for every weekday in a
/// window, using the monastery's current default meal times.
///
/// Existing slots are skipped, not overwritten: the unique index rejects
/// the insert and the rejection is counted as a skip, which keeps the
/// operation idempotent and safe to re-run — including concurrently.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The start date or window is invalid
/// - The monastery does not exist
pub fn generate_weekday_slots(
    persistence: &mut Persistence,
    request: &GenerateWeekdaySlotsRequest,
    actor: &AuthenticatedActor,
) -> Result<GenerateWeekdaySlotsResponse, ApiError> {
    AuthorizationService::authorize_slot_management(actor)?;

    let start_date: Date = parse_date(&request.start_date).map_err(translate_domain_error)?;
    let days: u16 = request.days.unwrap_or(30);
    let plan = weekday_slot_plan(start_date, days).map_err(translate_core_error)?;

    let monastery: Monastery = load_monastery(persistence, request.monastery_id)?;
    let capacity: i32 = request
        .default_capacity
        .unwrap_or(monastery.seating_capacity);
    validate_capacity(capacity).map_err(translate_domain_error)?;
    let max_donors: i32 = request.default_max_donors.unwrap_or(1);

    let mut created: u32 = 0;
    let mut skipped: u32 = 0;
    for planned in &plan {
        let slot_date: String = format_date(planned.slot_date).map_err(translate_domain_error)?;
        let record: NewSlot = NewSlot {
            monastery_id: request.monastery_id,
            slot_date,
            meal_type: planned.meal_type.as_str().to_string(),
            time_of_day: monastery.default_time_for(planned.meal_type).to_string(),
            monks_capacity: capacity,
            max_donors,
            is_available: 1,
            booking_notes: None,
        };
        match persistence.create_slot(&record) {
            Ok(_) => created += 1,
            // Already exists (possibly created by a concurrent run)
            Err(PersistenceError::UniqueViolation(_)) => skipped += 1,
            Err(e) => return Err(internal_error("Failed to create slot", &e)),
        }
    }

    info!(
        "Bulk generation for monastery {}: {created} created, {skipped} skipped",
        request.monastery_id
    );

    Ok(GenerateWeekdaySlotsResponse {
        monastery_id: request.monastery_id,
        created,
        skipped,
        message: format!("Generated {created} slot(s), skipped {skipped} existing"),
    })
}

// ============================================================================
// Identity
// ============================================================================

/// Resolves a phone number to a registered donor or a guest profile.
///
/// Lookup order: registered donors first, then guest profiles scoped to
/// the monastery. The resolver never creates anything; on
/// `IdentityNotFound` the caller proceeds to the new-guest path and the
/// profile is materialized at booking time.
///
/// # Errors
///
/// Returns an error if:
/// - The phone is invalid
/// - No identity matches (`IdentityNotFound`)
pub fn resolve_identity(
    persistence: &mut Persistence,
    request: &ResolveIdentityRequest,
) -> Result<ResolveIdentityResponse, ApiError> {
    validate_phone(&request.phone).map_err(translate_domain_error)?;

    if let Some(donor) = persistence
        .find_donor_by_phone(&request.phone)
        .map_err(|e| internal_error("Failed to look up donor", &e))?
    {
        return Ok(ResolveIdentityResponse {
            identity: ResolvedIdentity::Donor {
                donor_id: donor.donor_id,
                full_name: donor.full_name,
            },
        });
    }

    if let Some(guest) = persistence
        .find_guest_profile(request.monastery_id, &request.phone)
        .map_err(|e| internal_error("Failed to look up guest profile", &e))?
    {
        return Ok(ResolveIdentityResponse {
            identity: ResolvedIdentity::Guest {
                guest_profile_id: guest.guest_profile_id,
                full_name: guest.full_name,
            },
        });
    }

    Err(ApiError::IdentityNotFound {
        phone: request.phone.clone(),
    })
}

// ============================================================================
// Bookings
// ============================================================================

fn materialize_identity(
    persistence: &mut Persistence,
    monastery_id: i64,
    identity: &BookingIdentityRequest,
) -> Result<BookingIdentity, ApiError> {
    match identity {
        BookingIdentityRequest::Donor { donor_id } => Ok(BookingIdentity::Donor(*donor_id)),
        BookingIdentityRequest::Guest { guest_profile_id } => {
            Ok(BookingIdentity::Guest(*guest_profile_id))
        }
        BookingIdentityRequest::NewGuest {
            phone,
            full_name,
            email,
        } => {
            validate_phone(phone).map_err(translate_domain_error)?;
            validate_name(full_name).map_err(translate_domain_error)?;

            // The same phone may already have a profile here; reuse it
            if let Some(existing) = persistence
                .find_guest_profile(monastery_id, phone)
                .map_err(|e| internal_error("Failed to look up guest profile", &e))?
            {
                return Ok(BookingIdentity::Guest(existing.guest_profile_id));
            }

            let record: NewGuestProfile = NewGuestProfile {
                monastery_id,
                phone: phone.clone(),
                full_name: full_name.clone(),
                email: email.clone(),
            };
            match persistence.create_guest_profile(&record) {
                Ok(guest_profile_id) => Ok(BookingIdentity::Guest(guest_profile_id)),
                // A concurrent booking created the profile first: adopt it
                Err(PersistenceError::UniqueViolation(_)) => {
                    let winner = persistence
                        .find_guest_profile(monastery_id, phone)
                        .map_err(|e| internal_error("Failed to re-fetch guest profile", &e))?
                        .ok_or_else(|| ApiError::Internal {
                            message: String::from(
                                "Guest profile vanished after unique violation",
                            ),
                        })?;
                    Ok(BookingIdentity::Guest(winner.guest_profile_id))
                }
                Err(e) => Err(internal_error("Failed to create guest profile", &e)),
            }
        }
    }
}

/// Creates or updates a booking.
///
/// When the identity already holds an active booking on the slot, the
/// result is `BookingOutcome::Conflict` carrying both sides — never a
/// silent overwrite and never a silent duplicate. The caller answers by
/// resubmitting with a decision. No capacity ceiling is enforced at any
/// point: over-booking succeeds and only the advisory occupancy flag
/// changes.
///
/// Bookings submitted by an Admin actor are created on the donor's
/// behalf and are born approved; donor submissions start `pending`.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The booking request
/// * `actor` - The submitting actor (Admin ⇒ staff-initiated booking)
/// * `now` - The current timestamp (RFC 3339)
///
/// # Errors
///
/// Returns an error if:
/// - The slot does not exist
/// - The payload or guest fields fail validation
pub fn create_or_update_booking(
    persistence: &mut Persistence,
    request: &CreateOrUpdateBookingRequest,
    actor: &AuthenticatedActor,
    now: &str,
) -> Result<BookingOutcome, ApiError> {
    let slot: Slot = load_slot(persistence, request.slot_id)?;
    let identity: BookingIdentity =
        materialize_identity(persistence, slot.monastery_id, &request.identity)?;

    let existing: Option<Booking> = persistence
        .find_active_booking(request.slot_id, identity)
        .map_err(|e| internal_error("Failed to look up existing booking", &e))?;

    let draft: BookingDraft = BookingDraft {
        food_type: request.payload.food_type.clone(),
        estimated_servings: request.payload.estimated_servings,
        special_notes: request.payload.special_notes.clone(),
        contact_phone: request.payload.contact_phone.clone(),
    };
    let initiator: BookingInitiator = match actor.role {
        Role::Admin => BookingInitiator::MonasteryAdmin { admin_id: actor.id },
        Role::Donor => BookingInitiator::Donor,
    };
    let decision: Option<DuplicateDecision> = request.decision.map(|d| match d {
        ConflictDecision::UpdateExisting => DuplicateDecision::UpdateExisting,
        ConflictDecision::Abort => DuplicateDecision::Abort,
    });

    let plan: BookingPlan = plan_booking(existing, identity, draft, initiator, decision, now)
        .map_err(translate_core_error)?;

    match plan {
        BookingPlan::Insert(insert_plan) => {
            match persistence.create_booking_from_plan(request.slot_id, &insert_plan, now) {
                Ok(booking_id) => {
                    let booking: Booking = load_booking(persistence, booking_id)?;
                    info!("Created booking {booking_id} on slot {}", request.slot_id);
                    Ok(BookingOutcome::Created {
                        booking: booking_info(booking, None),
                        message: format!("Booked slot {}", request.slot_id),
                    })
                }
                // Lost the check-then-insert race: surface the winner as
                // the conflict the pre-check would have caught
                Err(PersistenceError::UniqueViolation(_)) => {
                    let winner: Booking = persistence
                        .find_active_booking(request.slot_id, identity)
                        .map_err(|e| internal_error("Failed to re-fetch booking", &e))?
                        .ok_or_else(|| ApiError::Internal {
                            message: String::from("Booking vanished after unique violation"),
                        })?;
                    Ok(BookingOutcome::Conflict {
                        existing: booking_info(winner, None),
                        proposed: request.payload.clone(),
                    })
                }
                Err(e) => Err(internal_error("Failed to create booking", &e)),
            }
        }
        BookingPlan::Update { booking_id, draft } => {
            persistence
                .update_booking_draft(
                    booking_id,
                    &draft.food_type,
                    draft.estimated_servings,
                    draft.special_notes.as_deref(),
                    &draft.contact_phone,
                    now,
                )
                .map_err(|e| internal_error("Failed to update booking", &e))?;
            let booking: Booking = load_booking(persistence, booking_id)?;
            Ok(BookingOutcome::Updated {
                booking: booking_info(booking, None),
                message: format!("Updated booking {booking_id}"),
            })
        }
        BookingPlan::Conflict { existing, proposed } => Ok(BookingOutcome::Conflict {
            existing: booking_info(existing, None),
            proposed: BookingPayload {
                food_type: proposed.food_type,
                estimated_servings: proposed.estimated_servings,
                special_notes: proposed.special_notes,
                contact_phone: proposed.contact_phone,
            },
        }),
        BookingPlan::Aborted { existing } => Ok(BookingOutcome::Aborted {
            existing: booking_info(existing, None),
        }),
    }
}

/// Cancels a booking.
///
/// Cancellation is just another transition; the booking row is kept and
/// occupancy figures exclude it immediately. Donors may cancel their own
/// bookings, so no role check applies here.
///
/// # Errors
///
/// Returns an error if:
/// - The booking does not exist
/// - The booking is already in a terminal state
pub fn cancel_booking(
    persistence: &mut Persistence,
    booking_id: i64,
    now: &str,
) -> Result<CancelBookingResponse, ApiError> {
    let booking: Booking = load_booking(persistence, booking_id)?;
    let outcome =
        apply_transition(&booking, TransitionOp::Cancel, now).map_err(translate_core_error)?;
    persistence
        .apply_transition_outcome(booking_id, &outcome, now)
        .map_err(|e| internal_error("Failed to cancel booking", &e))?;

    Ok(CancelBookingResponse {
        booking_id,
        status: outcome.new_status.as_str().to_string(),
        message: format!("Cancelled booking {booking_id}"),
    })
}

/// Lists every booking against a slot, cancelled included.
///
/// # Errors
///
/// Returns an error if the slot does not exist.
pub fn list_slot_bookings(
    persistence: &mut Persistence,
    slot_id: i64,
) -> Result<ListSlotBookingsResponse, ApiError> {
    load_slot(persistence, slot_id)?;
    let bookings: Vec<Booking> = persistence
        .list_bookings_for_slot(slot_id)
        .map_err(|e| internal_error("Failed to list bookings", &e))?;

    Ok(ListSlotBookingsResponse {
        slot_id,
        bookings: bookings
            .into_iter()
            .map(|booking| booking_info(booking, None))
            .collect(),
    })
}

/// Lists a monastery's active bookings with their outstanding-confirmation
/// classification, for the staff triage view.
///
/// Classification is recomputed from the monastery's policy and each
/// booking's timestamps on every call; `today` is explicit so the result
/// is deterministic.
///
/// # Errors
///
/// Returns an error if the monastery does not exist.
pub fn list_monastery_bookings(
    persistence: &mut Persistence,
    monastery_id: i64,
    today: Date,
) -> Result<ListMonasteryBookingsResponse, ApiError> {
    let monastery: Monastery = load_monastery(persistence, monastery_id)?;
    let bookings = persistence
        .list_bookings_for_monastery(monastery_id)
        .map_err(|e| internal_error("Failed to list bookings", &e))?;

    let annotated: Vec<BookingInfo> = bookings
        .into_iter()
        .map(|(booking, donation_date)| {
            let label = classify(
                booking.status,
                donation_date,
                today,
                &monastery.policy,
                booking.confirmed_5_days_at.is_some(),
                booking.confirmed_1_day_at.is_some(),
            );
            booking_info(booking, Some(label.as_str().to_string()))
        })
        .collect();

    Ok(ListMonasteryBookingsResponse {
        monastery_id,
        bookings: annotated,
    })
}

// ============================================================================
// Workflow
// ============================================================================

fn transition(
    persistence: &mut Persistence,
    booking_id: i64,
    op: TransitionOp,
    now: &str,
) -> Result<TransitionResponse, ApiError> {
    let booking: Booking = load_booking(persistence, booking_id)?;
    let outcome = apply_transition(&booking, op, now).map_err(translate_core_error)?;
    persistence
        .apply_transition_outcome(booking_id, &outcome, now)
        .map_err(|e| internal_error("Failed to persist transition", &e))?;

    Ok(TransitionResponse {
        booking_id,
        status: outcome.new_status.as_str().to_string(),
        message: format!(
            "Booking {booking_id} is now {}",
            outcome.new_status.as_str()
        ),
    })
}

/// Approves a pending booking, stamping the approval fields.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The booking is not `pending`
pub fn approve_booking(
    persistence: &mut Persistence,
    booking_id: i64,
    actor: &AuthenticatedActor,
    now: &str,
) -> Result<TransitionResponse, ApiError> {
    AuthorizationService::authorize_workflow(actor)?;
    transition(
        persistence,
        booking_id,
        TransitionOp::Approve { admin_id: actor.id },
        now,
    )
}

/// Marks an approved booking as donor-confirmed.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The booking is not `monastery_approved`
pub fn confirm_booking(
    persistence: &mut Persistence,
    booking_id: i64,
    actor: &AuthenticatedActor,
    now: &str,
) -> Result<TransitionResponse, ApiError> {
    AuthorizationService::authorize_workflow(actor)?;
    transition(persistence, booking_id, TransitionOp::Confirm, now)
}

/// Records that the meal was delivered.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The booking is not `monastery_approved` or `confirmed`
pub fn mark_delivered(
    persistence: &mut Persistence,
    booking_id: i64,
    actor: &AuthenticatedActor,
    now: &str,
) -> Result<TransitionResponse, ApiError> {
    AuthorizationService::authorize_workflow(actor)?;
    transition(persistence, booking_id, TransitionOp::MarkDelivered, now)
}

/// Records that the meal was not delivered.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The booking is not `monastery_approved` or `confirmed`
pub fn mark_not_delivered(
    persistence: &mut Persistence,
    booking_id: i64,
    actor: &AuthenticatedActor,
    now: &str,
) -> Result<TransitionResponse, ApiError> {
    AuthorizationService::authorize_workflow(actor)?;
    transition(persistence, booking_id, TransitionOp::MarkNotDelivered, now)
}

/// Records a manual confirmation: stamps the corresponding timestamp
/// (and, for `monastery_approval`, transitions the status), then appends
/// a confirmation log entry.
///
/// This is the only write path for the three confirmation timestamps.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The kind or method string is invalid
/// - The booking is settled, or a monastery approval is recorded
///   against a non-pending booking
pub fn record_manual_confirmation(
    persistence: &mut Persistence,
    request: &RecordConfirmationRequest,
    actor: &AuthenticatedActor,
    now: &str,
) -> Result<RecordConfirmationResponse, ApiError> {
    AuthorizationService::authorize_confirmation(actor)?;

    let kind: ReminderKind = ReminderKind::from_str(&request.kind).map_err(translate_domain_error)?;
    let method: ConfirmationMethod =
        ConfirmationMethod::from_str(&request.method).map_err(translate_domain_error)?;

    let booking: Booking = load_booking(persistence, request.booking_id)?;
    let outcome = core_record_manual_confirmation(
        &booking,
        kind,
        actor.id,
        method,
        request.notes.clone(),
    )
    .map_err(translate_core_error)?;

    let entry_id: i64 = persistence
        .apply_confirmation_outcome(&outcome, now)
        .map_err(|e| internal_error("Failed to persist confirmation", &e))?;

    let status: BookingStatus = outcome.new_status.unwrap_or(booking.status);

    Ok(RecordConfirmationResponse {
        booking_id: request.booking_id,
        kind: kind.as_str().to_string(),
        entry_id,
        status: status.as_str().to_string(),
        message: format!(
            "Recorded {} confirmation for booking {}",
            kind.as_str(),
            request.booking_id
        ),
    })
}

/// Returns a booking's confirmation log, oldest entry first.
///
/// # Errors
///
/// Returns an error if the booking does not exist.
pub fn get_confirmation_log(
    persistence: &mut Persistence,
    booking_id: i64,
) -> Result<ConfirmationLogResponse, ApiError> {
    load_booking(persistence, booking_id)?;
    let records = persistence
        .list_confirmation_log(booking_id)
        .map_err(|e| internal_error("Failed to list confirmation log", &e))?;

    Ok(ConfirmationLogResponse {
        booking_id,
        entries: records
            .into_iter()
            .map(|record| ConfirmationLogEntryInfo {
                entry_id: record.entry_id,
                reminder_type: record.reminder_type,
                sent_by: record.sent_by,
                method: record.method,
                notes: record.notes,
                created_at: record.created_at,
            })
            .collect(),
    })
}
