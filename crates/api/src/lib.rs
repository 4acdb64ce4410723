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

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    approve_booking, cancel_booking, confirm_booking, create_monastery, create_or_update_booking,
    create_slot, delete_slot, generate_weekday_slots, get_confirmation_log, get_monastery,
    get_occupancy, list_admins, list_monastery_bookings, list_slot_bookings, list_slots,
    mark_delivered, mark_not_delivered, record_manual_confirmation, register_admin,
    resolve_identity, toggle_availability, update_confirmation_policy, update_meal_time,
    update_slot,
};
pub use request_response::{
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
