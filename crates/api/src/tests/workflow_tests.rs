// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::handlers::{
    approve_booking, cancel_booking, confirm_booking, create_or_update_booking,
    get_confirmation_log, get_occupancy, list_monastery_bookings, mark_delivered,
    mark_not_delivered, record_manual_confirmation,
};
use crate::request_response::{
    BookingIdentityRequest, BookingOutcome, CreateOrUpdateBookingRequest,
    RecordConfirmationRequest,
};
use crate::tests::helpers::{
    NOW, donor_actor, lunch_slot, rice_payload, seed_donor, setup_monastery, test_persistence,
};
use alms_slot_persistence::Persistence;
use time::macros::date;

/// Books the 2024-01-15 lunch slot as a donor. Returns (booking_id, monastery_id, admin).
fn donor_booking(
    persistence: &mut Persistence,
    require_approval: bool,
) -> (i64, i64, crate::auth::AuthenticatedActor) {
    let (monastery_id, admin) = setup_monastery(persistence, require_approval);
    let slot_id = lunch_slot(persistence, monastery_id, &admin, "2024-01-15");
    let donor_id = seed_donor(persistence, "+66 81 234 5678");

    let outcome = create_or_update_booking(
        persistence,
        &CreateOrUpdateBookingRequest {
            slot_id,
            identity: BookingIdentityRequest::Donor { donor_id },
            payload: rice_payload(5),
            decision: None,
        },
        &donor_actor(donor_id),
        NOW,
    )
    .unwrap();

    let booking_id = match outcome {
        BookingOutcome::Created { booking, .. } => booking.booking_id,
        other => panic!("expected created outcome, got {other:?}"),
    };
    (booking_id, monastery_id, admin)
}

#[test]
fn test_approval_scenario() {
    // Monastery requires approval; slot for 2024-01-15 lunch; donor
    // books 5 servings
    let mut persistence = test_persistence();
    let (booking_id, monastery_id, admin) = donor_booking(&mut persistence, true);

    // Pending booking classifies as needing approval
    let listed = list_monastery_bookings(&mut persistence, monastery_id, date!(2024 - 01 - 01))
        .unwrap();
    assert_eq!(listed.bookings.len(), 1);
    assert_eq!(listed.bookings[0].status, "pending");
    assert_eq!(
        listed.bookings[0].classification.as_deref(),
        Some("needs_approval")
    );

    // Staff approves
    let approved = approve_booking(&mut persistence, booking_id, &admin, NOW).unwrap();
    assert_eq!(approved.status, "monastery_approved");

    // Outside any reminder window the booking now classifies confirmed
    let listed = list_monastery_bookings(&mut persistence, monastery_id, date!(2024 - 01 - 01))
        .unwrap();
    assert_eq!(
        listed.bookings[0].classification.as_deref(),
        Some("confirmed")
    );
    assert_eq!(
        listed.bookings[0].monastery_approved_at.as_deref(),
        Some(NOW)
    );
}

#[test]
fn test_no_approval_policy_skips_the_approval_label() {
    let mut persistence = test_persistence();
    let (_booking_id, monastery_id, _admin) = donor_booking(&mut persistence, false);

    let listed = list_monastery_bookings(&mut persistence, monastery_id, date!(2024 - 01 - 01))
        .unwrap();
    assert_eq!(
        listed.bookings[0].classification.as_deref(),
        Some("confirmed")
    );
}

#[test]
fn test_reminder_windows_drive_classification() {
    let mut persistence = test_persistence();
    let (booking_id, monastery_id, admin) = donor_booking(&mut persistence, true);
    approve_booking(&mut persistence, booking_id, &admin, NOW).unwrap();

    // Five days out: the 5-day confirmation is due
    let listed = list_monastery_bookings(&mut persistence, monastery_id, date!(2024 - 01 - 10))
        .unwrap();
    assert_eq!(
        listed.bookings[0].classification.as_deref(),
        Some("needs_5_day_confirmation")
    );

    // Recording it clears the label
    record_manual_confirmation(
        &mut persistence,
        &RecordConfirmationRequest {
            booking_id,
            kind: String::from("5_day"),
            method: String::from("phone"),
            notes: None,
        },
        &admin,
        "2024-01-10T09:00:00Z",
    )
    .unwrap();
    let listed = list_monastery_bookings(&mut persistence, monastery_id, date!(2024 - 01 - 10))
        .unwrap();
    assert_eq!(
        listed.bookings[0].classification.as_deref(),
        Some("confirmed")
    );

    // One day out: the 1-day confirmation is due
    let listed = list_monastery_bookings(&mut persistence, monastery_id, date!(2024 - 01 - 14))
        .unwrap();
    assert_eq!(
        listed.bookings[0].classification.as_deref(),
        Some("needs_1_day_confirmation")
    );

    record_manual_confirmation(
        &mut persistence,
        &RecordConfirmationRequest {
            booking_id,
            kind: String::from("1_day"),
            method: String::from("sms"),
            notes: None,
        },
        &admin,
        "2024-01-14T09:00:00Z",
    )
    .unwrap();
    let listed = list_monastery_bookings(&mut persistence, monastery_id, date!(2024 - 01 - 14))
        .unwrap();
    assert_eq!(
        listed.bookings[0].classification.as_deref(),
        Some("confirmed")
    );
}

#[test]
fn test_manual_approval_confirmation_transitions_and_logs() {
    let mut persistence = test_persistence();
    let (booking_id, _monastery_id, admin) = donor_booking(&mut persistence, true);

    let response = record_manual_confirmation(
        &mut persistence,
        &RecordConfirmationRequest {
            booking_id,
            kind: String::from("monastery_approval"),
            method: String::from("in_person"),
            notes: Some(String::from("Approved at the office")),
        },
        &admin,
        NOW,
    )
    .unwrap();

    assert_eq!(response.status, "monastery_approved");

    let log = get_confirmation_log(&mut persistence, booking_id).unwrap();
    assert_eq!(log.entries.len(), 1);
    assert_eq!(log.entries[0].reminder_type, "monastery_approval");
    assert_eq!(log.entries[0].sent_by, admin.id);
    assert_eq!(log.entries[0].method, "in_person");
    assert_eq!(
        log.entries[0].notes.as_deref(),
        Some("Approved at the office")
    );
}

#[test]
fn test_full_lifecycle_to_delivered() {
    let mut persistence = test_persistence();
    let (booking_id, _monastery_id, admin) = donor_booking(&mut persistence, true);

    approve_booking(&mut persistence, booking_id, &admin, NOW).unwrap();
    let confirmed = confirm_booking(&mut persistence, booking_id, &admin, NOW).unwrap();
    assert_eq!(confirmed.status, "confirmed");

    let delivered = mark_delivered(&mut persistence, booking_id, &admin, NOW).unwrap();
    assert_eq!(delivered.status, "delivered");

    // Terminal: nothing further is allowed
    let result = cancel_booking(&mut persistence, booking_id, NOW);
    assert!(matches!(result, Err(ApiError::InvalidTransition { .. })));
}

#[test]
fn test_delivery_outcomes_allowed_without_donor_confirmation() {
    let mut persistence = test_persistence();
    let (booking_id, _monastery_id, admin) = donor_booking(&mut persistence, true);

    approve_booking(&mut persistence, booking_id, &admin, NOW).unwrap();
    // Donor confirmation skipped: delivery outcome still recordable
    let outcome = mark_not_delivered(&mut persistence, booking_id, &admin, NOW).unwrap();
    assert_eq!(outcome.status, "not_delivered");
}

#[test]
fn test_delivery_outcome_rejected_from_pending() {
    let mut persistence = test_persistence();
    let (booking_id, _monastery_id, admin) = donor_booking(&mut persistence, true);

    let result = mark_delivered(&mut persistence, booking_id, &admin, NOW);
    assert!(matches!(
        result,
        Err(ApiError::InvalidTransition { from, .. }) if from == "pending"
    ));
}

#[test]
fn test_cancellation_excludes_booking_from_occupancy() {
    let mut persistence = test_persistence();
    let (booking_id, monastery_id, _admin) = donor_booking(&mut persistence, true);

    let cancelled = cancel_booking(&mut persistence, booking_id, NOW).unwrap();
    assert_eq!(cancelled.status, "cancelled");

    let listed = list_monastery_bookings(&mut persistence, monastery_id, date!(2024 - 01 - 01))
        .unwrap();
    assert!(listed.bookings.is_empty());

    // Occupancy drops to zero immediately
    let slot_id = {
        let mut persistence_slots = crate::handlers::list_slots(
            &mut persistence,
            &crate::request_response::ListSlotsRequest {
                monastery_id,
                from_date: String::from("2024-01-01"),
                to_date: String::from("2024-01-31"),
            },
        )
        .unwrap();
        persistence_slots.slots.pop().unwrap().slot_id
    };
    let occupancy = get_occupancy(&mut persistence, slot_id).unwrap().occupancy;
    assert_eq!(occupancy.monks_fed, 0);
    assert_eq!(occupancy.current_bookings, 0);
}

#[test]
fn test_donor_cannot_drive_the_workflow() {
    let mut persistence = test_persistence();
    let (booking_id, _monastery_id, _admin) = donor_booking(&mut persistence, true);
    let donor = donor_actor(42);

    assert!(matches!(
        approve_booking(&mut persistence, booking_id, &donor, NOW),
        Err(ApiError::Unauthorized { .. })
    ));
    assert!(matches!(
        record_manual_confirmation(
            &mut persistence,
            &RecordConfirmationRequest {
                booking_id,
                kind: String::from("1_day"),
                method: String::from("phone"),
                notes: None,
            },
            &donor,
            NOW,
        ),
        Err(ApiError::Unauthorized { .. })
    ));
}

#[test]
fn test_invalid_kind_and_method_strings_are_rejected() {
    let mut persistence = test_persistence();
    let (booking_id, _monastery_id, admin) = donor_booking(&mut persistence, true);

    let bad_kind = record_manual_confirmation(
        &mut persistence,
        &RecordConfirmationRequest {
            booking_id,
            kind: String::from("2_day"),
            method: String::from("phone"),
            notes: None,
        },
        &admin,
        NOW,
    );
    assert!(matches!(bad_kind, Err(ApiError::InvalidInput { .. })));

    let bad_method = record_manual_confirmation(
        &mut persistence,
        &RecordConfirmationRequest {
            booking_id,
            kind: String::from("1_day"),
            method: String::from("carrier_pigeon"),
            notes: None,
        },
        &admin,
        NOW,
    );
    assert!(matches!(bad_method, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_confirmation_rejected_on_settled_booking() {
    let mut persistence = test_persistence();
    let (booking_id, _monastery_id, admin) = donor_booking(&mut persistence, true);

    approve_booking(&mut persistence, booking_id, &admin, NOW).unwrap();
    mark_delivered(&mut persistence, booking_id, &admin, NOW).unwrap();

    let result = record_manual_confirmation(
        &mut persistence,
        &RecordConfirmationRequest {
            booking_id,
            kind: String::from("1_day"),
            method: String::from("phone"),
            notes: None,
        },
        &admin,
        NOW,
    );
    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
}
