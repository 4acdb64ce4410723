// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    NOW, donor_insert_plan, seed_donor, seed_monastery, seed_slot, test_persistence,
};
use crate::{Persistence, PersistenceError};
use alms_slot::{TransitionOp, apply_transition};
use alms_slot_domain::{BookingIdentity, BookingStatus, Occupancy};

#[test]
fn test_insert_and_get_booking_round_trip() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);
    let slot_id: i64 = seed_slot(&mut persistence, monastery_id, "2024-01-15", "lunch");
    let donor_id: i64 = seed_donor(&mut persistence, "+66 81 234 5678");

    let plan = donor_insert_plan(BookingIdentity::Donor(donor_id), 5);
    let booking_id: i64 = persistence
        .create_booking_from_plan(slot_id, &plan, NOW)
        .unwrap();

    let booking = persistence.get_booking(booking_id).unwrap();
    assert_eq!(booking.slot_id, slot_id);
    assert_eq!(booking.identity, BookingIdentity::Donor(donor_id));
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.estimated_servings, 5);
    assert_eq!(booking.created_at, NOW);
}

#[test]
fn test_second_active_booking_for_identity_is_a_unique_violation() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);
    let slot_id: i64 = seed_slot(&mut persistence, monastery_id, "2024-01-15", "lunch");
    let donor_id: i64 = seed_donor(&mut persistence, "+66 81 234 5678");

    let plan = donor_insert_plan(BookingIdentity::Donor(donor_id), 5);
    persistence
        .create_booking_from_plan(slot_id, &plan, NOW)
        .unwrap();

    // The constraint, not the caller's pre-check, rejects the duplicate
    let result = persistence.create_booking_from_plan(slot_id, &plan, NOW);
    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_cancellation_frees_the_identity_for_a_fresh_booking() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);
    let slot_id: i64 = seed_slot(&mut persistence, monastery_id, "2024-01-15", "lunch");
    let donor_id: i64 = seed_donor(&mut persistence, "+66 81 234 5678");

    let plan = donor_insert_plan(BookingIdentity::Donor(donor_id), 5);
    let first_id: i64 = persistence
        .create_booking_from_plan(slot_id, &plan, NOW)
        .unwrap();

    persistence
        .update_booking_status(first_id, BookingStatus::Cancelled, NOW)
        .unwrap();

    // The partial unique index no longer covers the cancelled row
    let second_id: i64 = persistence
        .create_booking_from_plan(slot_id, &plan, NOW)
        .unwrap();
    assert_ne!(first_id, second_id);
}

#[test]
fn test_find_active_booking_ignores_cancelled() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);
    let slot_id: i64 = seed_slot(&mut persistence, monastery_id, "2024-01-15", "lunch");
    let donor_id: i64 = seed_donor(&mut persistence, "+66 81 234 5678");
    let identity = BookingIdentity::Donor(donor_id);

    assert!(
        persistence
            .find_active_booking(slot_id, identity)
            .unwrap()
            .is_none()
    );

    let plan = donor_insert_plan(identity, 5);
    let booking_id: i64 = persistence
        .create_booking_from_plan(slot_id, &plan, NOW)
        .unwrap();

    let found = persistence
        .find_active_booking(slot_id, identity)
        .unwrap()
        .unwrap();
    assert_eq!(found.booking_id, booking_id);

    persistence
        .update_booking_status(booking_id, BookingStatus::Cancelled, NOW)
        .unwrap();
    assert!(
        persistence
            .find_active_booking(slot_id, identity)
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_occupancy_sums_active_bookings_only() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);
    let slot_id: i64 = seed_slot(&mut persistence, monastery_id, "2024-01-15", "lunch");
    let first_donor: i64 = seed_donor(&mut persistence, "+66 81 234 5678");
    let second_donor: i64 = seed_donor(&mut persistence, "+66 82 111 2222");

    let first = donor_insert_plan(BookingIdentity::Donor(first_donor), 4);
    let second = donor_insert_plan(BookingIdentity::Donor(second_donor), 6);
    let first_id: i64 = persistence
        .create_booking_from_plan(slot_id, &first, NOW)
        .unwrap();
    persistence
        .create_booking_from_plan(slot_id, &second, NOW)
        .unwrap();

    let servings = persistence.slot_active_servings(slot_id).unwrap();
    let occupancy = Occupancy::from_servings(10, &servings);
    assert_eq!(occupancy.monks_fed, 10);
    assert_eq!(occupancy.current_bookings, 2);
    assert!(occupancy.full);

    // Cancelling drops the booking from the figures immediately
    persistence
        .update_booking_status(first_id, BookingStatus::Cancelled, NOW)
        .unwrap();
    let servings = persistence.slot_active_servings(slot_id).unwrap();
    let occupancy = Occupancy::from_servings(10, &servings);
    assert_eq!(occupancy.monks_fed, 6);
    assert_eq!(occupancy.current_bookings, 1);
    assert!(!occupancy.full);
}

#[test]
fn test_over_capacity_booking_is_accepted() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);
    // Slot capacity is 10
    let slot_id: i64 = seed_slot(&mut persistence, monastery_id, "2024-01-15", "lunch");
    let first_donor: i64 = seed_donor(&mut persistence, "+66 81 234 5678");
    let second_donor: i64 = seed_donor(&mut persistence, "+66 82 111 2222");

    let first = donor_insert_plan(BookingIdentity::Donor(first_donor), 5);
    let second = donor_insert_plan(BookingIdentity::Donor(second_donor), 7);
    persistence
        .create_booking_from_plan(slot_id, &first, NOW)
        .unwrap();
    // 5 + 7 > 10: the write still succeeds
    persistence
        .create_booking_from_plan(slot_id, &second, NOW)
        .unwrap();

    let servings = persistence.slot_active_servings(slot_id).unwrap();
    let occupancy = Occupancy::from_servings(10, &servings);
    assert_eq!(occupancy.monks_fed, 12);
    assert!(occupancy.over_capacity);
    assert!(!occupancy.full);
}

#[test]
fn test_transition_outcome_persists_status_and_stamps() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);
    let slot_id: i64 = seed_slot(&mut persistence, monastery_id, "2024-01-15", "lunch");
    let donor_id: i64 = seed_donor(&mut persistence, "+66 81 234 5678");

    let plan = donor_insert_plan(BookingIdentity::Donor(donor_id), 5);
    let booking_id: i64 = persistence
        .create_booking_from_plan(slot_id, &plan, NOW)
        .unwrap();

    let booking = persistence.get_booking(booking_id).unwrap();
    let outcome = apply_transition(&booking, TransitionOp::Approve { admin_id: 3 }, NOW).unwrap();
    persistence
        .apply_transition_outcome(booking_id, &outcome, NOW)
        .unwrap();

    let approved = persistence.get_booking(booking_id).unwrap();
    assert_eq!(approved.status, BookingStatus::MonasteryApproved);
    assert_eq!(approved.monastery_approved_at.as_deref(), Some(NOW));
    assert_eq!(approved.monastery_approved_by, Some(3));
}

#[test]
fn test_update_booking_draft_overwrites_mutable_fields() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);
    let slot_id: i64 = seed_slot(&mut persistence, monastery_id, "2024-01-15", "lunch");
    let donor_id: i64 = seed_donor(&mut persistence, "+66 81 234 5678");

    let plan = donor_insert_plan(BookingIdentity::Donor(donor_id), 5);
    let booking_id: i64 = persistence
        .create_booking_from_plan(slot_id, &plan, NOW)
        .unwrap();

    let later = "2024-01-11T09:00:00Z";
    persistence
        .update_booking_draft(
            booking_id,
            "Vegetable stew",
            8,
            Some("No chili please"),
            "+66 81 234 5678",
            later,
        )
        .unwrap();

    let updated = persistence.get_booking(booking_id).unwrap();
    assert_eq!(updated.food_type, "Vegetable stew");
    assert_eq!(updated.estimated_servings, 8);
    assert_eq!(updated.special_notes.as_deref(), Some("No chili please"));
    assert_eq!(updated.updated_at, later);
    // Creation stamp survives updates
    assert_eq!(updated.created_at, NOW);
}

#[test]
fn test_monastery_booking_listing_carries_slot_dates() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);
    let first_slot: i64 = seed_slot(&mut persistence, monastery_id, "2024-01-15", "lunch");
    let second_slot: i64 = seed_slot(&mut persistence, monastery_id, "2024-01-16", "lunch");
    let donor_id: i64 = seed_donor(&mut persistence, "+66 81 234 5678");

    let plan = donor_insert_plan(BookingIdentity::Donor(donor_id), 5);
    persistence
        .create_booking_from_plan(first_slot, &plan, NOW)
        .unwrap();
    persistence
        .create_booking_from_plan(second_slot, &plan, NOW)
        .unwrap();

    let listed = persistence.list_bookings_for_monastery(monastery_id).unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].1, time::macros::date!(2024 - 01 - 15));
    assert_eq!(listed[1].1, time::macros::date!(2024 - 01 - 16));
}
