// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{seed_monastery, seed_slot, test_persistence};
use crate::{NewSlot, Persistence, PersistenceError};
use alms_slot_domain::MealType;
use time::macros::date;

#[test]
fn test_create_and_get_slot_round_trip() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);

    let slot_id: i64 = seed_slot(&mut persistence, monastery_id, "2024-01-15", "lunch");
    let slot = persistence.get_slot(slot_id).unwrap();

    assert_eq!(slot.slot_id, slot_id);
    assert_eq!(slot.monastery_id, monastery_id);
    assert_eq!(slot.slot_date, date!(2024 - 01 - 15));
    assert_eq!(slot.meal_type, MealType::Lunch);
    assert_eq!(slot.monks_capacity, 10);
    assert!(slot.is_available);
}

#[test]
fn test_duplicate_slot_key_is_a_unique_violation() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);
    seed_slot(&mut persistence, monastery_id, "2024-01-15", "lunch");

    let result = persistence.create_slot(&NewSlot {
        monastery_id,
        slot_date: String::from("2024-01-15"),
        meal_type: String::from("lunch"),
        time_of_day: String::from("11:30"),
        monks_capacity: 12,
        max_donors: 2,
        is_available: 1,
        booking_notes: None,
    });

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_same_date_different_meal_is_allowed() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);

    seed_slot(&mut persistence, monastery_id, "2024-01-15", "breakfast");
    seed_slot(&mut persistence, monastery_id, "2024-01-15", "lunch");
    seed_slot(&mut persistence, monastery_id, "2024-01-15", "dinner");

    let slots = persistence
        .list_slots(monastery_id, "2024-01-15", "2024-01-15")
        .unwrap();
    assert_eq!(slots.len(), 3);
}

#[test]
fn test_update_slot_touches_only_non_identity_fields() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);
    let slot_id: i64 = seed_slot(&mut persistence, monastery_id, "2024-01-15", "lunch");

    persistence
        .update_slot(slot_id, "11:45", 18, 5, Some("Please arrive early"))
        .unwrap();

    let slot = persistence.get_slot(slot_id).unwrap();
    assert_eq!(slot.time_of_day, "11:45");
    assert_eq!(slot.monks_capacity, 18);
    assert_eq!(slot.max_donors, 5);
    assert_eq!(slot.booking_notes.as_deref(), Some("Please arrive early"));
    // Identity untouched
    assert_eq!(slot.slot_date, date!(2024 - 01 - 15));
    assert_eq!(slot.meal_type, MealType::Lunch);
}

#[test]
fn test_availability_toggle_round_trip() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);
    let slot_id: i64 = seed_slot(&mut persistence, monastery_id, "2024-01-15", "lunch");

    persistence.set_slot_availability(slot_id, false).unwrap();
    assert!(!persistence.get_slot(slot_id).unwrap().is_available);

    persistence.set_slot_availability(slot_id, true).unwrap();
    assert!(persistence.get_slot(slot_id).unwrap().is_available);
}

#[test]
fn test_delete_slot_removes_the_row() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);
    let slot_id: i64 = seed_slot(&mut persistence, monastery_id, "2024-01-15", "lunch");

    persistence.delete_slot(slot_id).unwrap();

    assert!(matches!(
        persistence.get_slot(slot_id),
        Err(PersistenceError::NotFound(_))
    ));
}

#[test]
fn test_list_slots_respects_date_range() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);
    seed_slot(&mut persistence, monastery_id, "2024-01-10", "lunch");
    seed_slot(&mut persistence, monastery_id, "2024-01-15", "lunch");
    seed_slot(&mut persistence, monastery_id, "2024-01-20", "lunch");

    let slots = persistence
        .list_slots(monastery_id, "2024-01-12", "2024-01-18")
        .unwrap();

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].slot_date, date!(2024 - 01 - 15));
}

#[test]
fn test_default_meal_time_update() {
    let mut persistence: Persistence = test_persistence();
    let monastery_id: i64 = seed_monastery(&mut persistence);

    persistence
        .update_default_meal_time(monastery_id, MealType::Lunch, "11:30")
        .unwrap();

    let monastery = persistence.get_monastery(monastery_id).unwrap();
    assert_eq!(monastery.lunch_time, "11:30");
    // Other meals untouched
    assert_eq!(monastery.breakfast_time, "06:30");
    assert_eq!(monastery.dinner_time, "17:30");
}
