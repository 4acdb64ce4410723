// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{NewDonor, NewMonastery, NewMonasteryAdmin, NewSlot, Persistence};
use alms_slot::{BookingDraft, BookingInitiator, BookingPlan, plan_booking};
use alms_slot::NewBookingPlan;
use alms_slot_domain::{BookingIdentity, ConfirmationPolicy};

pub const NOW: &str = "2024-01-10T08:00:00Z";

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

pub fn seed_monastery(persistence: &mut Persistence) -> i64 {
    let policy_json =
        serde_json::to_string(&ConfirmationPolicy::default()).expect("policy serializes");
    persistence
        .create_monastery(&NewMonastery {
            name: String::from("Wat Pa Subthawee"),
            seating_capacity: 24,
            breakfast_time: String::from("06:30"),
            lunch_time: String::from("11:00"),
            dinner_time: String::from("17:30"),
            confirmation_policy_json: policy_json,
        })
        .expect("monastery inserts")
}

pub fn seed_admin(persistence: &mut Persistence, monastery_id: i64) -> i64 {
    persistence
        .create_admin(&NewMonasteryAdmin {
            monastery_id,
            display_name: String::from("Ajahn Dee"),
        })
        .expect("admin inserts")
}

pub fn seed_donor(persistence: &mut Persistence, phone: &str) -> i64 {
    persistence
        .create_donor(&NewDonor {
            full_name: String::from("Somchai Jaidee"),
            phone: phone.to_string(),
            email: None,
        })
        .expect("donor inserts")
}

pub fn seed_slot(persistence: &mut Persistence, monastery_id: i64, date: &str, meal: &str) -> i64 {
    persistence
        .create_slot(&NewSlot {
            monastery_id,
            slot_date: date.to_string(),
            meal_type: meal.to_string(),
            time_of_day: String::from("11:00"),
            monks_capacity: 10,
            max_donors: 3,
            is_available: 1,
            booking_notes: None,
        })
        .expect("slot inserts")
}

pub fn donor_insert_plan(identity: BookingIdentity, servings: i32) -> NewBookingPlan {
    let draft = BookingDraft {
        food_type: String::from("Rice and curry"),
        estimated_servings: servings,
        special_notes: None,
        contact_phone: String::from("+66 81 234 5678"),
    };
    match plan_booking(None, identity, draft, BookingInitiator::Donor, None, NOW) {
        Ok(BookingPlan::Insert(plan)) => plan,
        other => panic!("expected insert plan, got {other:?}"),
    }
}
