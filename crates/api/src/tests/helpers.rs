// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::{AuthenticatedActor, Role};
use crate::handlers::{create_monastery, create_slot, register_admin};
use crate::request_response::{
    BookingPayload, CreateMonasteryRequest, CreateSlotRequest, RegisterAdminRequest,
};
use alms_slot_persistence::{NewDonor, Persistence};

pub const NOW: &str = "2024-01-01T08:00:00Z";

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

/// Creates a monastery with an admin. Returns (monastery_id, admin actor).
pub fn setup_monastery(
    persistence: &mut Persistence,
    require_approval: bool,
) -> (i64, AuthenticatedActor) {
    let response = create_monastery(
        persistence,
        &CreateMonasteryRequest {
            name: String::from("Wat Pa Subthawee"),
            seating_capacity: 10,
            breakfast_time: String::from("06:30"),
            lunch_time: String::from("11:00"),
            dinner_time: String::from("17:30"),
            reminder_days: vec![5, 1],
            require_monastery_approval: require_approval,
        },
    )
    .expect("monastery creation should succeed");

    let admin = register_admin(
        persistence,
        &RegisterAdminRequest {
            monastery_id: response.monastery_id,
            display_name: String::from("Ajahn Dee"),
        },
    )
    .expect("admin registration should succeed");

    (
        response.monastery_id,
        AuthenticatedActor::new(admin.admin_id, Role::Admin),
    )
}

pub fn seed_donor(persistence: &mut Persistence, phone: &str) -> i64 {
    persistence
        .create_donor(&NewDonor {
            full_name: String::from("Somchai Jaidee"),
            phone: phone.to_string(),
            email: Some(String::from("somchai@example.com")),
        })
        .expect("donor inserts")
}

pub fn donor_actor(donor_id: i64) -> AuthenticatedActor {
    AuthenticatedActor::new(donor_id, Role::Donor)
}

pub fn lunch_slot(
    persistence: &mut Persistence,
    monastery_id: i64,
    actor: &AuthenticatedActor,
    slot_date: &str,
) -> i64 {
    create_slot(
        persistence,
        &CreateSlotRequest {
            monastery_id,
            slot_date: slot_date.to_string(),
            meal_type: String::from("lunch"),
            time_of_day: None,
            monks_capacity: None,
            max_donors: None,
            booking_notes: None,
        },
        actor,
    )
    .expect("slot creation should succeed")
    .slot_id
}

pub fn rice_payload(servings: i32) -> BookingPayload {
    BookingPayload {
        food_type: String::from("Rice and curry"),
        estimated_servings: servings,
        special_notes: None,
        contact_phone: String::from("+66 81 234 5678"),
    }
}
