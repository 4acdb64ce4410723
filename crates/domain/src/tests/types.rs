// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{BookingIdentity, InitiatedBy, Monastery};
use crate::{ConfirmationPolicy, MealType};
use std::str::FromStr;

fn sample_monastery() -> Monastery {
    Monastery {
        monastery_id: 1,
        name: String::from("Wat Pa Subthawee"),
        seating_capacity: 24,
        breakfast_time: String::from("06:30"),
        lunch_time: String::from("11:00"),
        dinner_time: String::from("17:30"),
        policy: ConfirmationPolicy::default(),
    }
}

#[test]
fn test_default_time_lookup_per_meal() {
    let monastery = sample_monastery();

    assert_eq!(monastery.default_time_for(MealType::Breakfast), "06:30");
    assert_eq!(monastery.default_time_for(MealType::Lunch), "11:00");
    assert_eq!(monastery.default_time_for(MealType::Dinner), "17:30");
}

#[test]
fn test_identity_column_mapping_donor() {
    let identity = BookingIdentity::Donor(42);
    assert_eq!(identity.donor_id(), Some(42));
    assert_eq!(identity.guest_profile_id(), None);
}

#[test]
fn test_identity_column_mapping_guest() {
    let identity = BookingIdentity::Guest(7);
    assert_eq!(identity.donor_id(), None);
    assert_eq!(identity.guest_profile_id(), Some(7));
}

#[test]
fn test_identity_from_columns_requires_exactly_one() {
    assert_eq!(
        BookingIdentity::from_columns(Some(1), None),
        Ok(BookingIdentity::Donor(1))
    );
    assert_eq!(
        BookingIdentity::from_columns(None, Some(2)),
        Ok(BookingIdentity::Guest(2))
    );
    assert!(BookingIdentity::from_columns(None, None).is_err());
    assert!(BookingIdentity::from_columns(Some(1), Some(2)).is_err());
}

#[test]
fn test_initiated_by_round_trip() {
    for initiator in [InitiatedBy::Donor, InitiatedBy::MonasteryAdmin] {
        let parsed = InitiatedBy::from_str(initiator.as_str());
        assert_eq!(parsed, Ok(initiator));
    }
    assert!(InitiatedBy::from_str("system").is_err());
}
