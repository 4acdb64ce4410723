// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking::{BookingDraft, BookingInitiator, BookingPlan, DuplicateDecision, plan_booking};
use crate::error::CoreError;
use crate::tests::helpers::{NOW, sample_booking, sample_draft};
use alms_slot_domain::{BookingIdentity, BookingStatus, DomainError, InitiatedBy};

#[test]
fn test_donor_booking_starts_pending() {
    let result = plan_booking(
        None,
        BookingIdentity::Donor(42),
        sample_draft(),
        BookingInitiator::Donor,
        None,
        NOW,
    );

    let plan = match result {
        Ok(BookingPlan::Insert(plan)) => plan,
        other => panic!("expected insert plan, got {other:?}"),
    };
    assert_eq!(plan.status, BookingStatus::Pending);
    assert_eq!(plan.initiated_by, InitiatedBy::Donor);
    assert_eq!(plan.initiated_by_admin_id, None);
    assert_eq!(plan.monastery_approved_at, None);
    assert_eq!(plan.monastery_approved_by, None);
}

#[test]
fn test_staff_booking_is_born_approved() {
    let result = plan_booking(
        None,
        BookingIdentity::Guest(7),
        sample_draft(),
        BookingInitiator::MonasteryAdmin { admin_id: 3 },
        None,
        NOW,
    );

    let plan = match result {
        Ok(BookingPlan::Insert(plan)) => plan,
        other => panic!("expected insert plan, got {other:?}"),
    };
    assert_eq!(plan.status, BookingStatus::MonasteryApproved);
    assert_eq!(plan.initiated_by, InitiatedBy::MonasteryAdmin);
    assert_eq!(plan.initiated_by_admin_id, Some(3));
    assert_eq!(plan.monastery_approved_at.as_deref(), Some(NOW));
    assert_eq!(plan.monastery_approved_by, Some(3));
}

#[test]
fn test_existing_booking_without_decision_is_a_conflict() {
    let existing = sample_booking(BookingStatus::Pending);
    let proposed = BookingDraft {
        food_type: String::from("Vegetable stew"),
        ..sample_draft()
    };

    let result = plan_booking(
        Some(existing.clone()),
        existing.identity,
        proposed.clone(),
        BookingInitiator::Donor,
        None,
        NOW,
    );

    match result {
        Ok(BookingPlan::Conflict {
            existing: reported,
            proposed: kept,
        }) => {
            assert_eq!(reported, existing);
            assert_eq!(kept, proposed);
        }
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn test_update_decision_targets_the_existing_booking() {
    let existing = sample_booking(BookingStatus::MonasteryApproved);

    let result = plan_booking(
        Some(existing.clone()),
        existing.identity,
        sample_draft(),
        BookingInitiator::Donor,
        Some(DuplicateDecision::UpdateExisting),
        NOW,
    );

    match result {
        Ok(BookingPlan::Update { booking_id, .. }) => {
            assert_eq!(booking_id, existing.booking_id);
        }
        other => panic!("expected update plan, got {other:?}"),
    }
}

#[test]
fn test_abort_decision_writes_nothing() {
    let existing = sample_booking(BookingStatus::Pending);

    let result = plan_booking(
        Some(existing.clone()),
        existing.identity,
        sample_draft(),
        BookingInitiator::Donor,
        Some(DuplicateDecision::Abort),
        NOW,
    );

    match result {
        Ok(BookingPlan::Aborted { existing: kept }) => assert_eq!(kept, existing),
        other => panic!("expected aborted plan, got {other:?}"),
    }
}

#[test]
fn test_invalid_draft_is_rejected_before_any_decision() {
    let draft = BookingDraft {
        estimated_servings: 0,
        ..sample_draft()
    };

    let result = plan_booking(
        None,
        BookingIdentity::Donor(42),
        draft,
        BookingInitiator::Donor,
        None,
        NOW,
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidServings {
            servings: 0
        }))
    ));
}
