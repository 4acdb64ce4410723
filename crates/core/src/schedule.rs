// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk slot schedule planning.
//!
//! Planning is pure date arithmetic: the plan lists every (date, meal)
//! pair the generator should attempt. Which of those already exist is the
//! store's concern; the generator treats a uniqueness violation on insert
//! as "already exists" so concurrent runs stay idempotent.

use crate::error::CoreError;
use alms_slot_domain::{DomainError, MealType};
use time::{Date, Duration, Weekday};

/// One slot the bulk generator should attempt to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedSlot {
    /// The donation date.
    pub slot_date: Date,
    /// The meal this slot is for.
    pub meal_type: MealType,
}

/// Computes the weekday slot plan for a generation window.
///
/// For each of the `days` calendar days starting at `start_date`,
/// Saturdays and Sundays are skipped; every remaining weekday yields one
/// planned slot per meal type, in day order.
///
/// # Arguments
///
/// * `start_date` - The first calendar day of the window (inclusive)
/// * `days` - The number of calendar days to cover
///
/// # Returns
///
/// The planned slots, ordered by date then meal.
///
/// # Errors
///
/// Returns an error if:
/// - `days` is zero or exceeds 366
/// - Date arithmetic overflows
pub fn weekday_slot_plan(start_date: Date, days: u16) -> Result<Vec<PlannedSlot>, CoreError> {
    if days == 0 || days > 366 {
        return Err(CoreError::DomainViolation(
            DomainError::InvalidGenerationWindow { days },
        ));
    }

    let mut plan: Vec<PlannedSlot> = Vec::new();
    for offset in 0..days {
        let slot_date: Date = start_date
            .checked_add(Duration::days(i64::from(offset)))
            .ok_or_else(|| {
                CoreError::DomainViolation(DomainError::DateArithmeticOverflow {
                    operation: format!("advancing {offset} days past {start_date}"),
                })
            })?;

        if matches!(slot_date.weekday(), Weekday::Saturday | Weekday::Sunday) {
            continue;
        }

        for meal_type in MealType::ALL {
            plan.push(PlannedSlot {
                slot_date,
                meal_type,
            });
        }
    }

    Ok(plan)
}
