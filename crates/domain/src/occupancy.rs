// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Advisory occupancy figures for a slot.
///
/// Occupancy is always recomputed from the slot's non-cancelled bookings;
/// it is never stored or incremented in place. Over-capacity is a display
/// flag, not an enforced ceiling: a slot accepts bookings past
/// `monks_capacity` and only this flag changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    /// Sum of estimated servings over active bookings.
    pub monks_fed: i64,
    /// Count of active bookings.
    pub current_bookings: i64,
    /// True when committed servings exceed the slot's expected meal count.
    pub over_capacity: bool,
    /// True when committed servings exactly meet the expected meal count.
    pub full: bool,
}

impl Occupancy {
    /// Computes occupancy from the active bookings' serving counts.
    ///
    /// # Arguments
    ///
    /// * `monks_capacity` - The slot's expected meal count
    /// * `servings` - Estimated servings of each active booking
    #[must_use]
    pub fn from_servings(monks_capacity: i32, servings: &[i32]) -> Self {
        let monks_fed: i64 = servings.iter().map(|s| i64::from(*s)).sum();
        let current_bookings: i64 = servings.len() as i64;
        Self {
            monks_fed,
            current_bookings,
            over_capacity: monks_fed > i64::from(monks_capacity),
            full: monks_fed == i64::from(monks_capacity),
        }
    }

    /// Builds occupancy from pre-aggregated figures (e.g. a SUM/COUNT query).
    #[must_use]
    pub const fn from_totals(monks_capacity: i32, monks_fed: i64, current_bookings: i64) -> Self {
        Self {
            monks_fed,
            current_bookings,
            over_capacity: monks_fed > monks_capacity as i64,
            full: monks_fed == monks_capacity as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_is_neither_full_nor_over() {
        let occupancy = Occupancy::from_servings(10, &[]);
        assert_eq!(occupancy.monks_fed, 0);
        assert_eq!(occupancy.current_bookings, 0);
        assert!(!occupancy.over_capacity);
        assert!(!occupancy.full);
    }

    #[test]
    fn test_exact_capacity_is_full_not_over() {
        let occupancy = Occupancy::from_servings(10, &[4, 6]);
        assert_eq!(occupancy.monks_fed, 10);
        assert_eq!(occupancy.current_bookings, 2);
        assert!(occupancy.full);
        assert!(!occupancy.over_capacity);
    }

    #[test]
    fn test_over_capacity_is_flagged_not_full() {
        let occupancy = Occupancy::from_servings(10, &[5, 7]);
        assert_eq!(occupancy.monks_fed, 12);
        assert!(occupancy.over_capacity);
        assert!(!occupancy.full);
    }

    #[test]
    fn test_totals_matches_servings_computation() {
        let from_servings = Occupancy::from_servings(8, &[3, 5]);
        let from_totals = Occupancy::from_totals(8, 8, 2);
        assert_eq!(from_servings, from_totals);
    }
}
