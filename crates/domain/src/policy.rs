// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Per-monastery confirmation policy.
///
/// `reminder_days` lists how many days before the donation date a manual
/// confirmation becomes due (e.g. `[5, 1]`). The 1-day window is always
/// classified regardless of configuration; the 5-day window only applies
/// when `5` is configured here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationPolicy {
    /// Days before the donation date at which reminders become due.
    pub reminder_days: Vec<u8>,
    /// Whether donor-initiated bookings require staff approval.
    pub require_monastery_approval: bool,
}

impl Default for ConfirmationPolicy {
    fn default() -> Self {
        Self {
            reminder_days: vec![5, 1],
            require_monastery_approval: true,
        }
    }
}

impl ConfirmationPolicy {
    /// Validates the configured reminder days.
    ///
    /// # Errors
    ///
    /// Returns an error if any reminder day falls outside 1..=30.
    pub fn validate(&self) -> Result<(), DomainError> {
        for day in &self.reminder_days {
            if !(1..=30).contains(day) {
                return Err(DomainError::InvalidReminderDay { day: *day });
            }
        }
        Ok(())
    }

    /// Returns true if a reminder is configured for the given day count.
    #[must_use]
    pub fn has_reminder_day(&self, day: u8) -> bool {
        self.reminder_days.contains(&day)
    }
}
