// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking::BookingDraft;
use alms_slot_domain::{Booking, BookingIdentity, BookingStatus, InitiatedBy};

pub const NOW: &str = "2024-01-10T08:00:00Z";

pub fn sample_draft() -> BookingDraft {
    BookingDraft {
        food_type: String::from("Rice and curry"),
        estimated_servings: 5,
        special_notes: None,
        contact_phone: String::from("+91 98765 41234"),
    }
}

pub fn sample_booking(status: BookingStatus) -> Booking {
    Booking {
        booking_id: 17,
        slot_id: 3,
        identity: BookingIdentity::Donor(42),
        food_type: String::from("Rice and curry"),
        estimated_servings: 5,
        special_notes: None,
        contact_phone: String::from("+91 98765 41234"),
        status,
        monastery_approved_at: None,
        monastery_approved_by: None,
        confirmed_5_days_at: None,
        confirmed_1_day_at: None,
        initiated_by: InitiatedBy::Donor,
        initiated_by_admin_id: None,
        created_at: String::from("2024-01-09T10:00:00Z"),
        updated_at: String::from("2024-01-09T10:00:00Z"),
    }
}
