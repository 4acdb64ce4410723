// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `monasteries` — Monastery, policy and admin queries
//! - `identities` — Phone-based donor and guest profile lookups
//! - `slots` — Donation slot queries
//! - `bookings` — Booking queries
//! - `occupancy` — Active-booking aggregation for occupancy figures
//! - `confirmation_log` — Confirmation log timeline queries
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate version
//! based on the active backend connection.

pub mod bookings;
pub mod confirmation_log;
pub mod identities;
pub mod monasteries;
pub mod occupancy;
pub mod slots;

// Re-export backend-specific query functions used by lib.rs
pub use bookings::{
    find_active_booking_mysql, find_active_booking_sqlite, get_booking_mysql, get_booking_sqlite,
    list_bookings_for_monastery_mysql, list_bookings_for_monastery_sqlite,
    list_bookings_for_slot_mysql, list_bookings_for_slot_sqlite,
};
pub use confirmation_log::{list_confirmation_log_mysql, list_confirmation_log_sqlite};
pub use identities::{
    find_donor_by_phone_mysql, find_donor_by_phone_sqlite, find_guest_profile_mysql,
    find_guest_profile_sqlite,
};
pub use monasteries::{
    get_admin_mysql, get_admin_sqlite, get_monastery_mysql, get_monastery_sqlite,
    list_admins_mysql, list_admins_sqlite,
};
pub use occupancy::{
    count_active_bookings_mysql, count_active_bookings_sqlite, slot_active_servings_mysql,
    slot_active_servings_sqlite,
};
pub use slots::{get_slot_mysql, get_slot_sqlite, list_slots_mysql, list_slots_sqlite};
