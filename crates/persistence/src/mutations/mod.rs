// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//! Most mutations use Diesel DSL and are backend-agnostic, with minimal use of
//! backend-specific helpers (e.g., `last_insert_rowid()` for `SQLite`).
//!
//! ## Module Organization
//!
//! - `monasteries` — Monastery, policy and admin mutations
//! - `identities` — Registered donor and guest profile mutations
//! - `slots` — Donation slot mutations
//! - `bookings` — Booking writes, status updates and confirmation stamps
//! - `confirmation_log` — Append-only confirmation log writes
//!
//! ## Backend-Specific Code
//!
//! Backend-specific helpers (e.g., `get_last_insert_rowid()`) are imported from
//! the `backend` module. All other code uses Diesel DSL exclusively.

pub mod bookings;
pub mod confirmation_log;
pub mod identities;
pub mod monasteries;
pub mod slots;

// Re-export backend-specific mutation functions used by lib.rs
pub use bookings::{
    insert_booking_mysql, insert_booking_sqlite, stamp_confirmation_mysql,
    stamp_confirmation_sqlite, update_booking_draft_mysql, update_booking_draft_sqlite,
    update_booking_status_mysql, update_booking_status_sqlite,
};
pub use confirmation_log::{append_confirmation_entry_mysql, append_confirmation_entry_sqlite};
pub use identities::{
    insert_donor_mysql, insert_donor_sqlite, insert_guest_profile_mysql,
    insert_guest_profile_sqlite,
};
pub use monasteries::{
    insert_admin_mysql, insert_admin_sqlite, insert_monastery_mysql, insert_monastery_sqlite,
    update_confirmation_policy_mysql, update_confirmation_policy_sqlite,
    update_default_meal_time_mysql, update_default_meal_time_sqlite,
};
pub use slots::{
    delete_slot_mysql, delete_slot_sqlite, insert_slot_mysql, insert_slot_sqlite,
    set_slot_availability_mysql, set_slot_availability_sqlite, update_slot_fields_mysql,
    update_slot_fields_sqlite,
};
