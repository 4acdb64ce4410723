// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parses an ISO 8601 calendar date (YYYY-MM-DD).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<Date, DomainError> {
    Date::parse(s, DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: s.to_string(),
        error: e.to_string(),
    })
}

/// Formats a calendar date as ISO 8601 (YYYY-MM-DD).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if formatting fails (it cannot
/// for valid dates; the error path exists to avoid panicking).
pub fn format_date(date: Date) -> Result<String, DomainError> {
    date.format(DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: date.to_string(),
        error: e.to_string(),
    })
}

/// Validates a phone number.
///
/// The rule is deliberately loose: phones arrive from many countries and
/// front ends. Required: non-empty, at least 6 digits, only digits plus
/// the separators `+ - ( ) .` and spaces.
///
/// # Errors
///
/// Returns `DomainError::InvalidPhone` if the phone is empty or malformed.
pub fn validate_phone(phone: &str) -> Result<(), DomainError> {
    if phone.trim().is_empty() {
        return Err(DomainError::InvalidPhone(String::from(
            "Phone cannot be empty",
        )));
    }

    let digit_count: usize = phone.chars().filter(char::is_ascii_digit).count();
    if digit_count < 6 {
        return Err(DomainError::InvalidPhone(String::from(
            "Phone must contain at least 6 digits",
        )));
    }

    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | '.' | ' ');
    if !phone.chars().all(allowed) {
        return Err(DomainError::InvalidPhone(format!(
            "Phone contains invalid characters: {phone}"
        )));
    }

    Ok(())
}

/// Validates a meal time string (24-hour HH:MM).
///
/// # Errors
///
/// Returns `DomainError::InvalidMealTime` if the string is not HH:MM.
pub fn validate_meal_time(value: &str) -> Result<(), DomainError> {
    let invalid = || DomainError::InvalidMealTime(value.to_string());

    let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    let hours: u8 = hours.parse().map_err(|_| invalid())?;
    let minutes: u8 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok(())
}

/// Validates estimated servings.
///
/// # Errors
///
/// Returns `DomainError::InvalidServings` if servings is not positive.
pub fn validate_servings(servings: i32) -> Result<(), DomainError> {
    if servings <= 0 {
        return Err(DomainError::InvalidServings { servings });
    }
    Ok(())
}

/// Validates a slot's expected meal count.
///
/// Zero is allowed (a closed kitchen still publishes the slot); negative
/// values are not.
///
/// # Errors
///
/// Returns `DomainError::InvalidCapacity` if the capacity is negative.
pub fn validate_capacity(capacity: i32) -> Result<(), DomainError> {
    if capacity < 0 {
        return Err(DomainError::InvalidCapacity { capacity });
    }
    Ok(())
}

/// Validates the donor-facing booking payload fields.
///
/// # Errors
///
/// Returns an error if:
/// - The food type is empty
/// - The estimated servings are not positive
/// - The contact phone is invalid
pub fn validate_booking_payload(
    food_type: &str,
    estimated_servings: i32,
    contact_phone: &str,
) -> Result<(), DomainError> {
    if food_type.trim().is_empty() {
        return Err(DomainError::InvalidFoodType(String::from(
            "Food type cannot be empty",
        )));
    }
    validate_servings(estimated_servings)?;
    validate_phone(contact_phone)?;
    Ok(())
}

/// Validates a display name (monastery, admin, donor or guest).
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the name is empty.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(())
}
