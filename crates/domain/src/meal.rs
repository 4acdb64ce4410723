// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The three daily meals a monastery accepts donations for.
///
/// Every slot belongs to exactly one meal; together with the monastery and
/// the date it forms the slot's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// All meal types in day order. Bulk generation iterates this.
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Returns the string representation of the meal type.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            _ => Err(DomainError::InvalidMealType(s.to_string())),
        }
    }
}

impl FromStr for MealType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_string_round_trip() {
        for meal in MealType::ALL {
            let s: &str = meal.as_str();
            match MealType::parse_str(s) {
                Ok(parsed) => assert_eq!(meal, parsed),
                Err(e) => panic!("Failed to parse meal type string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_meal_type_string() {
        let result = MealType::parse_str("supper");
        assert!(result.is_err());
    }

    #[test]
    fn test_all_is_day_ordered() {
        assert_eq!(
            MealType::ALL,
            [MealType::Breakfast, MealType::Lunch, MealType::Dinner]
        );
    }
}
