//! The four MEL repair categories and their interval policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// MEL repair category.
///
/// A closed enumeration: B, C and D carry fixed repair intervals, while A's
/// interval is supplied externally per the aircraft's MEL Remarks/Exceptions
/// (Column 5) and has no default.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    A,
    B,
    C,
    D,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [Category::A, Category::B, Category::C, Category::D];

    /// Fixed repair interval in calendar days, or `None` for Category A,
    /// whose interval must be supplied by the caller.
    pub fn fixed_days(self) -> Option<u32> {
        match self {
            Category::A => None,
            Category::B => Some(3),
            Category::C => Some(10),
            Category::D => Some(120),
        }
    }

    /// Static reference metadata for this category.
    pub fn info(self) -> &'static CategoryInfo {
        match self {
            Category::A => &CATEGORY_A_INFO,
            Category::B => &CATEGORY_B_INFO,
            Category::C => &CATEGORY_C_INFO,
            Category::D => &CATEGORY_D_INFO,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::A => write!(f, "A"),
            Category::B => write!(f, "B"),
            Category::C => write!(f, "C"),
            Category::D => write!(f, "D"),
        }
    }
}

impl FromStr for Category {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Category::A),
            "B" | "b" => Ok(Category::B),
            "C" | "c" => Ok(Category::C),
            "D" | "d" => Ok(Category::D),
            other => Err(InputError::InvalidCategory(other.to_string())),
        }
    }
}

/// Reference metadata describing a category's regulatory policy.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Standard repair time as printed in the reference table.
    pub repair_time: &'static str,
    /// Equivalent duration in hours, for the reference table.
    pub repair_hours: &'static str,
    pub operational_limit: &'static str,
    /// Interval-rule note shown next to the countdown.
    pub note: &'static str,
}

static CATEGORY_A_INFO: CategoryInfo = CategoryInfo {
    name: "Category A",
    description: "Items required for safe operation",
    repair_time: "Per MEL Remarks/Exceptions (Column 5)",
    repair_hours: "Variable",
    operational_limit: "Must be repaired within specified time in MEL",
    note: "Time interval excludes day of discovery for calendar/flight days",
};

static CATEGORY_B_INFO: CategoryInfo = CategoryInfo {
    name: "Category B",
    description: "Items with operational and/or maintenance relief",
    repair_time: "3 consecutive calendar days",
    repair_hours: "72 hours",
    operational_limit: "Repair required within 3 calendar days",
    note: "Excludes day of discovery - begins at midnight UTC on discovery day",
};

static CATEGORY_C_INFO: CategoryInfo = CategoryInfo {
    name: "Category C",
    description: "Items with operational relief",
    repair_time: "10 consecutive calendar days",
    repair_hours: "240 hours",
    operational_limit: "Repair required within 10 calendar days",
    note: "Excludes day of discovery - begins at midnight UTC on discovery day",
};

static CATEGORY_D_INFO: CategoryInfo = CategoryInfo {
    name: "Category D",
    description: "Items with extended operational relief",
    repair_time: "120 consecutive calendar days",
    repair_hours: "2880 hours",
    operational_limit: "Repair required within 120 calendar days",
    note: "Excludes day of discovery - begins at midnight UTC on discovery day",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_days_per_category() {
        assert_eq!(Category::A.fixed_days(), None);
        assert_eq!(Category::B.fixed_days(), Some(3));
        assert_eq!(Category::C.fixed_days(), Some(10));
        assert_eq!(Category::D.fixed_days(), Some(120));
    }

    #[test]
    fn all_lists_four_categories_in_order() {
        assert_eq!(
            Category::ALL,
            [Category::A, Category::B, Category::C, Category::D]
        );
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("c".parse::<Category>().unwrap(), Category::C);
        assert_eq!("D".parse::<Category>().unwrap(), Category::D);
        assert!("E".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn serializes_as_bare_letter() {
        assert_eq!(serde_json::to_string(&Category::B).unwrap(), "\"B\"");
    }

    #[test]
    fn info_matches_variant() {
        assert_eq!(Category::D.info().name, "Category D");
        assert_eq!(Category::B.info().repair_hours, "72 hours");
    }
}
