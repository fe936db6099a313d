//! Shared text returned to the user.
//!
//! Keep all user-facing strings in this module so they stay in one place and are
//! easy to update or translate.

use crate::db::CustomerCode;

pub const INVALID_INPUT: &str =
    "Please enter a valid customer code and select a function from the dropdown list.";
pub const INVALID_CUSTOMER: &str = "Please enter a valid customer code.";
pub const INVALID_FUNCTION: &str = "Please enter a valid function number.";

pub const DATA_FETCH_FAILED: &str = "An error occurred while fetching customer data.";
pub const GENERATION_FAILED: &str = "An error occurred while generating the response.";

pub const NO_ITEMS_FOUND: &str = "No items found.";

pub fn no_preferences(code: CustomerCode) -> String {
    format!("No preferred product categories found for customer {code}.")
}

pub fn no_daily_purchases(code: CustomerCode, day: &str) -> String {
    format!("No purchase history found for customer {code} on {day}.")
}

pub fn no_segment_purchases(code: CustomerCode, segment: &str) -> String {
    format!("No {segment} purchase history found for customer {code}.")
}
