//! Input validation utilities

use chrono::NaiveDate;

use crate::{
    constants::MAX_ITEM_QUANTITY,
    error::{AppError, AppResult},
};

/// Parse an ISO date string (YYYY-MM-DD), as used for expiry dates
pub fn parse_iso_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidInput(format!("Invalid date: {s} (expected YYYY-MM-DD)")))
}

/// Validate an item quantity
pub fn validate_quantity(quantity: i32) -> Result<(), &'static str> {
    if quantity < 1 {
        return Err("Quantity must be at least 1");
    }
    if quantity > MAX_ITEM_QUANTITY {
        return Err("Quantity exceeds the maximum allowed");
    }
    Ok(())
}

/// Validate a location string (free-text equality key for matching)
pub fn validate_location(location: &str) -> Result<(), &'static str> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err("Location cannot be empty");
    }
    if trimmed.len() > 100 {
        return Err("Location must be at most 100 characters");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2024-06-30").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
        );
        assert!(parse_iso_date("30/06/2024").is_err());
        assert!(parse_iso_date("2024-13-01").is_err());
        assert!(parse_iso_date("soon").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(500).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
        assert!(validate_quantity(MAX_ITEM_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_location() {
        assert!(validate_location("Springfield").is_ok());
        assert!(validate_location("  ").is_err());
        assert!(validate_location(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  hello  "), "hello");
        assert_eq!(sanitize_string("a\u{0} b"), "a b");
    }
}
