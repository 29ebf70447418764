//! "Valid from" date parsing
//!
//! The footer of every page states the month the prices are valid from. The
//! date comes from a short expression so a list can be prepared ahead of time.

use chrono::{Local, NaiveDate};
use crate::error::{Error, Result};

/// Date expression types
#[derive(Debug, Clone, PartialEq)]
pub enum DateExpression {
    /// Use today's date
    Today,
    /// Use an explicit date
    Explicit(NaiveDate),
    /// No date (empty/null)
    None,
}

/// Parse a date expression string into a DateExpression
///
/// Supported formats:
/// - `""` (empty) → None
/// - `"today"` → Today
/// - `"2024-11-20"` → Explicit date (ISO format)
/// - `"11/20/2024"` → Explicit date (US format)
/// - `"2024-11"` → First day of that month
/// - `"November 2024"` → First day of that month
pub fn parse_date_expression(expr: &str) -> Result<DateExpression> {
    let expr = expr.trim();

    if expr.is_empty() {
        return Ok(DateExpression::None);
    }

    if expr.eq_ignore_ascii_case("today") {
        return Ok(DateExpression::Today);
    }

    // ISO format: 2024-11-20
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return Ok(DateExpression::Explicit(date));
    }

    // US format: 11/20/2024
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%m/%d/%Y") {
        return Ok(DateExpression::Explicit(date));
    }

    // Month only: 2024-11
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", expr), "%Y-%m-%d") {
        return Ok(DateExpression::Explicit(date));
    }

    // Month name: November 2024
    if let Ok(date) = NaiveDate::parse_from_str(&format!("1 {}", expr), "%d %B %Y") {
        return Ok(DateExpression::Explicit(date));
    }

    Err(Error::InvalidDateExpression(format!("Unable to parse date expression: {}", expr)))
}

/// Resolve a DateExpression to an actual date (if applicable)
pub fn resolve_date(expr: &DateExpression) -> Option<NaiveDate> {
    match expr {
        DateExpression::None => None,
        DateExpression::Today => Some(Local::now().date_naive()),
        DateExpression::Explicit(date) => Some(*date),
    }
}

/// Format a date the way the footer shows it: "Month year"
/// Example: "November 2024"
pub fn format_month_year(date: &NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
