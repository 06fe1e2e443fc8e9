//! Field-format checks applied to a receipt before it is scored.
//!
//! Checks run in a fixed order and stop at the first failure, so the reason
//! returned always names the first violated rule.

use super::receipt::Receipt;
use crate::error::{ReceiptError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Letters, digits, underscore (Unicode `\w`), whitespace, hyphen and ampersand.
static RETAILER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\s\-&]+$").expect("invalid retailer pattern"));
static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("invalid amount pattern"));
static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("invalid date pattern"));
static TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("invalid time pattern"));

pub const INVALID_RETAILER: &str = "Invalid retailer name format";
pub const INVALID_TOTAL: &str = "Invalid total amount format";
pub const INVALID_DATE: &str = "Invalid purchase date format, expected YYYY-MM-DD";
pub const INVALID_TIME: &str = "Invalid purchase time format, expected HH:MM";
pub const EMPTY_ITEMS: &str = "Items must be a non-empty array";

fn reject(reason: impl Into<String>) -> Result<()> {
    Err(ReceiptError::InvalidReceipt(reason.into()))
}

/// Validates `receipt`, returning `ReceiptError::InvalidReceipt` with a
/// human-readable reason on the first failed check.
pub fn validate(receipt: &Receipt) -> Result<()> {
    if !RETAILER.is_match(&receipt.retailer) {
        return reject(INVALID_RETAILER);
    }
    if !AMOUNT.is_match(&receipt.total) {
        return reject(INVALID_TOTAL);
    }
    if !DATE.is_match(&receipt.purchase_date) {
        return reject(INVALID_DATE);
    }
    if !TIME.is_match(&receipt.purchase_time) {
        return reject(INVALID_TIME);
    }
    if receipt.items.is_empty() {
        return reject(EMPTY_ITEMS);
    }

    for item in &receipt.items {
        let description = item.trimmed_description();
        if description.is_empty() || !AMOUNT.is_match(&item.price) {
            return reject(format!(
                "Invalid item description or price for item: {description}"
            ));
        }
    }

    Ok(())
}
