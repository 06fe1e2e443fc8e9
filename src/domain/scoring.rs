//! The points rule engine.
//!
//! Eight independent rules are evaluated against a receipt and their
//! contributions summed. A rule that cannot interpret its input contributes
//! zero, which keeps [`score`] total over any receipt, validated or not.

use super::money::Money;
use super::receipt::Receipt;
use chrono::{NaiveTime, Timelike};
use rust_decimal_macros::dec;
use tracing::debug;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Rule {
    /// One point per alphanumeric character in the retailer name.
    RetailerName,
    /// 50 points when the total has no cents.
    RoundDollarTotal,
    /// 25 points when the total is a multiple of 0.25.
    QuarterMultipleTotal,
    /// 5 points for every two items.
    ItemPairs,
    /// `ceil(price * 0.2)` for each item whose trimmed description length is a multiple of 3.
    DescriptionLength,
    /// 5 points when the total is greater than 10.00.
    TotalAboveTen,
    /// 6 points when the day of the purchase date is odd.
    OddPurchaseDay,
    /// 10 points when the purchase time falls in [14:00, 16:00).
    AfternoonPurchase,
}

impl Rule {
    pub const ALL: [Rule; 8] = [
        Rule::RetailerName,
        Rule::RoundDollarTotal,
        Rule::QuarterMultipleTotal,
        Rule::ItemPairs,
        Rule::DescriptionLength,
        Rule::TotalAboveTen,
        Rule::OddPurchaseDay,
        Rule::AfternoonPurchase,
    ];

    /// Points this rule awards to `receipt`.
    pub fn points(&self, receipt: &Receipt) -> i64 {
        match self {
            Rule::RetailerName => receipt
                .retailer
                .chars()
                .filter(|c| c.is_alphanumeric())
                .count() as i64,
            Rule::RoundDollarTotal => match Money::parse(&receipt.total) {
                Some(total) if total.is_whole() => 50,
                _ => 0,
            },
            Rule::QuarterMultipleTotal => match Money::parse(&receipt.total) {
                Some(total) if total.is_multiple_of(dec!(0.25)) => 25,
                _ => 0,
            },
            Rule::ItemPairs => (receipt.items.len() / 2) as i64 * 5,
            Rule::DescriptionLength => receipt
                .items
                .iter()
                .filter(|item| item.trimmed_description().chars().count() % 3 == 0)
                .filter_map(|item| Money::parse(&item.price)?.ceil_scaled(dec!(0.2)))
                .sum(),
            Rule::TotalAboveTen => match Money::parse(&receipt.total) {
                Some(total) if total > Money::new(dec!(10.00)) => 5,
                _ => 0,
            },
            Rule::OddPurchaseDay => match purchase_day(&receipt.purchase_date) {
                Some(day) if day % 2 != 0 => 6,
                _ => 0,
            },
            Rule::AfternoonPurchase => {
                match NaiveTime::parse_from_str(&receipt.purchase_time, "%H:%M") {
                    Ok(time) if (14..16).contains(&time.hour()) => 10,
                    _ => 0,
                }
            }
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rule::RetailerName => "retailer_name",
            Rule::RoundDollarTotal => "round_dollar_total",
            Rule::QuarterMultipleTotal => "quarter_multiple_total",
            Rule::ItemPairs => "item_pairs",
            Rule::DescriptionLength => "description_length",
            Rule::TotalAboveTen => "total_above_ten",
            Rule::OddPurchaseDay => "odd_purchase_day",
            Rule::AfternoonPurchase => "afternoon_purchase",
        };
        f.write_str(name)
    }
}

/// The last `-` separated component of the date, as an integer.
fn purchase_day(date: &str) -> Option<i64> {
    date.rsplit('-').next()?.trim().parse().ok()
}

/// Each rule paired with the points it awards to `receipt`, in rule order.
pub fn breakdown(receipt: &Receipt) -> Vec<(Rule, i64)> {
    Rule::ALL
        .iter()
        .map(|rule| (*rule, rule.points(receipt)))
        .collect()
}

/// Total points awarded to `receipt`.
pub fn score(receipt: &Receipt) -> i64 {
    breakdown(receipt)
        .into_iter()
        .inspect(|(rule, points)| debug!(%rule, points, "rule evaluated"))
        .map(|(_, points)| points)
        .sum()
}
