#![allow(dead_code)]

use rand::Rng;
use rand::seq::SliceRandom;
use receipt_points::domain::receipt::{Item, Receipt};
use serde_json::{Value, json};

const RETAILERS: &[&str] = &["Target", "Walgreens", "M&M Corner Market", "Trader-Joes", "7 Eleven"];
const DESCRIPTIONS: &[&str] = &[
    "Mountain Dew 12PK",
    "Emils Cheese Pizza",
    "Gatorade",
    "Pepsi - 12-oz",
    "   Klarbrunn 12-PK 12 FL OZ  ",
    "Bread",
];

pub fn target_payload() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2023-01-01",
        "purchaseTime": "14:30",
        "items": [
            {"shortDescription": "Pepsi 12 Pack", "price": "5.49"},
            {"shortDescription": "Bread", "price": "3.99"}
        ],
        "total": "9.48"
    })
}

fn amount(rng: &mut impl Rng) -> String {
    format!("{}.{:02}", rng.gen_range(0..100), rng.gen_range(0..100))
}

/// A well-formed receipt with randomized field values.
pub fn random_receipt(rng: &mut impl Rng) -> Receipt {
    let items = (0..rng.gen_range(1..8))
        .map(|_| {
            let description = DESCRIPTIONS.choose(rng).copied().unwrap_or("Milk");
            Item::new(description, amount(rng))
        })
        .collect();

    Receipt {
        retailer: RETAILERS.choose(rng).copied().unwrap_or("Target").to_string(),
        purchase_date: format!("2022-{:02}-{:02}", rng.gen_range(1..13), rng.gen_range(1..29)),
        purchase_time: format!("{:02}:{:02}", rng.gen_range(0..24), rng.gen_range(0..60)),
        items,
        total: amount(rng),
    }
}
