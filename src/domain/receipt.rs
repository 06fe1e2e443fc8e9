use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single purchased line on a receipt.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub price: String,
}

/// A receipt as submitted by a client.
///
/// Every field is kept in its textual form. Format checks live in
/// [`crate::domain::validator`] and numeric interpretation happens per rule in
/// [`crate::domain::scoring`], so a receipt that fails to parse still
/// deserializes and can be rejected with a precise reason.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default)]
    pub retailer: String,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub purchase_time: String,
    #[serde(default, deserialize_with = "deserialize_items")]
    pub items: Vec<Item>,
    #[serde(default)]
    pub total: String,
}

/// Anything other than a JSON array reads as no items, so the validator
/// reports it in check order rather than failing the whole document.
fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(D::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }

    /// The description with surrounding whitespace removed.
    pub fn trimmed_description(&self) -> &str {
        self.short_description.trim()
    }
}

/// Opaque identifier handed out when a receipt is stored.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generates a fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReceiptId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ReceiptId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A receipt together with the points it earned.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ScoredReceipt {
    pub receipt: Receipt,
    pub points: i64,
}
