use super::receipt::{Receipt, ReceiptId, ScoredReceipt};
use crate::error::Result;
use async_trait::async_trait;

/// Keyed storage for scored receipts.
///
/// Implementations generate the identifier on `put` and must make it visible
/// to any `get` issued after `put` returns.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    async fn put(&self, receipt: Receipt, points: i64) -> Result<ReceiptId>;
    async fn get(&self, id: &ReceiptId) -> Result<Option<ScoredReceipt>>;
}

pub type ReceiptStoreBox = Box<dyn ReceiptStore>;
