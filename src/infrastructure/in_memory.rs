use crate::domain::ports::ReceiptStore;
use crate::domain::receipt::{Receipt, ReceiptId, ScoredReceipt};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for scored receipts.
///
/// Uses `Arc<RwLock<HashMap<ReceiptId, ScoredReceipt>>>` so clones share the
/// same map. Contents live only as long as the process.
#[derive(Default, Clone)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<ReceiptId, ScoredReceipt>>>,
}

impl InMemoryReceiptStore {
    /// Creates a new, empty in-memory receipt store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored receipts.
    pub async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.receipts.read().await.is_empty()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn put(&self, receipt: Receipt, points: i64) -> Result<ReceiptId> {
        let mut receipts = self.receipts.write().await;
        let mut id = ReceiptId::generate();
        while receipts.contains_key(&id) {
            id = ReceiptId::generate();
        }
        receipts.insert(id.clone(), ScoredReceipt { receipt, points });
        Ok(id)
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<ScoredReceipt>> {
        let receipts = self.receipts.read().await;
        Ok(receipts.get(id).cloned())
    }
}
