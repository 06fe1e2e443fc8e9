use crate::domain::ports::ReceiptStoreBox;
use crate::domain::receipt::{Receipt, ReceiptId, ScoredReceipt};
use crate::domain::{scoring, validator};
use crate::error::{ReceiptError, Result};
use tracing::{info, warn};

/// Validates, scores and stores receipts.
///
/// `ReceiptProcessor` owns the storage backend. The validation and scoring
/// steps are pure; the store is the only shared state.
pub struct ReceiptProcessor {
    store: ReceiptStoreBox,
}

impl ReceiptProcessor {
    /// Creates a new `ReceiptProcessor` backed by `store`.
    pub fn new(store: ReceiptStoreBox) -> Self {
        Self { store }
    }

    /// Validates and scores `receipt` without storing it.
    pub fn evaluate(receipt: &Receipt) -> Result<i64> {
        if let Err(e) = validator::validate(receipt) {
            warn!(retailer = %receipt.retailer, error = %e, "receipt rejected");
            return Err(e);
        }
        Ok(scoring::score(receipt))
    }

    /// Processes a submitted receipt and returns the identifier it was stored under.
    pub async fn process(&self, receipt: Receipt) -> Result<ReceiptId> {
        let points = Self::evaluate(&receipt)?;
        let id = self.store.put(receipt, points).await?;
        info!(%id, points, "receipt processed");
        Ok(id)
    }

    /// The scored receipt stored under `id`.
    pub async fn receipt(&self, id: &ReceiptId) -> Result<ScoredReceipt> {
        match self.store.get(id).await? {
            Some(scored) => Ok(scored),
            None => {
                warn!(%id, "receipt not found");
                Err(ReceiptError::NotFound(id.to_string()))
            }
        }
    }

    /// Points awarded to the receipt stored under `id`.
    pub async fn points(&self, id: &ReceiptId) -> Result<i64> {
        self.receipt(id).await.map(|scored| scored.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::receipt::Item;
    use crate::infrastructure::in_memory::InMemoryReceiptStore;

    fn processor() -> ReceiptProcessor {
        ReceiptProcessor::new(Box::new(InMemoryReceiptStore::new()))
    }

    fn target_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2023-01-01".to_string(),
            purchase_time: "14:30".to_string(),
            items: vec![
                Item::new("Pepsi 12 Pack", "5.49"),
                Item::new("Bread", "3.99"),
            ],
            total: "9.48".to_string(),
        }
    }

    #[tokio::test]
    async fn test_process_then_lookup_round_trip() {
        let processor = processor();
        let receipt = target_receipt();
        let expected = scoring::score(&receipt);

        let id = processor.process(receipt.clone()).await.unwrap();

        assert_eq!(processor.points(&id).await.unwrap(), expected);
        let stored = processor.receipt(&id).await.unwrap();
        assert_eq!(stored.receipt, receipt);
        assert_eq!(stored.points, 27);
    }

    #[tokio::test]
    async fn test_invalid_receipt_is_not_stored() {
        let store = InMemoryReceiptStore::new();
        let processor = ReceiptProcessor::new(Box::new(store.clone()));

        let receipt = Receipt {
            items: vec![],
            ..target_receipt()
        };
        let result = processor.process(receipt).await;

        assert!(matches!(
            result,
            Err(ReceiptError::InvalidReceipt(ref reason)) if reason == validator::EMPTY_ITEMS
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let processor = processor();
        processor.process(target_receipt()).await.unwrap();

        let result = processor.points(&ReceiptId::generate()).await;
        assert!(matches!(result, Err(ReceiptError::NotFound(_))));
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let receipt = target_receipt();
        let first = ReceiptProcessor::evaluate(&receipt).unwrap();
        let second = ReceiptProcessor::evaluate(&receipt).unwrap();
        assert_eq!(first, second);
    }
}
