use crate::domain::receipt::Receipt;
use crate::error::Result;
use std::io::Read;

/// Reads a single receipt document from a JSON source.
pub struct ReceiptReader<R: Read> {
    source: R,
}

impl<R: Read> ReceiptReader<R> {
    /// Creates a new `ReceiptReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Deserializes the receipt. Field formats are not checked here.
    pub fn receipt(self) -> Result<Receipt> {
        Ok(serde_json::from_reader(self.source)?)
    }
}
