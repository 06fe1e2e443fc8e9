//! Storage backends implementing [`crate::domain::ports::ReceiptStore`].

pub mod in_memory;
