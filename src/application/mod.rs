//! Application layer orchestrating validation, scoring and storage.
//!
//! This module defines the `ReceiptProcessor`, the single entry point used by
//! both the HTTP service and the command line.

pub mod processor;
