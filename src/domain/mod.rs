//! Receipt model, validation and the points rule engine.
//!
//! Everything here is synchronous and free of shared state except the
//! [`ports::ReceiptStore`] trait, which the application layer injects.

pub mod money;
pub mod ports;
pub mod receipt;
pub mod scoring;
pub mod validator;
