//! Shared types for the Velvey checkout extension
//!
//! Domain types used across the extension crates: order references,
//! order payloads, line items and access codes.

pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use order::{
    AccessCode, ConfirmedOrder, LineItem, OrderConfirmation, OrderPayload, OrderReference,
};
