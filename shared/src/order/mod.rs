//! Order Identity and Payload Module
//!
//! Types flowing through the order-notification pipeline:
//! - References: the host-issued global order identifier
//! - Payloads: the structured order produced by the Worker service
//! - Access codes: the opaque token issued by the Backend service

pub mod access_code;
pub mod payload;
pub mod reference;

// Re-exports
pub use access_code::AccessCode;
pub use payload::{LineItem, OrderPayload};
pub use reference::{ConfirmedOrder, OrderConfirmation, OrderReference};
