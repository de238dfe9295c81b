//! Worker-formatted order payload

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Structured order returned by the Worker service.
///
/// The worker owns this shape; the extension treats it as a
/// pass-through and forwards it to the backend as received. Fields the
/// extension does not interpret survive the round trip via `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    /// Numeric order id, as a string
    #[serde(default)]
    pub order_id: String,
    /// Ordered line items
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// Worker fields the extension does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One purchased line, as formatted by the worker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product title
    #[serde(default)]
    pub title: String,
    /// Purchased quantity
    #[serde(default)]
    pub quantity: i64,
    /// Host variant reference (GID string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    /// Custom line-item properties (key -> value)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, String>,
    /// Worker fields the extension does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
