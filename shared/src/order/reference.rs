//! Host-issued order identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Globally unique order identifier issued by the host runtime.
///
/// Shaped like `gid://shopify/Order/6675439255728`. Only the trailing
/// numeric segment is used downstream; the rest of the string is kept
/// as delivered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderReference(String);

impl OrderReference {
    /// Wrap a host-delivered GID string.
    pub fn new(gid: impl Into<String>) -> Self {
        Self(gid.into())
    }

    /// The full GID string as delivered by the host.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The segment after the final `/`, verbatim.
    ///
    /// A string without any `/` comes back whole. The segment is not
    /// validated as numeric: malformed identifiers pass through to the
    /// remote services unchanged.
    pub fn numeric_id(&self) -> &str {
        match self.0.rsplit_once('/') {
            Some((_, tail)) => tail,
            None => &self.0,
        }
    }
}

impl fmt::Display for OrderReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderReference {
    fn from(gid: String) -> Self {
        Self(gid)
    }
}

impl From<&str> for OrderReference {
    fn from(gid: &str) -> Self {
        Self(gid.to_string())
    }
}

/// One snapshot of the host's order confirmation subscription.
///
/// Mirrors the host shape `{ order: { id } }`. The order is absent
/// until the host has resolved it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<ConfirmedOrder>,
}

/// The resolved order inside a confirmation snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedOrder {
    /// Full GID of the confirmed order
    pub id: OrderReference,
}

impl OrderConfirmation {
    /// Snapshot with a resolved order.
    pub fn with_order(reference: impl Into<OrderReference>) -> Self {
        Self {
            order: Some(ConfirmedOrder {
                id: reference.into(),
            }),
        }
    }

    /// The order reference, if the host has resolved one.
    pub fn order_reference(&self) -> Option<&OrderReference> {
        self.order.as_ref().map(|o| &o.id)
    }
}
