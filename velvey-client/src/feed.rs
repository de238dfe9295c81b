//! Host order feed
//!
//! Models the host runtime's live order subscription as a watch
//! channel: the host glue owns the [`OrderFeed`] and pushes a snapshot
//! whenever its data changes; each rendered view consumes snapshots
//! through its own [`OrderFeedHandle`]. Dropping the handle is the
//! unsubscribe.

use shared::order::OrderConfirmation;
use tokio::sync::watch;

/// Producer side of the order confirmation feed.
#[derive(Debug)]
pub struct OrderFeed {
    tx: watch::Sender<OrderConfirmation>,
}

impl OrderFeed {
    /// Create a feed with an empty initial snapshot.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(OrderConfirmation::default());
        Self { tx }
    }

    /// Publish a new snapshot to all subscribed handles.
    ///
    /// Publishing with every view torn down is a no-op, not a fault.
    pub fn publish(&self, snapshot: OrderConfirmation) {
        let _ = self.tx.send(snapshot);
    }

    /// Subscribe a view to the feed.
    pub fn subscribe(&self) -> OrderFeedHandle {
        OrderFeedHandle {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for OrderFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Consumer side of the order confirmation feed.
#[derive(Debug)]
pub struct OrderFeedHandle {
    rx: watch::Receiver<OrderConfirmation>,
}

impl OrderFeedHandle {
    /// The current snapshot, marking it as seen.
    pub fn snapshot(&mut self) -> OrderConfirmation {
        self.rx.borrow_and_update().clone()
    }

    /// Wait until a snapshot newer than the last seen one arrives.
    ///
    /// Errors only when the feed itself is gone.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.rx.changed().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribe_sees_latest_snapshot() {
        let feed = OrderFeed::new();
        feed.publish(OrderConfirmation::with_order("gid://shopify/Order/1"));

        let mut handle = feed.subscribe();
        let snapshot = handle.snapshot();
        assert_eq!(
            snapshot.order_reference().map(|r| r.numeric_id()),
            Some("1")
        );
    }

    #[tokio::test]
    async fn test_changed_resolves_on_publish() {
        let feed = OrderFeed::new();
        let mut handle = feed.subscribe();
        assert!(handle.snapshot().order_reference().is_none());

        feed.publish(OrderConfirmation::with_order("gid://shopify/Order/2"));
        handle.changed().await.unwrap();
        assert_eq!(
            handle.snapshot().order_reference().map(|r| r.numeric_id()),
            Some("2")
        );
    }

    #[tokio::test]
    async fn test_changed_errors_when_feed_dropped() {
        let feed = OrderFeed::new();
        let mut handle = feed.subscribe();
        drop(feed);
        assert!(handle.changed().await.is_err());
    }
}
