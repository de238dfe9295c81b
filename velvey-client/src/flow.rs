//! Run-once order notification flow
//!
//! Coordinates identifier extraction, the worker call and the backend
//! call exactly once per displayed order view.

use crate::feed::OrderFeedHandle;
use crate::{BackendClient, ClientResult, CodeStorage, ExtensionConfig, WorkerClient};
use shared::order::{AccessCode, OrderConfirmation, OrderReference};

/// Lifecycle of one order view's notification flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RunState {
    /// No order reference seen yet
    #[default]
    NotStarted,
    /// Remote calls in progress
    InFlight,
    /// Flow settled, successfully or not
    Completed(FlowOutcome),
}

/// Terminal outcome of a flow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Both remote calls succeeded. The backend may still have
    /// declined to issue a code (empty body).
    Success(Option<AccessCode>),
    /// Either remote call failed; details were logged, nothing more.
    Failed,
}

/// One-shot orchestrator bound to a single rendered order view.
///
/// Constructed fresh per view and discarded on teardown, never shared
/// across orders. The run-once guard is a plain check-then-set on
/// [`RunState`]: snapshot delivery is serialized by the host, so no
/// lock is involved.
pub struct OrderFlow {
    worker: WorkerClient,
    backend: BackendClient,
    storage: Option<CodeStorage>,
    state: RunState,
    order: Option<OrderReference>,
}

impl OrderFlow {
    /// Create a flow for one order view.
    pub fn new(config: &ExtensionConfig) -> Self {
        Self {
            worker: config.build_worker_client(),
            backend: config.build_backend_client(),
            storage: None,
            state: RunState::NotStarted,
            order: None,
        }
    }

    /// Mirror obtained codes into persistent storage for companion
    /// views.
    pub fn with_storage(mut self, storage: CodeStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// The order this flow latched onto, once it has started.
    pub fn order_reference(&self) -> Option<&OrderReference> {
        self.order.as_ref()
    }

    /// Feed one host snapshot into the flow.
    ///
    /// The first snapshot carrying an order reference triggers the
    /// two-hop pipeline; every later snapshot for this view is
    /// ignored, whether it repeats the reference or not. Snapshots
    /// without an order leave the flow in `NotStarted`.
    pub async fn on_snapshot(&mut self, confirmation: &OrderConfirmation) -> &RunState {
        let Some(reference) = confirmation.order_reference() else {
            return &self.state;
        };
        if self.state != RunState::NotStarted {
            return &self.state;
        }

        let reference = reference.clone();
        self.state = RunState::InFlight;
        self.order = Some(reference.clone());

        let outcome = match self.run(&reference).await {
            Ok(code) => {
                if let Some(code) = &code {
                    self.persist(code);
                }
                FlowOutcome::Success(code)
            }
            Err(e) => {
                // Fail silent towards the user: the view simply shows
                // no call-to-action.
                tracing::warn!(
                    order_id = %reference.numeric_id(),
                    error = %e,
                    "Order notification flow failed"
                );
                FlowOutcome::Failed
            }
        };

        self.state = RunState::Completed(outcome);
        &self.state
    }

    /// Drive the flow from a feed until it settles.
    ///
    /// Consumes snapshots until the first one carrying an order
    /// reference, runs the pipeline, and returns the terminal state.
    /// Returns the current state unchanged if the feed closes first.
    pub async fn run_until_settled(&mut self, handle: &mut OrderFeedHandle) -> &RunState {
        while !matches!(self.state, RunState::Completed(_)) {
            let snapshot = handle.snapshot();
            self.on_snapshot(&snapshot).await;
            if matches!(self.state, RunState::Completed(_)) {
                break;
            }
            if handle.changed().await.is_err() {
                break;
            }
        }
        &self.state
    }

    /// The sequential two-hop pipeline: worker first, backend second.
    /// A worker failure means the backend is never invoked.
    async fn run(&self, reference: &OrderReference) -> ClientResult<Option<AccessCode>> {
        let payload = self
            .worker
            .fetch_order_payload(reference.numeric_id())
            .await?;
        self.backend.submit_order_payload(&payload).await
    }

    fn persist(&self, code: &AccessCode) {
        let Some(storage) = &self.storage else {
            return;
        };
        // Best effort: a storage failure must not fail the flow
        if let Err(e) = storage.set_access_code(code.as_str()) {
            tracing::warn!(error = %e, "Failed to persist access code");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_snapshot_leaves_flow_not_started() {
        let mut flow = OrderFlow::new(&ExtensionConfig::default());
        let state = flow.on_snapshot(&OrderConfirmation::default()).await;
        assert_eq!(state, &RunState::NotStarted);
        assert!(flow.order_reference().is_none());
    }
}
