//! Velvey Client - order notification and access-code retrieval
//!
//! Client-side core of the Velvey checkout extension: extracts the
//! order identifier from the host's confirmation data, runs the
//! two-hop Worker -> Backend pipeline exactly once per rendered order
//! view, and maps the outcome to a view model for the host to render.

pub mod backend;
pub mod config;
pub mod error;
pub mod feed;
pub mod flow;
pub mod storage;
pub mod view;
pub mod worker;

pub use backend::BackendClient;
pub use config::ExtensionConfig;
pub use error::{ClientError, ClientResult, ErrorBody};
pub use feed::{OrderFeed, OrderFeedHandle};
pub use flow::{FlowOutcome, OrderFlow, RunState};
pub use storage::{CodeStorage, StorageError, StorageResult};
pub use view::{View, view_for};
pub use worker::WorkerClient;

// Re-export shared types for convenience
pub use shared::order::{AccessCode, OrderConfirmation, OrderPayload, OrderReference};
