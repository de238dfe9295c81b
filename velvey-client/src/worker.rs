//! Worker client for order formatting
//!
//! The Worker proxy converts a numeric order id into the structured
//! order payload the backend expects.

use crate::{ClientError, ClientResult, ExtensionConfig, error::ErrorBody};
use reqwest::Client;
use serde::Serialize;
use shared::order::OrderPayload;

/// HTTP client for the Worker proxy.
#[derive(Debug, Clone)]
pub struct WorkerClient {
    client: Client,
    endpoint: String,
}

/// Request body sent to the worker.
#[derive(Serialize)]
struct WorkerRequest<'a> {
    #[serde(rename = "orderId")]
    order_id: &'a str,
}

impl WorkerClient {
    /// Create a new worker client from configuration
    pub fn new(config: &ExtensionConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            endpoint: config.worker_url.clone(),
        }
    }

    /// Ask the worker to format the order with the given numeric id.
    ///
    /// At-most-once: a failed invocation is not retried; the caller
    /// decides what the failure means for the flow. The id is sent
    /// verbatim, numeric or not.
    pub async fn fetch_order_payload(&self, numeric_id: &str) -> ClientResult<OrderPayload> {
        tracing::debug!(order_id = %numeric_id, "Requesting order payload from worker");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&WorkerRequest {
                order_id: numeric_id,
            })
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::RemoteService {
                service: "worker",
                status,
                body: ErrorBody::from_raw(raw),
            });
        }

        let payload: OrderPayload = serde_json::from_str(&raw)?;
        tracing::debug!(order_id = %payload.order_id, "Worker returned order payload");
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_request_field_spelling() {
        let body = serde_json::to_string(&WorkerRequest { order_id: "111" }).unwrap();
        assert_eq!(body, r#"{"orderId":"111"}"#);
    }
}
