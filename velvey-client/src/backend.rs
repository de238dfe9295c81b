//! Backend client for access-code issuance
//!
//! The backend receives the worker-formatted order payload and may
//! answer with an access code. An empty 2xx body is a valid "no code
//! issued" outcome, so the response is read as text before any JSON
//! parsing is attempted.

use crate::{ClientError, ClientResult, ExtensionConfig, error::ErrorBody};
use reqwest::Client;
use shared::order::{AccessCode, OrderPayload};

/// HTTP client for the access-code backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    endpoint: String,
}

impl BackendClient {
    /// Create a new backend client from configuration
    pub fn new(config: &ExtensionConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            endpoint: config.backend_url.clone(),
        }
    }

    /// Submit the order payload and collect the access code, if one is
    /// issued.
    ///
    /// The payload is forwarded as received from the worker. Returns
    /// `Ok(None)` when the backend answers 2xx with an empty body.
    pub async fn submit_order_payload(
        &self,
        payload: &OrderPayload,
    ) -> ClientResult<Option<AccessCode>> {
        tracing::debug!(order_id = %payload.order_id, "Submitting order payload to backend");

        let response = self.client.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::RemoteService {
                service: "backend",
                status,
                body: ErrorBody::from_raw(raw),
            });
        }

        let code = parse_code_body(raw);
        match &code {
            Some(code) => tracing::debug!(code = %code, "Backend issued access code"),
            None => tracing::debug!("Backend issued no access code"),
        }
        Ok(code.map(AccessCode::new))
    }
}

/// Extract the access code from a successful response body.
///
/// - empty body: no code issued
/// - JSON body: the `accessCode` / `access_code` field, whichever the
///   backend spelled; a JSON body with neither field carries no code
/// - anything else: the whole raw text is the code
fn parse_code_body(raw: String) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(value) => value
            .get("accessCode")
            .or_else(|| value.get("access_code"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned),
        Err(_) => Some(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_no_code() {
        assert_eq!(parse_code_body(String::new()), None);
    }

    #[test]
    fn test_camel_case_field() {
        assert_eq!(
            parse_code_body(r#"{"accessCode":"ABC123"}"#.to_string()),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn test_snake_case_field() {
        assert_eq!(
            parse_code_body(r#"{"access_code":"ABC123"}"#.to_string()),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn test_plain_text_body_is_the_code() {
        assert_eq!(
            parse_code_body("XYZ9".to_string()),
            Some("XYZ9".to_string())
        );
    }

    #[test]
    fn test_json_without_code_field() {
        assert_eq!(parse_code_body(r#"{"status":"queued"}"#.to_string()), None);
    }
}
