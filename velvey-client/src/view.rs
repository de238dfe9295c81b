//! Presentation view model
//!
//! Pure mapping from [`RunState`] to what the host should render. The
//! rendering primitives belong to the host runtime; this module only
//! decides between the three surfaces and builds the call-to-action
//! URL.

use crate::flow::{FlowOutcome, RunState};
use shared::order::OrderReference;

/// What the order-status surface should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Order not resolved yet, or remote calls still in flight
    Loading,
    /// Flow settled without a code: order id only, no action
    OrderOnly { order_id: String },
    /// Code obtained: order id plus the message call-to-action
    CallToAction { order_id: String, url: String },
}

/// Build the view for the current flow state.
///
/// Failures never surface here: a settled flow without a code renders
/// the order id and nothing else.
pub fn view_for(state: &RunState, order: Option<&OrderReference>, setup_url: &str) -> View {
    match state {
        RunState::NotStarted | RunState::InFlight => View::Loading,
        RunState::Completed(outcome) => {
            let order_id = order
                .map(|r| r.numeric_id().to_string())
                .unwrap_or_default();
            match outcome {
                FlowOutcome::Success(Some(code)) => match cta_url(setup_url, code.as_str()) {
                    Some(url) => View::CallToAction { order_id, url },
                    None => View::OrderOnly { order_id },
                },
                FlowOutcome::Success(None) | FlowOutcome::Failed => View::OrderOnly { order_id },
            }
        }
    }
}

/// Call-to-action target: `<setup>/typeOfMessage/?AccessCode=<code>`,
/// with the code percent-encoded.
pub fn cta_url(setup_url: &str, code: &str) -> Option<String> {
    let base = format!("{}/typeOfMessage/", setup_url.trim_end_matches('/'));
    match reqwest::Url::parse_with_params(&base, [("AccessCode", code)]) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "Invalid setup URL for call-to-action");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::AccessCode;

    const SETUP: &str = "https://setup.velvey.com";

    #[test]
    fn test_loading_states() {
        assert_eq!(view_for(&RunState::NotStarted, None, SETUP), View::Loading);
        assert_eq!(view_for(&RunState::InFlight, None, SETUP), View::Loading);
    }

    #[test]
    fn test_failed_shows_order_only() {
        let order = OrderReference::new("gid://shopify/Order/42");
        let view = view_for(
            &RunState::Completed(FlowOutcome::Failed),
            Some(&order),
            SETUP,
        );
        assert_eq!(
            view,
            View::OrderOnly {
                order_id: "42".to_string()
            }
        );
    }

    #[test]
    fn test_no_code_shows_order_only() {
        let order = OrderReference::new("gid://shopify/Order/42");
        let view = view_for(
            &RunState::Completed(FlowOutcome::Success(None)),
            Some(&order),
            SETUP,
        );
        assert_eq!(
            view,
            View::OrderOnly {
                order_id: "42".to_string()
            }
        );
    }

    #[test]
    fn test_code_builds_call_to_action() {
        let order = OrderReference::new("gid://shopify/OrderIdentity/111");
        let state = RunState::Completed(FlowOutcome::Success(Some(AccessCode::new("XYZ9"))));
        let view = view_for(&state, Some(&order), SETUP);
        assert_eq!(
            view,
            View::CallToAction {
                order_id: "111".to_string(),
                url: "https://setup.velvey.com/typeOfMessage/?AccessCode=XYZ9".to_string()
            }
        );
    }

    #[test]
    fn test_code_is_percent_encoded() {
        let url = cta_url(SETUP, "AB/C&1").unwrap();
        assert_eq!(
            url,
            "https://setup.velvey.com/typeOfMessage/?AccessCode=AB%2FC%261"
        );
    }

    #[test]
    fn test_trailing_slash_on_setup_host() {
        let url = cta_url("https://setup.velvey.com/", "XYZ9").unwrap();
        assert_eq!(url, "https://setup.velvey.com/typeOfMessage/?AccessCode=XYZ9");
    }
}
