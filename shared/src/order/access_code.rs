//! Backend-issued access code

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque token issued by the backend service.
///
/// Permits the downstream message-composition flow. Created remotely,
/// never mutated; the backend may decline to issue one (empty response
/// body), which callers model as `Option<AccessCode>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessCode(String);

impl AccessCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AccessCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for AccessCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}
