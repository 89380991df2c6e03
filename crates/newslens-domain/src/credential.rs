//! Opaque completion-service credential

use std::fmt;

/// The secret token authorizing calls to the completion service.
///
/// Held in session state after validation and read-only thereafter; the
/// only mutation is the explicit clear action, which drops the whole key.
/// `Debug` redacts the key material so it never lands in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a candidate credential string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Access the secret for constructing an authorization header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Cheap plausibility check applied before the key is handed to the
    /// validator: nonempty and not obviously truncated.
    pub fn is_plausible(&self) -> bool {
        let trimmed = self.0.trim();
        !trimmed.is_empty() && trimmed.len() >= 8
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(***)")
    }
}
