//! Structured error types for fixtable.
//!
//! Initialization reports markup problems to the caller rather than logging
//! them; environment-probe failures abort setup for that table before any
//! destructive DOM step.

/// All errors that can occur while building or driving a fixed-header table.
#[derive(Debug, thiserror::Error)]
pub enum FixTableError {
    /// The target element is not a usable table (missing header or body
    /// group even after normalization).
    #[error("invalid table mark-up: {0}")]
    Markup(String),

    /// The rendering environment could not be measured (no document/body,
    /// probe element construction failed).
    #[error("geometry probe failed: {0}")]
    Probe(String),

    /// A DOM operation failed unexpectedly.
    #[error("DOM error: {0}")]
    Dom(String),

    /// The options object could not be deserialized.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FixTableError>;

impl From<String> for FixTableError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for FixTableError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<FixTableError> for wasm_bindgen::JsValue {
    fn from(e: FixTableError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
