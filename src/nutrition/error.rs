use thiserror::Error;

/// Per-ingredient lookup failures. None of these abort an order flow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("not found in the nutrition database")]
    NotFound,

    #[error("nutrition API returned HTTP {0}")]
    Status(u16),

    #[error("nutrition API request failed: {0}")]
    Transport(String),

    #[error("nutrition API returned invalid JSON: {0}")]
    Decode(String),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound)
    }
}
