//! Render payload.

use serde::{Deserialize, Serialize};

/// What the display shows after an operation: the expression history
/// line and the live value line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Expression history shown above the live value.
    pub previous: String,
    /// The live operand or result, or the error sentinel.
    pub current: String,
}

impl Frame {
    pub fn new(previous: String, current: String) -> Self {
        Self { previous, current }
    }

    /// History line as displayed: an empty history renders as `0`.
    pub fn previous_display(&self) -> &str {
        if self.previous.is_empty() {
            "0"
        } else {
            &self.previous
        }
    }

    /// Serialize the payload for a web render layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
