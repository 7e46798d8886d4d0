use serde::{Deserialize, Serialize};

/// Generic message response (login, logout, status update).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

impl MessageResponse {
    /// The server's message, or `default` when it sent none.
    pub fn notice_or(&self, default: &str) -> String {
        if self.message.trim().is_empty() {
            default.to_string()
        } else {
            self.message.clone()
        }
    }
}
