// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    // Absent or null is forwarded as-is, i.e. as an empty input.
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    pub fn into_message(self) -> String {
        self.message.unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatError {
    pub error: String,
}
