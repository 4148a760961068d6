// src/message.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /chat`. Every field is optional; an absent field is
/// rendered into the persona prompt as the literal string "None".
#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub message_history: Option<String>,
    pub person: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
