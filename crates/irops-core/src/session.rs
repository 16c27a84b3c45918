//! Conversation session state.
//!
//! A session holds everything one operator interaction needs: the active
//! filter selections, the chosen completion model, and the running
//! transcript. Callers own their session and pass it explicitly; nothing
//! here is process-global.

use crate::filter::FilterState;
use crate::model::ModelId;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: String,
}

/// The state of one operator conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    id: String,
    created_at: String,
    pub filter: FilterState,
    pub model: ModelId,
    transcript: Vec<ChatMessage>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            filter: FilterState::default(),
            model: ModelId::default(),
            transcript: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Appends one entry to the transcript, stamping it now.
    pub fn append(&mut self, role: MessageRole, content: impl Into<String>) {
        self.transcript.push(ChatMessage {
            role,
            content: content.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        });
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
