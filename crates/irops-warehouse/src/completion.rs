//! Inference endpoint access.
//!
//! Completions travel over the same connection handle as statements. The
//! response body is inspected rather than deserialized into a fixed DTO;
//! deployments disagree on the envelope, so extraction tries the known
//! shapes in order and falls back to the raw JSON.

use crate::client::{TOKEN_TYPE, TOKEN_TYPE_HEADER, WarehouseClient};
use async_trait::async_trait;
use irops_core::model::ModelId;
use irops_core::{IropsError, Result};
use serde::Serialize;
use serde_json::Value;

const COMPLETE_PATH: &str = "/api/v2/cortex/inference:complete";
const TEMPERATURE: f64 = 0.3;
const MAX_TOKENS: u32 = 1024;

/// One completion request: a system instruction and a user turn.
#[derive(Debug, Clone)]
pub struct CompletionPrompt {
    pub model: ModelId,
    pub system: String,
    pub user: String,
}

/// Produces assistant text for a prompt.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, prompt: &CompletionPrompt) -> Result<String>;
}

#[async_trait]
impl CompletionGateway for WarehouseClient {
    async fn complete(&self, prompt: &CompletionPrompt) -> Result<String> {
        let request = CompletionRequest {
            model: prompt.model.to_string(),
            messages: vec![
                WireMessage {
                    role: "system",
                    content: prompt.system.clone(),
                },
                WireMessage {
                    role: "user",
                    content: prompt.user.clone(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        tracing::debug!("requesting completion from {}", prompt.model);

        let response = self
            .client
            .post(format!("{}{}", self.base_url, COMPLETE_PATH))
            .bearer_auth(&self.token)
            .header(TOKEN_TYPE_HEADER, TOKEN_TYPE)
            .json(&request)
            .send()
            .await
            .map_err(|err| IropsError::completion(format!("completion request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(IropsError::completion(format!(
                "completion request returned {status}: {body}"
            )));
        }

        let value: Value = response.json().await.map_err(|err| {
            IropsError::completion(format!("failed to parse completion response: {err}"))
        })?;

        Ok(extract_message_text(&value).unwrap_or_else(|| value.to_string()))
    }
}

#[derive(Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

/// Pulls the assistant text out of whichever envelope the endpoint used.
fn extract_message_text(value: &Value) -> Option<String> {
    if let Some(choice) = value.get("choices").and_then(|choices| choices.get(0)) {
        if let Some(text) = choice.get("messages").and_then(Value::as_str) {
            return Some(text.to_string());
        }
        if let Some(text) = choice
            .get("message")
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
        {
            return Some(text.to_string());
        }
        if let Some(text) = choice.get("text").and_then(Value::as_str) {
            return Some(text.to_string());
        }
    }

    match value.get("message") {
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => other
            .get("content")
            .and_then(Value::as_str)
            .map(str::to_string),
        None => None,
    }
}
