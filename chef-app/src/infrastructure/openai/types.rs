use crate::domain::{ConversationTurn, GenerationParams, Message};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub max_tokens: u32,
    pub temperature: f64,
    pub n: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: MessageContent,
}

#[derive(Debug, Deserialize)]
pub struct MessageContent {
    #[serde(default)]
    pub content: Option<String>,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

impl ApiErrorResponse {
    /// The remote `error.message`, when the body carries one.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .map(|e| e.error.message)
            .filter(|m| !m.trim().is_empty())
    }
}

impl<'a> ChatCompletionRequest<'a> {
    pub fn new(turn: &'a ConversationTurn, params: &'a GenerationParams) -> Self {
        Self {
            model: &params.model,
            messages: turn.messages(),
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            n: params.n,
        }
    }
}

impl ChatCompletionResponse {
    /// Content of the first choice. A `null` content counts as empty text.
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
    }
}
