use super::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};
use crate::domain::{ChatCompletion, ConversationTurn, GenerationParams};
use chef_errors::AppError;

pub const OPENAI_API_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OPENAI_API_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait::async_trait]
impl ChatCompletion for OpenAiClient {
    async fn complete(
        &self,
        turn: &ConversationTurn,
        params: &GenerationParams,
    ) -> Result<String, AppError> {
        let request = ChatCompletionRequest::new(turn, params);

        let response = self
            .http_client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::OpenAiError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI error: {} - {}", status, body);
            let message = match ApiErrorResponse::message_from(&body) {
                Some(detail) => format!("API error: {} - {}", status, detail),
                None => format!("API error: {}", status),
            };
            return Err(AppError::OpenAiError(message));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::OpenAiError(e.to_string()))?;

        completion
            .first_content()
            .ok_or_else(|| AppError::OpenAiError("No response from AI".to_string()))
    }
}
