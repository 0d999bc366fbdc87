use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Set {0} in your environment or .env file")]
    MissingApiKey(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("OpenAI request failed: {0}")]
    OpenAiError(String),
}

impl AppError {
    /// Text shown in the output box when a request fails.
    pub fn display_message(&self) -> String {
        format!("Error: {}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message_prefixes_description() {
        let err = AppError::OpenAiError("API error: 401 Unauthorized".to_string());
        assert_eq!(
            err.display_message(),
            "Error: OpenAI request failed: API error: 401 Unauthorized"
        );
    }

    #[test]
    fn test_missing_key_message_names_variable() {
        let err = AppError::MissingApiKey("OPENAI_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Set OPENAI_API_KEY in your environment or .env file"
        );
    }
}
