use crate::application::AskChef;
use crate::config::AppConfig;
use crate::domain::FormSettings;
use crate::infrastructure::openai::{OpenAiClient, SYSTEM_PROMPT};
use chef_errors::AppError;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub ask_chef: Arc<AskChef>,
    pub bind_addr: SocketAddr,
}

impl AppContext {
    pub fn new(ask_chef: AskChef, bind_addr: SocketAddr) -> Self {
        Self {
            ask_chef: Arc::new(ask_chef),
            bind_addr,
        }
    }

    pub fn from_config(config: AppConfig) -> Self {
        let client = OpenAiClient::with_base_url(config.api_key, config.base_url);
        tracing::info!(
            "Using OpenAI-compatible backend with model {}",
            config.params.model
        );
        let ask_chef = AskChef::new(
            Arc::new(client),
            Some(SYSTEM_PROMPT.to_string()),
            config.params,
            config.settings,
        );
        Self::new(ask_chef, config.bind_addr)
    }

    pub fn from_env() -> Result<Self, AppError> {
        AppConfig::from_env().map(Self::from_config)
    }

    pub fn form_settings(&self) -> FormSettings {
        self.ask_chef.settings()
    }
}
