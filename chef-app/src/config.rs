use crate::domain::{
    FormSettings, GenerationParams, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
use crate::infrastructure::openai::OPENAI_API_URL;
use chef_errors::AppError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:7860";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub params: GenerationParams,
    pub settings: FormSettings,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. A blank API key is treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key =
            get(API_KEY_VAR).ok_or_else(|| AppError::MissingApiKey(API_KEY_VAR.to_string()))?;
        let base_url = get("OPENAI_BASE_URL").unwrap_or_else(|| OPENAI_API_URL.to_string());
        let model = get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let max_tokens =
            parse_or("CHEF_MAX_TOKENS", get("CHEF_MAX_TOKENS"), DEFAULT_MAX_TOKENS)?;
        let temperature =
            parse_or("CHEF_TEMPERATURE", get("CHEF_TEMPERATURE"), DEFAULT_TEMPERATURE)?;
        let adjustable = parse_or(
            "CHEF_ADJUSTABLE_TEMPERATURE",
            get("CHEF_ADJUSTABLE_TEMPERATURE"),
            true,
        )?;
        let bind_addr = match get("CHEF_BIND_ADDR") {
            Some(addr) => parse_value("CHEF_BIND_ADDR", &addr)?,
            None => parse_value("CHEF_BIND_ADDR", DEFAULT_BIND_ADDR)?,
        };

        Ok(Self {
            api_key,
            base_url,
            params: GenerationParams::new(model, temperature, max_tokens),
            settings: FormSettings {
                temperature_adjustable: adjustable,
                default_temperature: temperature,
            },
            bind_addr,
        })
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> Result<T, AppError> {
    match value {
        Some(v) => parse_value(key, &v),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, AppError> {
    value
        .parse()
        .map_err(|_| AppError::Config(format!("{} has invalid value '{}'", key, value)))
}
