use super::generation_params::DEFAULT_TEMPERATURE;
use serde::{Deserialize, Serialize};

/// What the prompt form exposes to the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    pub temperature_adjustable: bool,
    pub default_temperature: f64,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            temperature_adjustable: true,
            default_temperature: DEFAULT_TEMPERATURE,
        }
    }
}
