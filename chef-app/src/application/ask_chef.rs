use crate::domain::{ChatCompletion, ChefReply, FormSettings, GenerationParams};
use crate::infrastructure::openai::build_turn;
use chef_errors::AppError;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

pub struct AskChef {
    gateway: Arc<dyn ChatCompletion>,
    system_prompt: Option<String>,
    params: GenerationParams,
    settings: FormSettings,
}

impl AskChef {
    pub fn new(
        gateway: Arc<dyn ChatCompletion>,
        system_prompt: Option<String>,
        params: GenerationParams,
        settings: FormSettings,
    ) -> Self {
        Self {
            gateway,
            system_prompt,
            params,
            settings,
        }
    }

    pub fn settings(&self) -> FormSettings {
        self.settings
    }

    /// Sends one single-turn request. The requested temperature only applies
    /// when the form exposes the slider.
    pub async fn execute(
        &self,
        user_text: &str,
        temperature: Option<f64>,
    ) -> Result<ChefReply, AppError> {
        let turn = build_turn(user_text, self.system_prompt.as_deref());
        let params = match temperature {
            Some(t) if self.settings.temperature_adjustable => {
                self.params.clone().with_temperature(t)
            }
            _ => self.params.clone(),
        };

        let request_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("ask_chef", %request_id, model = %params.model);

        async move {
            tracing::info!(
                temperature = params.temperature,
                prompt_chars = user_text.chars().count(),
                "Sending chat completion"
            );
            let start = Instant::now();
            let content = self.gateway.complete(&turn, &params).await?;
            let elapsed = start.elapsed();
            tracing::info!("Completion received in {:.1}s", elapsed.as_secs_f64());
            Ok::<_, AppError>(ChefReply::new(content, elapsed))
        }
        .instrument(span)
        .await
    }

    /// Text for the output box: the annotated reply, or `Error: <description>`.
    pub async fn respond(&self, user_text: &str, temperature: Option<f64>) -> String {
        match self.execute(user_text, temperature).await {
            Ok(reply) => reply.display(),
            Err(e) => {
                tracing::warn!("Chef request failed: {}", e);
                e.display_message()
            }
        }
    }
}
