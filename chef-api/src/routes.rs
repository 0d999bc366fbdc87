use crate::render::{render_ask_page, AskOutcome};
use axum::{extract::Query, response::Html, routing::get, Form, Router};
use chef_app::AppContext;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AskForm {
    pub prompt: String,
    #[serde(default)]
    pub temperature: Option<f64>,
}

/// `/ask` accepts the form as a POST body or as a bookmarkable query string.
pub fn ask_routes<S>(ctx: AppContext) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(
        "/ask",
        get({
            let ctx = ctx.clone();
            move |query: Query<AskForm>| {
                let ctx = ctx.clone();
                async move { handle_ask_form(ctx, query.0).await }
            }
        })
        .post({
            let ctx = ctx.clone();
            move |form: Form<AskForm>| {
                let ctx = ctx.clone();
                async move { handle_ask_form(ctx, form.0).await }
            }
        }),
    )
}

async fn handle_ask_form(ctx: AppContext, form: AskForm) -> Html<String> {
    let settings = ctx.form_settings();
    let (output, is_error) = match ctx.ask_chef.execute(&form.prompt, form.temperature).await {
        Ok(reply) => (reply.display(), false),
        Err(e) => {
            tracing::warn!("Chef request failed: {}", e);
            (e.display_message(), true)
        }
    };

    Html(render_ask_page(&AskOutcome {
        prompt: &form.prompt,
        temperature: form.temperature.filter(|_| settings.temperature_adjustable),
        output: &output,
        is_error,
        settings,
    }))
}
