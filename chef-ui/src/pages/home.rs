use crate::components::ChefPage;
use chef_app::domain::FormSettings;
use leptos::prelude::*;
use server_fn::ServerFnError;

/// Returns the text for the output box; remote failures come back as `Error: ...`.
#[server(AskChefFn, "/api", endpoint = "ask_chef")]
pub async fn ask_chef(prompt: String, temperature: Option<f64>) -> Result<String, ServerFnError> {
    use chef_app::AppContext;

    let ctx = expect_context::<AppContext>();
    tracing::debug!("ask_chef server function called");
    Ok(ctx.ask_chef.respond(&prompt, temperature).await)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let settings = use_context::<FormSettings>().unwrap_or_default();

    view! { <ChefPage settings=settings/> }
}
