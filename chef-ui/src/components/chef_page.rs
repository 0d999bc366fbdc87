use super::{ExamplePrompts, PromptForm, ReplyOutput};
use chef_app::domain::FormSettings;
use leptos::prelude::*;

pub const INTRO: &str =
    "Ask for recipes, substitutions, or cooking tips. Example: \"What can I cook with chicken and rice?\"";

/// Everything inside `<main>`: intro, form, output box and examples.
#[component]
pub fn ChefPage(
    settings: FormSettings,
    #[prop(into, optional)] prompt: String,
    #[prop(optional_no_strip)] temperature: Option<f64>,
    #[prop(into, optional)] output: String,
    #[prop(optional)] is_error: bool,
) -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="hero__title">"🍽️ Chef AI"</h1>
            <p class="hero__subtitle">{INTRO}</p>
        </div>

        <PromptForm settings=settings prompt=prompt temperature=temperature/>
        <ReplyOutput output=output is_error=is_error/>
        <ExamplePrompts/>
    }
}
