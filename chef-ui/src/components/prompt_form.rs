use chef_app::domain::FormSettings;
use leptos::prelude::*;

pub const PROMPT_PLACEHOLDER: &str = "Type ingredients or ask a cooking question...";

#[component]
pub fn PromptForm(
    settings: FormSettings,
    #[prop(into, optional)] prompt: String,
    #[prop(optional_no_strip)] temperature: Option<f64>,
) -> impl IntoView {
    let temperature = format!(
        "{:.2}",
        temperature.unwrap_or(settings.default_temperature)
    );
    let shown = temperature.clone();

    // The parser drops one newline right after `<textarea>`, so lead with one.
    view! {
        <form action="/ask" method="post" class="chef-form">
            <label class="chef-form__label" for="prompt">"Your question"</label>
            <textarea
                id="prompt"
                name="prompt"
                rows="4"
                class="chef-form__input"
                placeholder=PROMPT_PLACEHOLDER
            >
                {format!("\n{}", prompt)}
            </textarea>
            {settings.temperature_adjustable.then(move || view! {
                <label class="chef-form__label" for="temperature">
                    "Creativity (temperature)"
                    <span class="chef-form__value">{shown}</span>
                </label>
                <input
                    type="range"
                    id="temperature"
                    name="temperature"
                    class="chef-form__slider"
                    min="0"
                    max="1"
                    step="0.05"
                    value=temperature
                />
            })}
            <button type="submit" class="chef-form__button">"Ask Chef AI"</button>
        </form>
    }
}
