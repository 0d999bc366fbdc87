use leptos::prelude::*;

pub const EXAMPLES: [&str; 3] = [
    "I have chicken breast, tomatoes, rice and spinach. Give me a 30-minute dinner recipe for two.",
    "I'm vegetarian and only have potatoes, onions, and chickpeas. Suggest 3 meal ideas.",
    "How do I make a quick tomato chutney to go with dosas?",
];

/// Clicking an example copies it into the prompt box (see `FORM_SCRIPT`).
#[component]
pub fn ExamplePrompts() -> impl IntoView {
    view! {
        <div class="examples">
            <p class="examples__title">"Examples"</p>
            <ul class="examples__list">
                {EXAMPLES
                    .iter()
                    .map(|example| view! {
                        <li>
                            <button type="button" class="examples__item" data-prompt=*example>
                                {*example}
                            </button>
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
