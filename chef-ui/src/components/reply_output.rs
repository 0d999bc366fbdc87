use leptos::prelude::*;

#[component]
pub fn ReplyOutput(
    #[prop(into)] output: String,
    #[prop(optional)] is_error: bool,
) -> impl IntoView {
    let class = if is_error {
        "reply__output reply__output--error"
    } else {
        "reply__output"
    };

    view! {
        <div class="reply">
            <label class="reply__label" for="reply">"Chef AI response"</label>
            <textarea id="reply" class=class rows="20" readonly=true>
                {format!("\n{}", output)}
            </textarea>
        </div>
    }
}
