pub mod components;
pub mod pages;
mod style;

pub use style::{FORM_SCRIPT, STYLE};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::HomePage;

pub const TITLE: &str = "Chef AI | Recipe & Cooking Assistant";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=TITLE/>
        <Meta name="description" content="Ask an AI chef for recipes, substitutions, and cooking tips"/>

        <Router>
            <main class="container">
                <Routes fallback=|| "Page not found">
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
