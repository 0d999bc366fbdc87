mod app;
mod render;
mod routes;

use chef_app::AppContext;
use leptos::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let app_context = match AppContext::from_env() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = app_context.bind_addr;
    let settings = app_context.form_settings();

    let app = app::app_router(app_context, leptos_options);

    tracing::info!("Listening on http://{}", addr);
    tracing::info!(
        "Temperature slider: {} (default {:.2})",
        if settings.temperature_adjustable { "on" } else { "off" },
        settings.default_temperature
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
