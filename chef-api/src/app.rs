use crate::routes;
use axum::{routing::post, Router};
use chef_app::AppContext;
use chef_ui::pages::AskChefFn;
use chef_ui::{App, FORM_SCRIPT, STYLE, TITLE};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

/// Leptos page, `/ask` form routes and server functions behind one router.
pub fn app_router(app_context: AppContext, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<AskChefFn>();
    tracing::info!("Registered server function: AskChefFn");

    Router::new()
        .merge(routes::ask_routes(app_context.clone()))
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_app_context(&ctx),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_app_context(&ctx)
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

fn provide_app_context(ctx: &AppContext) {
    provide_context(ctx.clone());
    provide_context(ctx.form_settings());
}

fn shell(_options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{TITLE}</title>
                <style>{STYLE}</style>
                <MetaTags/>
            </head>
            <body>
                <App/>
                <script>{FORM_SCRIPT}</script>
            </body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chef_app::application::AskChef;
    use chef_app::domain::{ChatCompletion, ConversationTurn, FormSettings, GenerationParams};
    use chef_errors::AppError;
    use scraper::{Html, Selector};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct CannedGateway(Result<String, AppError>);

    #[async_trait::async_trait]
    impl ChatCompletion for CannedGateway {
        async fn complete(
            &self,
            _turn: &ConversationTurn,
            _params: &GenerationParams,
        ) -> Result<String, AppError> {
            self.0.clone()
        }
    }

    fn router(reply: Result<String, AppError>, settings: FormSettings) -> Router {
        let ask_chef = AskChef::new(
            Arc::new(CannedGateway(reply)),
            Some("be a chef".to_string()),
            GenerationParams::default(),
            settings,
        );
        let ctx = AppContext::new(ask_chef, "127.0.0.1:0".parse().unwrap());
        let leptos_options = LeptosOptions::builder().output_name("chef-ai").build();
        app_router(ctx, leptos_options)
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn count(html: &Html, selector: &str) -> usize {
        html.select(&Selector::parse(selector).unwrap()).count()
    }

    #[tokio::test]
    async fn test_home_page_without_slider() {
        let fixed = FormSettings {
            temperature_adjustable: false,
            default_temperature: 0.6,
        };
        let response = router(Ok("unused".to_string()), fixed)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = Html::parse_document(&body_text(response).await);
        assert_eq!(count(&html, r#"textarea[name="prompt"]"#), 1);
        assert_eq!(count(&html, r#"input[name="temperature"]"#), 0);
        assert_eq!(count(&html, r#"textarea#reply[readonly][rows="20"]"#), 1);
        assert_eq!(count(&html, ".examples__item"), 3);
    }

    #[tokio::test]
    async fn test_home_page_with_slider() {
        let response = router(Ok("unused".to_string()), FormSettings::default())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let html = Html::parse_document(&body_text(response).await);
        assert_eq!(
            count(&html, r#"input[name="temperature"][min="0"][max="1"][value="0.60"]"#),
            1
        );
    }

    async fn call_ask_chef(reply: Result<String, AppError>) -> String {
        let response = router(reply, FormSettings::default())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/ask_chef")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .header(header::ACCEPT, "application/json")
                    .body(Body::from("prompt=I+have+chicken%2C+rice&temperature=0.6"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_server_function_returns_annotated_reply() {
        let output = call_ask_chef(Ok("Chicken bowl".to_string())).await;
        assert!(output.starts_with("Chicken bowl\n\n---\n(Generated in "));
    }

    #[tokio::test]
    async fn test_server_function_returns_error_text() {
        let output = call_ask_chef(Err(AppError::OpenAiError(
            "API error: 401 Unauthorized".to_string(),
        )))
        .await;
        assert_eq!(
            output,
            "Error: OpenAI request failed: API error: 401 Unauthorized"
        );
    }
}
