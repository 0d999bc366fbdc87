use chef_app::domain::FormSettings;
use chef_ui::components::ChefPage;
use chef_ui::{FORM_SCRIPT, STYLE, TITLE};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// State of the page after a form submission.
pub struct AskOutcome<'a> {
    pub prompt: &'a str,
    pub temperature: Option<f64>,
    pub output: &'a str,
    pub is_error: bool,
    pub settings: FormSettings,
}

/// Full page with the form re-filled and the output box populated.
pub fn render_ask_page(outcome: &AskOutcome<'_>) -> String {
    let prompt = outcome.prompt.to_string();
    let output = outcome.output.to_string();
    let temperature = outcome.temperature;
    let settings = outcome.settings;
    let is_error = outcome.is_error;

    let (title, main) = Owner::new().with(move || {
        let title = view! { <title>{TITLE}</title> }.to_html();
        let main = view! {
            <main class="container">
                <ChefPage
                    settings=settings
                    prompt=prompt
                    temperature=temperature
                    output=output
                    is_error=is_error
                />
            </main>
        }
        .to_html();
        (title, main)
    });

    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    {title}
    <style>{CSS}</style>
    <script>history.replaceState(null, '', '{replay_url}');</script>
</head>
<body>
    {main}
    <script>{script}</script>
</body>
</html>"#,
        title = title,
        CSS = STYLE,
        replay_url = replay_url(outcome.prompt, outcome.temperature),
        main = main,
        script = FORM_SCRIPT,
    )
}

/// GET form of the submitted request, so a reload asks again.
fn replay_url(prompt: &str, temperature: Option<f64>) -> String {
    let mut url = format!("/ask?prompt={}", urlencoding::encode(prompt));
    if let Some(t) = temperature {
        url.push_str(&format!("&temperature={}", t));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn outcome<'a>(prompt: &'a str, output: &'a str, settings: FormSettings) -> AskOutcome<'a> {
        AskOutcome {
            prompt,
            temperature: Some(0.6),
            output,
            is_error: false,
            settings,
        }
    }

    fn parse(outcome: &AskOutcome<'_>) -> Html {
        Html::parse_document(&render_ask_page(outcome))
    }

    fn text_of(html: &Html, selector: &str) -> String {
        html.select(&Selector::parse(selector).unwrap())
            .next()
            .unwrap()
            .text()
            .collect()
    }

    fn count(html: &Html, selector: &str) -> usize {
        html.select(&Selector::parse(selector).unwrap()).count()
    }

    #[test]
    fn test_leading_newlines_survive_parsing() {
        let html = parse(&outcome(
            "\nI have chicken, rice",
            "\nChicken bowl",
            FormSettings::default(),
        ));

        assert_eq!(text_of(&html, "#prompt"), "\nI have chicken, rice");
        assert_eq!(text_of(&html, "#reply"), "\nChicken bowl");
    }

    #[test]
    fn test_prompt_and_output_round_trip_as_text() {
        let prompt = "</textarea><script>alert(1)</script>";
        let output = "Mix <em>gently</em> & serve";
        let html = parse(&outcome(prompt, output, FormSettings::default()));

        assert_eq!(text_of(&html, "#prompt"), prompt);
        assert_eq!(text_of(&html, "#reply"), output);
        assert_eq!(count(&html, "em"), 0);
    }

    #[test]
    fn test_slider_only_when_adjustable() {
        let html = parse(&outcome("soup", "ok", FormSettings::default()));
        assert_eq!(count(&html, r#"input[name="temperature"][value="0.60"]"#), 1);

        let fixed = FormSettings {
            temperature_adjustable: false,
            default_temperature: 0.6,
        };
        let html = parse(&outcome("soup", "ok", fixed));
        assert_eq!(count(&html, r#"input[name="temperature"]"#), 0);
    }

    #[test]
    fn test_error_output_styled() {
        let mut failed = outcome(
            "soup",
            "Error: OpenAI request failed: timeout",
            FormSettings::default(),
        );
        failed.is_error = true;
        let html = parse(&failed);

        assert_eq!(count(&html, "#reply.reply__output--error"), 1);
        assert_eq!(count(&html, "title"), 1);
    }

    #[test]
    fn test_replay_url_encodes_prompt() {
        assert_eq!(
            replay_url("I have chicken, rice", Some(0.6)),
            "/ask?prompt=I%20have%20chicken%2C%20rice&temperature=0.6"
        );
        assert_eq!(replay_url("it's", None), "/ask?prompt=it%27s");
    }
}
