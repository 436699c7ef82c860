use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use maud::{DOCTYPE, Markup, html};

// Uniwersalny typ odpowiedzi: pełna strona albo fragment dla HTMX
pub enum AppResponse {
    Full(Html<String>),
    Partial(Markup),
}

impl IntoResponse for AppResponse {
    fn into_response(self) -> Response {
        match self {
            AppResponse::Full(html) => html.into_response(),
            AppResponse::Partial(markup) => markup.into_response(),
        }
    }
}

/// Szkielet strony, w który wstawiamy treść przy pełnym przeładowaniu (F5).
fn render_layout(content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pl" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Wydarzenia samorządu studenckiego" }
                link rel="stylesheet" href="/static/css/style.css";
                script src="https://unpkg.com/htmx.org@2.0.4" {}
            }
            body ."bg-gray-50 text-gray-900" {
                header ."max-w-6xl mx-auto px-4 py-6" {
                    a href="/" "hx-get"="/htmx/events" "hx-target"="#content" "hx-push-url"="/"
                        class="text-2xl font-bold text-indigo-700" {
                        "Wydarzenia"
                    }
                }
                main #content ."max-w-6xl mx-auto px-4 pb-12" {
                    (content)
                }
            }
        }
    }
}

pub fn build_response(headers: &HeaderMap, page_content: Markup) -> AppResponse {
    if headers.contains_key("HX-Request") {
        // Dla żądań HTMX zwracamy tylko fragment HTML
        AppResponse::Partial(page_content)
    } else {
        AppResponse::Full(Html(render_layout(page_content).into_string()))
    }
}
