use dioxus::prelude::*;

use crate::routes::Route;

/// Path the visitor asked for, rebuilt from the catch-all segments.
fn requested_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

/// Catch-all for unknown paths. The link goes through the auth guard, so a
/// signed-out visitor ends up on the login form.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = requested_path(&route);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Nothing here" }
                p { class: "not-found-message",
                    "ZeeCare Admin has no page at "
                    code { "{path}" }
                    "."
                }
                Link { to: Route::Dashboard {},
                    class: "not-found-link",
                    "Go to appointments"
                }
            }
        }
    }
}
