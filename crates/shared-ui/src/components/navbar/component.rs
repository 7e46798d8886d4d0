use dioxus::prelude::*;

/// Top application bar: brand on the left, arbitrary content on the right.
#[component]
pub fn Navbar(brand: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "navbar",
            span { class: "navbar-brand", "{brand}" }
            div { class: "navbar-spacer" }
            div { class: "navbar-items", {children} }
        }
    }
}
