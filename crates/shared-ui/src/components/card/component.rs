use dioxus::prelude::*;

/// Bordered panel used for the login form and the dashboard banners.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Heading block of a card. Children render above the title, e.g. a brand
/// line; the description is skipped when empty.
#[component]
pub fn CardHeader(
    title: String,
    #[props(default)] description: String,
    children: Element,
) -> Element {
    rsx! {
        div { class: "card-header",
            {children}
            h3 { class: "card-title", "{title}" }
            if !description.is_empty() {
                p { class: "card-description", "{description}" }
            }
        }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Headline figure inside a stat card, e.g. a count.
#[component]
pub fn CardStat(label: String, value: String) -> Element {
    rsx! {
        div { class: "card-stat",
            p { class: "card-stat-label", "{label}" }
            h3 { class: "card-stat-value", "{value}" }
        }
    }
}
