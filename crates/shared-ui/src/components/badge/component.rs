use dioxus::prelude::*;

/// Small pill, e.g. the signed-in role in the top bar.
///
/// Solid by default; `outlined` swaps to a bordered style for use on
/// coloured backgrounds.
#[component]
pub fn Badge(
    #[props(default = false)] outlined: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let style = if outlined { "outline" } else { "solid" };
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", style, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}
