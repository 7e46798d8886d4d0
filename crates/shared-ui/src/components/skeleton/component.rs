use dioxus::prelude::*;

/// Pulsing placeholder bars shown while data loads.
///
/// Renders `lines` bars; the last one is shortened so a block of them reads
/// like a paragraph.
#[component]
pub fn Skeleton(
    #[props(default = 1)] lines: usize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "skeleton", None, false),
        Attribute::new("aria-busy", "true", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let lines = lines.max(1);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            for i in 0..lines {
                div {
                    key: "{i}",
                    class: if i + 1 == lines && lines > 1 { "skeleton-line short" } else { "skeleton-line" },
                }
            }
        }
    }
}
