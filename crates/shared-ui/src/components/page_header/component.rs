use dioxus::prelude::*;

/// Section heading with an optional item count, e.g. "Appointments (12)".
#[component]
pub fn PageHeader(
    title: String,
    /// `None` while the list is still loading.
    #[props(!optional)]
    count: Option<usize>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            h5 { class: "page-title",
                "{title}"
                if let Some(count) = count {
                    span { class: "page-count", " ({count})" }
                }
            }
        }
    }
}
