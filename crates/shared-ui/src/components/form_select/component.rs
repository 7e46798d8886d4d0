use dioxus::prelude::*;

/// A themed native `<select>`.
///
/// Children should be `option { value: "...", "Label" }` elements. The
/// extra `class` is appended to the select itself so callers can colour it
/// by its current value.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    /// Called when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)]
    label: String,
    #[props(default)]
    class: String,
    #[props(default = false)]
    disabled: bool,
    children: Element,
) -> Element {
    let select_class = if class.is_empty() {
        "form-select".to_string()
    } else {
        format!("form-select {class}")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "{select_class}",
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
