use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

/// Hosts the notice stack. Views call `use_toast()` beneath it.
#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}

/// Show a success notice with the standard options.
pub fn notify_success(toasts: Toasts, message: impl Into<String>) {
    toasts.success(message.into(), ToastOptions::new());
}

/// Show an error notice with the standard options.
pub fn notify_error(toasts: Toasts, message: impl Into<String>) {
    toasts.error(message.into(), ToastOptions::new());
}
