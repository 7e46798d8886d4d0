use dioxus::prelude::*;

mod auth;
mod format_helpers;
mod routes;
use auth::AuthState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut auth = use_context_provider(AuthState::new);

    // Ask the API whether a cookie session is already active, so a reload
    // does not bounce a signed-in admin back to the login form.
    use_future(move || async move {
        match api_client::api::current_admin().await {
            Ok(admin) => {
                tracing::info!(admin = %admin.full_name(), "Restored admin session");
                auth.sign_in(Some(admin));
            }
            Err(err) => {
                tracing::debug!(error = %err, "No active admin session");
            }
        }
        auth.finish_session_check();
    });

    rsx! {
        document::Title { "ZeeCare Admin" }
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
