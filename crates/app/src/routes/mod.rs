pub mod dashboard;
pub mod login;
pub mod not_found;

use crate::auth::{guest_access, member_access, use_auth, Access};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogOut;
use dioxus_free_icons::Icon;
use shared_ui::{notify_error, notify_success, use_toast, Badge, Button, ButtonVariant, Navbar};

use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(GuestGuard)]
    #[route("/login")]
    Login {},
    #[end_layout]
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Placeholder shown while a guard waits or redirects.
#[component]
fn GuardPlaceholder(message: String) -> Element {
    rsx! {
        div { class: "auth-guard-loading",
            p { "{message}" }
        }
    }
}

/// Auth guard layout. Redirects to /login if not authenticated.
///
/// Runs on every render, before the child route is built, so the dashboard
/// never mounts (and never fetches) for a signed-out visitor.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();

    match member_access(auth.is_checking(), auth.is_authenticated()) {
        Access::Granted => rsx! { Outlet::<Route> {} },
        Access::Pending => rsx! { GuardPlaceholder { message: "Loading..." } },
        Access::Denied => {
            navigator().replace(Route::Login {});
            rsx! { GuardPlaceholder { message: "Redirecting to login..." } }
        }
    }
}

/// Guest guard layout. An admin who is already signed in goes straight to
/// the dashboard without seeing the login form.
#[component]
fn GuestGuard() -> Element {
    let auth = use_auth();

    match guest_access(auth.is_checking(), auth.is_authenticated()) {
        Access::Granted => rsx! { Outlet::<Route> {} },
        Access::Pending => rsx! { GuardPlaceholder { message: "Loading..." } },
        Access::Denied => {
            navigator().replace(Route::Dashboard {});
            rsx! { GuardPlaceholder { message: "Redirecting..." } }
        }
    }
}

/// Signed-in shell: top bar with the admin's name and a logout button.
#[component]
fn AppLayout() -> Element {
    let mut auth = use_auth();
    let toast = use_toast();
    let mut logging_out = use_signal(|| false);

    // A fresh login only flips the flag; fetch the profile for the greeting.
    use_future(move || async move {
        if auth.session.peek().admin.is_some() {
            return;
        }
        match api_client::api::current_admin().await {
            Ok(admin) => auth.set_admin(admin),
            Err(err) => tracing::warn!(error = %err, "Failed to load admin profile"),
        }
    });

    let handle_logout = move |_: MouseEvent| {
        logging_out.set(true);
        spawn(async move {
            match api_client::api::logout().await {
                Ok(resp) => {
                    notify_success(toast, resp.notice_or("Logged out"));
                    auth.clear_auth();
                    navigator().replace(Route::Login {});
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Logout failed");
                    notify_error(toast, err.notice());
                }
            }
            logging_out.set(false);
        });
    };

    let admin_name = auth.admin_name().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            Navbar { brand: "ZeeCare",
                if !admin_name.is_empty() {
                    span { class: "navbar-admin", "{admin_name}" }
                }
                Badge { "Admin" }
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: logging_out(),
                    onclick: handle_logout,
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "Logout"
                }
            }

            main { class: "page-content",
                Outlet::<Route> {}
            }
        }
    }
}
