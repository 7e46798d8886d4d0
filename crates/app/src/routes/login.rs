use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{AppError, LoginForm, LoginRequest, MessageResponse};
use std::future::Future;
use shared_ui::{
    notify_error, notify_success, use_toast, Button, Card, CardContent, CardHeader, Input,
};

/// Label of the submit button while idle and while a request is in flight.
fn submit_label(loading: bool) -> &'static str {
    if loading {
        "Logging in..."
    } else {
        "Login"
    }
}

/// Check the form locally and, only if it passes, hand the request to `send`.
///
/// A mismatched confirmation returns the validation error without calling
/// `send` at all.
async fn submit_login<F, Fut>(form: LoginForm, send: F) -> Result<MessageResponse, AppError>
where
    F: FnOnce(LoginRequest) -> Fut,
    Fut: Future<Output = Result<MessageResponse, AppError>>,
{
    let request = form.validate()?;
    send(request).await
}

/// Admin login page: email, password and a confirmation field.
///
/// Only rendered behind the guest guard, so a signed-in admin never sees it.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();

        let form = LoginForm {
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
        };
        let result = submit_login(form, |request| async move {
            loading.set(true);
            let result = api_client::api::login(request).await;
            loading.set(false);
            result
        })
        .await;

        match result {
            Ok(resp) => {
                tracing::info!("Admin signed in");
                notify_success(toast, resp.notice_or("Logged in"));
                auth.sign_in(None);
                email.set(String::new());
                password.set(String::new());
                confirm_password.set(String::new());
                navigator().replace(Route::Dashboard {});
            }
            Err(err) => {
                tracing::warn!(error = %err, "Admin login failed");
                notify_error(toast, err.notice());
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    title: "Admin Sign In",
                    description: "Only Admins Are Allowed To Access These Resources!",
                    h1 { class: "auth-brand", "WELCOME TO ZEECARE" }
                }

                CardContent {
                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Input {
                                input_type: "text",
                                name: "email",
                                label: "Email",
                                autocomplete: "username",
                                placeholder: "Email",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                input_type: "password",
                                name: "password",
                                label: "Password",
                                autocomplete: "current-password",
                                placeholder: "Password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                input_type: "password",
                                name: "confirm_password",
                                label: "Confirm Password",
                                autocomplete: "current-password",
                                placeholder: "Confirm Password",
                                value: confirm_password(),
                                on_input: move |e: FormEvent| confirm_password.set(e.value()),
                            }
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            disabled: loading(),
                            "{submit_label(loading())}"
                        }
                    }
                }
            }
        }
    }
}
