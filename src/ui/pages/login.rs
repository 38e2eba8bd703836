use dioxus::prelude::*;
use validator::Validate;

use crate::app::{Route, PRIMARY_BUTTON_STYLE};
use crate::ui::state::app_state::{AppState, Services};
use crate::usecase::services::session_service::{LoginError, LoginForm};

#[component]
pub fn Login() -> Element {
    let services = use_context::<Services>();
    let mut state = use_context::<AppState>();
    let nav = navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut name_error = use_signal(|| None::<String>);
    let mut email_error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let input_style = "width: 100%; box-sizing: border-box; padding: 8px 10px; border: 1px solid #99f6e4; border-radius: 6px;";

    rsx! {
        div { style: "display: flex; align-items: center; justify-content: center; min-height: 100vh;",
            form {
                style: "width: 360px; background: #fff; border-radius: 12px; padding: 24px; box-shadow: 0 10px 24px rgba(0,0,0,0.08);",
                onsubmit: move |event| {
                    event.prevent_default();
                    if busy() {
                        return;
                    }

                    let form = LoginForm::new(&name(), &email());
                    if let Err(errors) = form.validate() {
                        name_error.set(LoginForm::field_error(&errors, "name"));
                        email_error.set(LoginForm::field_error(&errors, "email"));
                        return;
                    }
                    name_error.set(None);
                    email_error.set(None);
                    busy.set(true);

                    let session = services.session.clone();
                    spawn(async move {
                        match session.login(&form).await {
                            Ok(()) => {
                                state.end_session();
                                state.info("Login successful!", "Welcome to Pawfect Match Dog Adoption");
                                nav.push(Route::Dogs {});
                            }
                            Err(LoginError::Validation(errors)) => {
                                name_error.set(LoginForm::field_error(&errors, "name"));
                                email_error.set(LoginForm::field_error(&errors, "email"));
                            }
                            Err(LoginError::Api(_)) => {
                                state.error("Login failed", "Please check your credentials and try again.");
                            }
                        }
                        busy.set(false);
                    });
                },
                h1 { style: "margin: 0 0 4px; color: #115e59;", "🐾 Pawfect Match" }
                p { style: "margin: 0 0 20px; color: #6b7280;", "Sign in to find your new best friend" }

                label { "Name" }
                input {
                    style: input_style,
                    placeholder: "Enter your name",
                    value: name(),
                    oninput: move |event| name.set(event.value()),
                }
                if let Some(message) = name_error() {
                    p { style: "color: #dc2626; margin: 4px 0;", "{message}" }
                }

                div { style: "height: 12px;" }
                label { "Email" }
                input {
                    style: input_style,
                    r#type: "email",
                    placeholder: "Enter your email",
                    value: email(),
                    oninput: move |event| email.set(event.value()),
                }
                if let Some(message) = email_error() {
                    p { style: "color: #dc2626; margin: 4px 0;", "{message}" }
                }

                button {
                    style: "{PRIMARY_BUTTON_STYLE} width: 100%; margin-top: 20px;",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
