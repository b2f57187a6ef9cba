//! Login page.

use dioxus::prelude::*;
use learnhub_core::api::LoginRequest;
use learnhub_core::{forms, Action, FormState};
use learnhub_ui::{Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardSize, CardVariant, Input};

use crate::app::Route;
use crate::components::FormBanner;
use crate::context::{begin_submit, spawn_submission, use_form};

#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();
    let (mut form, rules) = use_form(forms::login, FormState::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Some(values) = begin_submit(form, rules, "login") {
            let request = LoginRequest::from_values(&values);
            spawn_submission(form, Action::Login, request, move || {
                navigator.push(Route::Dashboard {});
            });
        }
    };

    let state = form.read();
    let remember = state.value("rememberMe") == "true";

    rsx! {
        Card { variant: CardVariant::Elevated, size: CardSize::Lg,
            CardHeader {
                title: "Log in to continue your learning journey".to_string(),
            }
            CardContent {
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Lg,
                    full_width: true,
                    left_icon: "G".to_string(),
                    onclick: move |_| tracing::info!("Google login clicked"),
                    "Log in using Google"
                }
                div { class: "divider", span { "or" } }
                form { class: "space-y-6", onsubmit: onsubmit,
                    Input {
                        value: state.value("email").to_string(),
                        oninput: move |s: String| form.write().update("email", s, &rules.read()),
                        input_type: "email".to_string(),
                        placeholder: "Email".to_string(),
                        left_icon: "\u{2709}".to_string(),
                        error: state.error("email").map(str::to_string),
                    }
                    Input {
                        value: state.value("password").to_string(),
                        oninput: move |s: String| form.write().update("password", s, &rules.read()),
                        input_type: "password".to_string(),
                        placeholder: "Password".to_string(),
                        left_icon: "\u{1F512}".to_string(),
                        show_password_toggle: true,
                        error: state.error("password").map(str::to_string),
                    }
                    div { class: "flex items-center justify-between",
                        label { class: "flex items-center gap-2 text-sm text-neutral-600",
                            input {
                                r#type: "checkbox",
                                checked: remember,
                                oninput: move |e| {
                                    let checked = if e.checked() { "true" } else { "false" };
                                    form.write().update("rememberMe", checked, &rules.read());
                                },
                            }
                            "Remember me"
                        }
                        Link {
                            to: Route::ResetPassword {},
                            class: "text-link text-sm font-medium",
                            "Forgot password ?"
                        }
                    }
                    FormBanner {
                        status: state.status(),
                        success: "Logged in.".to_string(),
                        detail: state.failure().map(str::to_string),
                    }
                    Button {
                        button_type: "submit".to_string(),
                        size: ButtonSize::Lg,
                        full_width: true,
                        loading: state.submitting(),
                        "Login"
                    }
                }
                p { class: "text-center text-neutral-600 mt-6",
                    "Need to create an account? "
                    Link { to: Route::Signup {}, class: "text-link font-medium", "signup" }
                }
            }
        }
    }
}
