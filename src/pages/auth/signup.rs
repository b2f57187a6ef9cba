//! Signup page.

use dioxus::prelude::*;
use learnhub_core::api::SignupRequest;
use learnhub_core::{forms, Action, FormState};
use learnhub_ui::{Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardSize, CardVariant, Input};

use crate::app::Route;
use crate::components::FormBanner;
use crate::context::{begin_submit, spawn_submission, use_form};

#[component]
pub fn Signup() -> Element {
    let navigator = use_navigator();
    let (mut form, rules) = use_form(forms::signup, FormState::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Some(values) = begin_submit(form, rules, "signup") {
            let request = SignupRequest::from_values(&values);
            spawn_submission(form, Action::Signup, request, move || {
                navigator.push(Route::VerifyOtp {});
            });
        }
    };

    let set = move |field: &'static str| {
        move |value: String| form.write().update(field, value, &rules.read())
    };

    let state = form.read();
    let accepted = state.value("acceptTerms") == "true";
    let terms_error = state.error("acceptTerms").map(str::to_string);

    rsx! {
        Card { variant: CardVariant::Elevated, size: CardSize::Lg,
            CardHeader { title: "Sign up to get started".to_string() }
            CardContent {
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Lg,
                    full_width: true,
                    left_icon: "G".to_string(),
                    onclick: move |_| tracing::info!("Google signup clicked"),
                    "Sign up using Google"
                }
                div { class: "divider", span { "or" } }
                form { class: "space-y-4", onsubmit: onsubmit,
                    div { class: "grid grid-cols-2 gap-4",
                        Input {
                            value: state.value("firstName").to_string(),
                            oninput: set("firstName"),
                            placeholder: "First name".to_string(),
                            left_icon: "\u{1F464}".to_string(),
                            error: state.error("firstName").map(str::to_string),
                        }
                        Input {
                            value: state.value("lastName").to_string(),
                            oninput: set("lastName"),
                            placeholder: "Last name".to_string(),
                            left_icon: "\u{1F464}".to_string(),
                            error: state.error("lastName").map(str::to_string),
                        }
                    }
                    Input {
                        value: state.value("email").to_string(),
                        oninput: set("email"),
                        input_type: "email".to_string(),
                        placeholder: "Email".to_string(),
                        left_icon: "\u{2709}".to_string(),
                        error: state.error("email").map(str::to_string),
                    }
                    Input {
                        value: state.value("password").to_string(),
                        oninput: set("password"),
                        input_type: "password".to_string(),
                        placeholder: "Password".to_string(),
                        left_icon: "\u{1F512}".to_string(),
                        show_password_toggle: true,
                        helper_text: "At least 8 characters with uppercase, lowercase and a number".to_string(),
                        error: state.error("password").map(str::to_string),
                    }
                    Input {
                        value: state.value("confirmPassword").to_string(),
                        oninput: set("confirmPassword"),
                        input_type: "password".to_string(),
                        placeholder: "Confirm password".to_string(),
                        left_icon: "\u{1F512}".to_string(),
                        show_password_toggle: true,
                        error: state.error("confirmPassword").map(str::to_string),
                    }
                    div { class: "space-y-1",
                        label { class: "flex items-center gap-2 text-sm text-neutral-600",
                            input {
                                r#type: "checkbox",
                                checked: accepted,
                                oninput: move |e| {
                                    let checked = if e.checked() { "true" } else { "false" };
                                    form.write().update("acceptTerms", checked, &rules.read());
                                },
                            }
                            "I accept the terms and conditions"
                        }
                        if let Some(error) = terms_error {
                            p { class: "text-sm text-error-500", role: "alert", "{error}" }
                        }
                    }
                    FormBanner {
                        status: state.status(),
                        success: "Account created.".to_string(),
                        detail: state.failure().map(str::to_string),
                    }
                    Button {
                        button_type: "submit".to_string(),
                        size: ButtonSize::Lg,
                        full_width: true,
                        loading: state.submitting(),
                        "Create account"
                    }
                }
                p { class: "text-center text-neutral-600 mt-6",
                    "Already have an account? "
                    Link { to: Route::Login {}, class: "text-link font-medium", "Login" }
                }
            }
        }
    }
}
