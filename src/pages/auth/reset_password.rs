//! Password reset request page.
//!
//! After a successful request the form is replaced by a confirmation view
//! naming the address the instructions went to.

use dioxus::prelude::*;
use learnhub_core::api::PasswordResetRequest;
use learnhub_core::{forms, Action, FormState};
use learnhub_ui::{Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardSize, CardVariant, Input};

use crate::app::Route;
use crate::components::FormBanner;
use crate::context::{begin_submit, spawn_submission, use_form};

#[component]
pub fn ResetPassword() -> Element {
    let (mut form, rules) = use_form(forms::reset_password, FormState::new);
    let mut sent_to: Signal<Option<String>> = use_signal(|| None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Some(values) = begin_submit(form, rules, "reset-password") {
            let request = PasswordResetRequest::from_values(&values);
            let email = request.email.clone();
            spawn_submission(form, Action::ResetPassword, request, move || {
                sent_to.set(Some(email));
            });
        }
    };

    if let Some(email) = sent_to() {
        return rsx! {
            ResetSent {
                email,
                on_retry: move |_| {
                    form.write().reset();
                    sent_to.set(None);
                },
            }
        };
    }

    let state = form.read();

    rsx! {
        div { class: "mb-8",
            Link { to: Route::Login {}, class: "text-link text-sm", "\u{2190} Back to Login" }
        }
        Card { variant: CardVariant::Elevated, size: CardSize::Lg,
            CardHeader {
                title: "Reset your password".to_string(),
                description: "Enter your email and we'll send you instructions to reset your password".to_string(),
            }
            CardContent {
                form { class: "space-y-6", onsubmit: onsubmit,
                    Input {
                        value: state.value("email").to_string(),
                        oninput: move |s: String| form.write().update("email", s, &rules.read()),
                        input_type: "email".to_string(),
                        label: "Email address".to_string(),
                        placeholder: "Enter your email".to_string(),
                        left_icon: "\u{2709}".to_string(),
                        error: state.error("email").map(str::to_string),
                    }
                    FormBanner {
                        status: state.status(),
                        success: "Instructions sent.".to_string(),
                        detail: state.failure().map(str::to_string),
                    }
                    Button {
                        button_type: "submit".to_string(),
                        size: ButtonSize::Lg,
                        full_width: true,
                        loading: state.submitting(),
                        "Send reset instructions"
                    }
                }
                p { class: "text-center text-sm text-neutral-600 mt-6",
                    "Remember your password? "
                    Link { to: Route::Login {}, class: "text-link font-medium", "Sign in" }
                }
            }
        }
    }
}

#[component]
fn ResetSent(email: String, on_retry: EventHandler<()>) -> Element {
    let navigator = use_navigator();

    rsx! {
        Card { variant: CardVariant::Elevated, size: CardSize::Lg,
            CardContent {
                div { class: "text-center",
                    div { class: "icon-disc bg-success-100 text-success-600 mx-auto mb-6", "\u{2713}" }
                    h1 { class: "text-2xl font-bold text-neutral-900 mb-2", "Check your email" }
                    p { class: "text-neutral-600 mb-4", "We've sent password reset instructions to" }
                    p { class: "text-primary-600 font-semibold mb-6", "{email}" }
                }
                div { class: "p-4 bg-neutral-50 rounded-lg",
                    h3 { class: "text-sm font-medium text-neutral-700 mb-2", "Next steps:" }
                    ol { class: "text-sm text-neutral-600 space-y-1",
                        li { "1. Check your email inbox" }
                        li { "2. Click the reset password link" }
                        li { "3. Create a new password" }
                        li { "4. Sign in with your new password" }
                    }
                }
                div { class: "space-y-3",
                    Button {
                        size: ButtonSize::Lg,
                        full_width: true,
                        onclick: move |_| {
                            navigator.push(Route::Login {});
                        },
                        "Back to Sign In"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Lg,
                        full_width: true,
                        onclick: move |_| on_retry.call(()),
                        "Try a different email"
                    }
                }
                div { class: "mt-8 p-4 bg-warning-50 rounded-lg border border-warning-200",
                    h3 { class: "text-sm font-medium text-warning-800 mb-1", "Didn't receive the email?" }
                    p { class: "text-xs text-warning-700",
                        "Check your spam folder or try again in a few minutes."
                    }
                }
            }
        }
    }
}
