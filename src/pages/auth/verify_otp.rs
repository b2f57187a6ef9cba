//! Email verification with a six-digit code.

use std::time::Duration;

use dioxus::prelude::*;
use learnhub_core::api::{OtpVerifyRequest, PasswordResetRequest};
use learnhub_core::otp::{self, ResendCountdown};
use learnhub_core::{forms, simulate, Action, FormState};
use learnhub_ui::{Button, ButtonSize, ButtonVariant, Card, CardContent, CardSize, CardVariant, Input, InputSize};

use crate::app::Route;
use crate::components::FormBanner;
use crate::context::{begin_submit, simulation_config, spawn_submission, use_form};

/// Address the code was sent to. Signup does not hand it over yet.
const PENDING_EMAIL: &str = "user@example.com";

#[component]
pub fn VerifyOtp() -> Element {
    let navigator = use_navigator();
    let (mut form, rules) = use_form(forms::verify_otp, FormState::new);
    let mut countdown = use_signal(ResendCountdown::new);
    let mut resending = use_signal(|| false);

    // One tick per second until resend unlocks
    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            if !countdown.peek().can_resend() {
                countdown.write().tick();
            }
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Some(values) = begin_submit(form, rules, "verify-otp") {
            let request = OtpVerifyRequest::from_values(&values);
            spawn_submission(form, Action::VerifyOtp, request, move || {
                navigator.push(Route::Dashboard {});
            });
        }
    };

    let resend = move |_| {
        if resending() || !countdown.peek().can_resend() {
            return;
        }
        resending.set(true);
        spawn(async move {
            let request = PasswordResetRequest {
                email: PENDING_EMAIL.to_string(),
            };
            match simulate(&simulation_config(), Action::ResendOtp, &request).await {
                Ok(()) => {
                    tracing::info!("Verification code resent to {}", PENDING_EMAIL);
                    countdown.write().restart();
                }
                Err(e) => tracing::error!("resend-otp failed: {}", e),
            }
            resending.set(false);
        });
    };

    let state = form.read();
    let code = state.value("otp").to_string();
    let verify_disabled = otp::submit_disabled(&code, state.submitting());
    let timer = countdown.read();

    rsx! {
        div { class: "mb-8",
            Link { to: Route::Signup {}, class: "text-link text-sm", "\u{2190} Back to Signup" }
        }
        Card { variant: CardVariant::Elevated, size: CardSize::Lg,
            CardContent {
                div { class: "text-center mb-8",
                    div { class: "icon-disc bg-primary-100 text-primary-600 mx-auto mb-6", "\u{2709}" }
                    h1 { class: "text-2xl font-bold text-neutral-900 mb-2", "Verify your email" }
                    p { class: "text-neutral-600 mb-4", "We've sent a 6-digit verification code to" }
                    p { class: "text-primary-600 font-semibold", "{PENDING_EMAIL}" }
                }
                form { class: "space-y-6", onsubmit: onsubmit,
                    Input {
                        value: code.clone(),
                        oninput: move |edited: String| {
                            let next = {
                                let current = form.read();
                                otp::accept_input(current.value("otp"), &edited)
                            };
                            form.write().update("otp", next, &rules.read());
                        },
                        label: "Enter verification code".to_string(),
                        placeholder: "000000".to_string(),
                        size: InputSize::Lg,
                        class: "otp-input text-center font-mono".to_string(),
                        error: state.error("otp").map(str::to_string),
                    }
                    FormBanner {
                        status: state.status(),
                        success: "Email verified.".to_string(),
                        detail: state.failure().map(str::to_string),
                    }
                    Button {
                        button_type: "submit".to_string(),
                        size: ButtonSize::Lg,
                        full_width: true,
                        loading: state.submitting(),
                        disabled: verify_disabled,
                        "Verify Email"
                    }
                }
                div { class: "mt-8 text-center space-y-4",
                    p { class: "text-neutral-600 text-sm", "Didn't receive the code?" }
                    if timer.can_resend() {
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Sm,
                            loading: resending(),
                            left_icon: "\u{21BB}".to_string(),
                            onclick: resend,
                            "Resend Code"
                        }
                    } else {
                        p { class: "text-sm text-neutral-500", "Resend code in {timer.label()}" }
                    }
                }
                div { class: "mt-8 p-4 bg-neutral-50 rounded-lg",
                    h3 { class: "text-sm font-medium text-neutral-700 mb-2", "Having trouble?" }
                    ul { class: "text-xs text-neutral-600 space-y-1",
                        li { "\u{2022} Check your spam/junk folder" }
                        li { "\u{2022} Make sure you entered the correct email" }
                        li { "\u{2022} The code expires in 10 minutes" }
                        li { "\u{2022} Contact support if you continue having issues" }
                    }
                }
            }
        }
        div { class: "mt-8 text-center",
            Link { to: Route::Login {}, class: "text-link text-sm font-medium", "Already verified? Sign in" }
        }
    }
}
