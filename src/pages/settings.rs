//! Account settings: profile details and password change.
//!
//! "Save changes" submits both forms independently; each validates and
//! reports on its own. The password form is cleared after a successful
//! change.

use dioxus::prelude::*;
use learnhub_core::account::current_user;
use learnhub_core::api::{PasswordChangeRequest, ProfileUpdateRequest};
use learnhub_core::{forms, Action, FormRules, FormState};
use learnhub_ui::{
    Avatar, AvatarSize, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader,
    CardSize, Input, InputSize,
};

use crate::app::Route;
use crate::components::FormBanner;
use crate::context::{begin_submit, spawn_submission, use_form};

#[component]
pub fn Settings() -> Element {
    let navigator = use_navigator();
    let user = use_hook(current_user);
    let (profile, profile_rules) = use_form(forms::profile, move || {
        let user = current_user();
        FormState::with_values([
            ("firstName", user.first_name),
            ("lastName", user.last_name),
            ("phone", user.phone),
            ("location", user.location),
        ])
    });
    let (mut password, password_rules) = use_form(forms::change_password, FormState::new);
    let mut confirm_logout = use_signal(|| false);

    let save = move |_| {
        if let Some(values) = begin_submit(profile, profile_rules, "profile") {
            let request = ProfileUpdateRequest::from_values(&values);
            spawn_submission(profile, Action::UpdateProfile, request, || {
                tracing::info!("Profile updated");
            });
        }
        if let Some(values) = begin_submit(password, password_rules, "change-password") {
            let request = PasswordChangeRequest::from_values(&values);
            spawn_submission(password, Action::ChangePassword, request, move || {
                password.write().reset();
            });
        }
    };

    let field = move |mut form: Signal<FormState>, rules: Signal<FormRules>, name: &'static str| {
        move |value: String| form.write().update(name, value, &rules.read())
    };

    let profile_state = profile.read();
    let password_state = password.read();
    let saving = profile_state.submitting() || password_state.submitting();

    rsx! {
        div { class: "settings-grid",
            div { class: "settings-side",
                Card { size: CardSize::Md, class: "text-center".to_string(),
                    div { class: "flex justify-center mb-4",
                        Avatar { name: user.name(), size: AvatarSize::Xxl }
                    }
                    h2 { class: "text-xl font-bold text-neutral-900 mb-1", "{user.name()}" }
                    p { class: "text-neutral-600", "{user.role}" }
                    p { class: "text-sm text-neutral-500", "{user.email}" }
                }
            }
            div { class: "settings-main space-y-8",
                Card { size: CardSize::Md,
                    CardHeader { title: "Profile".to_string() }
                    CardContent {
                        div { class: "grid grid-cols-2 gap-6",
                            Input {
                                value: profile_state.value("firstName").to_string(),
                                oninput: field(profile, profile_rules, "firstName"),
                                placeholder: "First name".to_string(),
                                left_icon: "\u{1F464}".to_string(),
                                size: InputSize::Lg,
                                error: profile_state.error("firstName").map(str::to_string),
                            }
                            Input {
                                value: profile_state.value("lastName").to_string(),
                                oninput: field(profile, profile_rules, "lastName"),
                                placeholder: "Last name".to_string(),
                                left_icon: "\u{1F464}".to_string(),
                                size: InputSize::Lg,
                                error: profile_state.error("lastName").map(str::to_string),
                            }
                            Input {
                                value: profile_state.value("phone").to_string(),
                                oninput: field(profile, profile_rules, "phone"),
                                input_type: "tel".to_string(),
                                placeholder: "Phone".to_string(),
                                left_icon: "\u{260E}".to_string(),
                                size: InputSize::Lg,
                                error: profile_state.error("phone").map(str::to_string),
                            }
                            Input {
                                value: profile_state.value("location").to_string(),
                                oninput: field(profile, profile_rules, "location"),
                                placeholder: "Location".to_string(),
                                left_icon: "\u{1F4CD}".to_string(),
                                size: InputSize::Lg,
                                error: profile_state.error("location").map(str::to_string),
                            }
                        }
                        FormBanner {
                            status: profile_state.status(),
                            success: "Profile updated successfully!".to_string(),
                            detail: profile_state.failure().map(str::to_string),
                        }
                    }
                }
                Card { size: CardSize::Md,
                    CardHeader { title: "Change Password".to_string() }
                    CardContent {
                        div { class: "grid grid-cols-2 gap-6",
                            Input {
                                value: password_state.value("newPassword").to_string(),
                                oninput: field(password, password_rules, "newPassword"),
                                input_type: "password".to_string(),
                                placeholder: "New password".to_string(),
                                left_icon: "\u{1F512}".to_string(),
                                show_password_toggle: true,
                                size: InputSize::Lg,
                                error: password_state.error("newPassword").map(str::to_string),
                            }
                            Input {
                                value: password_state.value("confirmPassword").to_string(),
                                oninput: field(password, password_rules, "confirmPassword"),
                                input_type: "password".to_string(),
                                placeholder: "Confirm password".to_string(),
                                left_icon: "\u{1F512}".to_string(),
                                show_password_toggle: true,
                                size: InputSize::Lg,
                                error: password_state.error("confirmPassword").map(str::to_string),
                            }
                        }
                        FormBanner {
                            status: password_state.status(),
                            success: "Password changed successfully!".to_string(),
                            detail: password_state.failure().map(str::to_string),
                        }
                    }
                }
                div { class: "flex items-center justify-between",
                    Button {
                        size: ButtonSize::Lg,
                        loading: saving,
                        onclick: save,
                        "Save changes"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Lg,
                        left_icon: "\u{21E5}".to_string(),
                        onclick: move |_| confirm_logout.set(true),
                        "Logout"
                    }
                }
                if confirm_logout() {
                    Card { size: CardSize::Sm, class: "confirm-panel".to_string(),
                        p { class: "text-neutral-700 mb-4", "Are you sure you want to logout?" }
                        div { class: "flex gap-3 justify-end",
                            Button {
                                variant: ButtonVariant::Outline,
                                size: ButtonSize::Sm,
                                onclick: move |_| confirm_logout.set(false),
                                "Cancel"
                            }
                            Button {
                                variant: ButtonVariant::Destructive,
                                size: ButtonSize::Sm,
                                onclick: move |_| {
                                    tracing::info!("Logged out");
                                    navigator.push(Route::Login {});
                                },
                                "Logout"
                            }
                        }
                    }
                }
            }
        }
    }
}
