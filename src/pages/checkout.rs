//! Checkout page.
//!
//! `?course_id=` preselects a track; the course field is then read-only and
//! the summary shows that track's price. Without it the summary falls back
//! to a generic course at the standard price.

use dioxus::prelude::*;
use learnhub_core::api::CheckoutRequest;
use learnhub_core::catalog::{course_by_id, FALLBACK_PRICE};
use learnhub_core::{forms, Action, FormState};
use learnhub_ui::{Button, ButtonSize, Card, CardContent, CardSize, CardVariant, Input, InputSize, TextArea};

use crate::components::FormBanner;
use crate::context::{begin_submit, spawn_submission, use_form};

const GENDERS: [(&str, &str); 4] = [
    ("male", "Male"),
    ("female", "Female"),
    ("other", "Other"),
    ("prefer-not-to-say", "Prefer not to say"),
];

/// `$ 350.00 USD`
fn summary_price(dollars: u32) -> String {
    format!("$ {dollars}.00 USD")
}

#[component]
pub fn Checkout(course_id: String) -> Element {
    let course = course_by_id(&course_id);
    if course.is_none() && !course_id.is_empty() {
        tracing::warn!("Checkout opened for unknown course '{}'", course_id);
    }
    let (mut form, rules) = use_form(forms::checkout, move || match course {
        Some(course) => FormState::with_values([("course", course.title)]),
        None => FormState::new(),
    });

    let submit = move || {
        if let Some(values) = begin_submit(form, rules, "checkout") {
            let request = CheckoutRequest::from_values(&values);
            spawn_submission(form, Action::Checkout, request, || {
                tracing::info!("Payment completed");
            });
        }
    };

    let set = move |field: &'static str| {
        move |value: String| form.write().update(field, value, &rules.read())
    };

    let state = form.read();
    let price = course.map(|c| c.price).unwrap_or(FALLBACK_PRICE);
    let gender_error = state.error("gender").map(str::to_string);

    rsx! {
        section { class: "bg-primary-600 text-white py-16",
            div { class: "container text-center",
                h1 { class: "text-5xl font-bold", "Checkout" }
            }
        }
        section { class: "py-16 bg-white",
            div { class: "container checkout-grid",
                div { class: "checkout-form max-w-2xl",
                    h2 { class: "text-3xl font-bold text-neutral-900 mb-8", "Complete payment" }
                    form {
                        class: "space-y-6",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            submit();
                        },
                        Input {
                            value: state.value("fullName").to_string(),
                            oninput: set("fullName"),
                            placeholder: "John Doe".to_string(),
                            left_icon: "\u{1F464}".to_string(),
                            size: InputSize::Lg,
                            error: state.error("fullName").map(str::to_string),
                        }
                        Input {
                            value: state.value("email").to_string(),
                            oninput: set("email"),
                            input_type: "email".to_string(),
                            placeholder: "johndoe@gmail.com".to_string(),
                            left_icon: "\u{2709}".to_string(),
                            size: InputSize::Lg,
                            error: state.error("email").map(str::to_string),
                        }
                        Input {
                            value: state.value("course").to_string(),
                            oninput: set("course"),
                            placeholder: "Course".to_string(),
                            left_icon: "\u{1F4D6}".to_string(),
                            size: InputSize::Lg,
                            disabled: course.is_some(),
                            error: state.error("course").map(str::to_string),
                        }
                        div { class: "space-y-2",
                            select {
                                class: if gender_error.is_some() { "select select-error" } else { "select" },
                                value: state.value("gender"),
                                onchange: move |e| form.write().update("gender", e.value(), &rules.read()),
                                option { value: "", "Gender" }
                                for (value, label) in GENDERS {
                                    option { value: "{value}", "{label}" }
                                }
                            }
                            if let Some(error) = &gender_error {
                                p { class: "text-sm text-error-500", role: "alert", "{error}" }
                            }
                        }
                        Input {
                            value: state.value("phone").to_string(),
                            oninput: set("phone"),
                            input_type: "tel".to_string(),
                            placeholder: "Phone".to_string(),
                            left_icon: "\u{260E}".to_string(),
                            size: InputSize::Lg,
                            error: state.error("phone").map(str::to_string),
                        }
                        Input {
                            value: state.value("location").to_string(),
                            oninput: set("location"),
                            placeholder: "Location".to_string(),
                            left_icon: "\u{1F4CD}".to_string(),
                            size: InputSize::Lg,
                            error: state.error("location").map(str::to_string),
                        }
                        TextArea {
                            value: state.value("description").to_string(),
                            oninput: set("description"),
                            placeholder: "Description".to_string(),
                        }
                    }
                }
                div { class: "checkout-summary",
                    Card { variant: CardVariant::Elevated, size: CardSize::Lg, class: "sticky top-24 text-center".to_string(),
                        CardContent {
                            div {
                                div { class: "text-3xl font-bold text-neutral-900 mb-2", "{summary_price(price)}" }
                                div { class: "text-sm text-neutral-500", "Select amount" }
                            }
                            select { class: "select",
                                option { value: "full", "100 - Full Amount" }
                                option { value: "partial", "50 - Partial Payment" }
                            }
                            FormBanner {
                                status: state.status(),
                                success: "Payment completed successfully!".to_string(),
                                detail: state.failure().map(str::to_string),
                            }
                            Button {
                                size: ButtonSize::Lg,
                                full_width: true,
                                loading: state.submitting(),
                                onclick: move |_| submit(),
                                "Complete my purchase"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_price_format() {
        assert_eq!(summary_price(350), "$ 350.00 USD");
        assert_eq!(summary_price(FALLBACK_PRICE), "$ 350.00 USD");
    }
}
