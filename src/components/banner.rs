//! Submission result banners.

use dioxus::prelude::*;
use learnhub_core::LoadingState;

use crate::context::TRY_AGAIN;

/// Text of the failure banner: the generic retry line, plus the recorded
/// failure when there is one.
fn failure_text(detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!("{TRY_AGAIN} ({detail})"),
        _ => TRY_AGAIN.to_string(),
    }
}

/// Success or failure line for a form, shown after a submission finishes.
///
/// `detail` is the form's recorded failure, see `FormState::failure`.
#[component]
pub fn FormBanner(
    status: LoadingState,
    success: String,
    #[props(default)] detail: Option<String>,
) -> Element {
    match status {
        LoadingState::Success => rsx! {
            div { class: "banner banner-success rounded-md p-4 text-sm", role: "status", "{success}" }
        },
        LoadingState::Error => {
            let text = failure_text(detail.as_deref());
            rsx! {
                div { class: "banner banner-error rounded-md p-4 text-sm", role: "alert", "{text}" }
            }
        }
        LoadingState::Idle | LoadingState::Loading => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_text_includes_recorded_failure() {
        assert_eq!(failure_text(None), TRY_AGAIN);
        assert_eq!(failure_text(Some("")), TRY_AGAIN);
        assert_eq!(
            failure_text(Some("login failed: timeout")),
            format!("{TRY_AGAIN} (login failed: timeout)")
        );
    }
}
