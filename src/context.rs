//! Shared context for LearnHub pages.
//!
//! Pages own their form state; the only process-wide values are the
//! simulation settings and the launch route chosen on the command line.
//!
//! ## Usage
//!
//! ```ignore
//! let (form, rules) = use_form(forms::login, FormState::new);
//!
//! let onsubmit = move |evt: FormEvent| {
//!     evt.prevent_default();
//!     if let Some(values) = begin_submit(form, rules, "login") {
//!         let request = LoginRequest::from_values(&values);
//!         spawn_submission(form, Action::Login, request, move || {
//!             navigator.push(Route::Dashboard {});
//!         });
//!     }
//! };
//! ```

use dioxus::prelude::*;
use learnhub_core::{simulate, Action, FormRules, FormState, FormValues, SimulationConfig};
use serde::Serialize;

/// Get the simulation settings set from command line args.
pub fn simulation_config() -> SimulationConfig {
    crate::simulation_config()
}

/// Navigate to the `--start` route once, on first render.
pub fn use_start_route() {
    let navigator = use_navigator();
    use_hook(move || {
        if let Some(route) = crate::take_start_route() {
            tracing::info!("Opening start route {}", route);
            navigator.replace(route);
        }
    });
}

/// Signals holding a page form and its rules.
///
/// Rules are built once per mount and read by every handler.
pub fn use_form(
    rules: fn() -> FormRules,
    init: impl FnOnce() -> FormState,
) -> (Signal<FormState>, Signal<FormRules>) {
    let form = use_signal(init);
    let rules = use_signal(rules);
    (form, rules)
}

/// Validate the form and enter the loading state.
///
/// Returns the values to submit, or `None` when validation failed or a
/// submission is already running.
pub fn begin_submit(
    mut form: Signal<FormState>,
    rules: Signal<FormRules>,
    name: &str,
) -> Option<FormValues> {
    let started = form.write().begin_submit(&rules.read());
    match started {
        Ok(values) => Some(values),
        Err(blocked) => {
            tracing::debug!(form = name, ?blocked, "submit blocked");
            None
        }
    }
}

/// Run a simulated request for a form that passed [`begin_submit`].
///
/// `on_success` runs after the form has left the loading state.
pub fn spawn_submission<P>(
    mut form: Signal<FormState>,
    action: Action,
    payload: P,
    on_success: impl FnOnce() + 'static,
) where
    P: Serialize + 'static,
{
    spawn(async move {
        let outcome = simulate(&simulation_config(), action, &payload).await;
        if let Err(e) = &outcome {
            tracing::error!("{} failed: {}", action.name(), e);
        }
        form.write().finish(outcome.as_ref().map(|_| ()));
        if outcome.is_ok() {
            on_success();
        }
    });
}

/// Generic banner text for a failed submission.
pub const TRY_AGAIN: &str = "Something went wrong. Please try again.";
