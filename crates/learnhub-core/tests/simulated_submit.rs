//! Simulated submission timing.
//!
//! Runs on tokio's paused clock so the 1.5-3 second delays are exact and
//! instant.

use std::time::Duration;

use learnhub_core::api::{CheckoutRequest, LoginRequest, PasswordResetRequest};
use learnhub_core::form::{FormState, LoadingState};
use learnhub_core::validation::forms;
use learnhub_core::{simulate, Action, SimulationConfig};
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_login_completes_after_two_seconds() {
    let config = SimulationConfig::default();
    let rules = forms::login();
    let mut form = FormState::with_values([("email", "a@b.com"), ("password", "abcdef")]);

    let snapshot = form.begin_submit(&rules).unwrap();
    assert_eq!(form.status(), LoadingState::Loading);

    let start = Instant::now();
    let outcome = simulate(&config, Action::Login, &LoginRequest::from_values(&snapshot)).await;
    assert_eq!(start.elapsed(), Duration::from_secs(2));

    form.finish(outcome.as_ref().map(|_| ()));
    assert_eq!(form.status(), LoadingState::Success);
    assert!(!form.submitting());
}

#[tokio::test(start_paused = true)]
async fn test_checkout_takes_three_seconds() {
    let config = SimulationConfig::default();
    let start = Instant::now();
    let request = CheckoutRequest::from_values(&Default::default());
    simulate(&config, Action::Checkout, &request).await.unwrap();
    assert_eq!(start.elapsed(), Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn test_zero_scale_is_immediate() {
    let config = SimulationConfig::new(0.0).unwrap();
    let start = Instant::now();
    let request = PasswordResetRequest {
        email: "a@b.com".into(),
    };
    simulate(&config, Action::ResetPassword, &request).await.unwrap();
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_reset_password_captures_email_for_success_view() {
    let config = SimulationConfig::default();
    let rules = forms::reset_password();
    let mut form = FormState::with_values([("email", "learner@example.com")]);

    let snapshot = form.begin_submit(&rules).unwrap();
    let request = PasswordResetRequest::from_values(&snapshot);
    let outcome = simulate(&config, Action::ResetPassword, &request).await;
    form.finish(outcome.as_ref().map(|_| ()));

    assert_eq!(form.status(), LoadingState::Success);
    assert_eq!(request.email, "learner@example.com");
}

#[tokio::test(start_paused = true)]
async fn test_pending_submission_is_not_done_early() {
    let config = SimulationConfig::default();
    let request = PasswordResetRequest {
        email: "a@b.com".into(),
    };
    let call = simulate(&config, Action::ResendOtp, &request);
    tokio::pin!(call);

    tokio::select! {
        _ = &mut call => panic!("resend finished before its delay"),
        _ = tokio::time::sleep(Duration::from_millis(1499)) => {}
    }
    call.await.unwrap();
}
