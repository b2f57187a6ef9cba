//! Simulated network calls.
//!
//! Every submission in the application is a fixed delay followed by a log
//! line carrying the request payload. The call always succeeds; the error
//! type exists so pages handle a failure path a real backend would add.
//! There is no retry, timeout or cancellation.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::error::{LearnError, LearnResult};

/// The simulated endpoints and their latencies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Login,
    Signup,
    VerifyOtp,
    ResendOtp,
    ResetPassword,
    Checkout,
    UpdateProfile,
    ChangePassword,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Login => "login",
            Action::Signup => "signup",
            Action::VerifyOtp => "verify-otp",
            Action::ResendOtp => "resend-otp",
            Action::ResetPassword => "reset-password",
            Action::Checkout => "checkout",
            Action::UpdateProfile => "update-profile",
            Action::ChangePassword => "change-password",
        }
    }

    /// Unscaled latency of the simulated call.
    pub fn base_delay(&self) -> Duration {
        match self {
            Action::ResendOtp => Duration::from_millis(1500),
            Action::Checkout => Duration::from_millis(3000),
            _ => Duration::from_millis(2000),
        }
    }
}

/// Largest accepted delay scale.
pub const MAX_DELAY_SCALE: f64 = 100.0;

/// Tunables for simulated calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    delay_scale: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { delay_scale: 1.0 }
    }
}

impl SimulationConfig {
    /// `delay_scale` multiplies every delay; 0 makes calls instant.
    pub fn new(delay_scale: f64) -> LearnResult<Self> {
        if !(0.0..=MAX_DELAY_SCALE).contains(&delay_scale) {
            return Err(LearnError::InvalidConfig(format!(
                "delay scale must be between 0 and {MAX_DELAY_SCALE} (got {delay_scale})"
            )));
        }
        Ok(Self { delay_scale })
    }

    pub fn delay_scale(&self) -> f64 {
        self.delay_scale
    }

    pub fn delay_for(&self, action: Action) -> Duration {
        action.base_delay().mul_f64(self.delay_scale)
    }
}

/// Replace password values before a payload is logged.
fn redact(mut payload: Value) -> Value {
    if let Value::Object(map) = &mut payload {
        for (key, value) in map.iter_mut() {
            if key.to_ascii_lowercase().contains("password") {
                *value = Value::String("***".into());
            }
        }
    }
    payload
}

/// Run a simulated call: wait the action's delay, then log the payload.
pub async fn simulate<P: Serialize>(
    config: &SimulationConfig,
    action: Action,
    payload: &P,
) -> LearnResult<()> {
    let body = redact(serde_json::to_value(payload)?);
    let delay = config.delay_for(action);
    tracing::debug!(action = action.name(), ?delay, "simulated request started");

    tokio::time::sleep(delay).await;

    tracing::info!(action = action.name(), payload = %body, "simulated request completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn delays_per_action() {
        assert_eq!(Action::Checkout.base_delay(), Duration::from_secs(3));
        assert_eq!(Action::ResendOtp.base_delay(), Duration::from_millis(1500));
        assert_eq!(Action::Login.base_delay(), Duration::from_secs(2));
    }

    #[test]
    fn scale_is_applied_and_validated() {
        let half = SimulationConfig::new(0.5).unwrap();
        assert_eq!(half.delay_for(Action::Login), Duration::from_secs(1));
        assert_eq!(
            SimulationConfig::new(0.0).unwrap().delay_for(Action::Checkout),
            Duration::ZERO
        );
        assert!(SimulationConfig::new(-1.0).is_err());
        assert!(SimulationConfig::new(f64::NAN).is_err());
        assert!(SimulationConfig::new(f64::INFINITY).is_err());
        assert!(SimulationConfig::new(MAX_DELAY_SCALE).is_ok());
        assert!(SimulationConfig::new(MAX_DELAY_SCALE + 1.0).is_err());
    }

    #[test]
    fn passwords_are_redacted() {
        let body = redact(json!({"email": "a@b.com", "password": "x", "newPassword": "y"}));
        assert_eq!(body["email"], "a@b.com");
        assert_eq!(body["password"], "***");
        assert_eq!(body["newPassword"], "***");
    }
}
