//! One-time passcode entry helpers.

/// Digits in a verification code.
pub const OTP_LENGTH: usize = 6;

/// Seconds before a new code may be requested.
pub const RESEND_COOLDOWN_SECS: u32 = 60;

/// Apply an edit to the OTP field. Edits longer than [`OTP_LENGTH`] are
/// ignored and the previous value is kept.
pub fn accept_input(previous: &str, edited: &str) -> String {
    if edited.chars().count() <= OTP_LENGTH {
        edited.to_string()
    } else {
        previous.to_string()
    }
}

/// Whether the verify button should be disabled.
pub fn submit_disabled(otp: &str, submitting: bool) -> bool {
    submitting || otp.chars().count() != OTP_LENGTH
}

/// Countdown gating the "resend code" action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResendCountdown {
    remaining: u32,
}

impl Default for ResendCountdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ResendCountdown {
    pub fn new() -> Self {
        Self {
            remaining: RESEND_COOLDOWN_SECS,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn can_resend(&self) -> bool {
        self.remaining == 0
    }

    /// Advance one second. Returns true while still counting.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining > 0
    }

    /// Start over after a code was resent.
    pub fn restart(&mut self) {
        self.remaining = RESEND_COOLDOWN_SECS;
    }

    /// `m:ss` label shown next to the resend link.
    pub fn label(&self) -> String {
        format!("{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_edits_are_ignored() {
        assert_eq!(accept_input("12345", "123456"), "123456");
        assert_eq!(accept_input("123456", "1234567"), "123456");
        assert_eq!(accept_input("12", ""), "");
    }

    #[test]
    fn submit_disabled_until_six_characters() {
        assert!(submit_disabled("12345", false));
        assert!(!submit_disabled("123456", false));
        assert!(submit_disabled("123456", true));
        // Length gate only; the digits-only rule is the validator's job.
        assert!(!submit_disabled("12a456", false));
    }

    #[test]
    fn countdown_reaches_zero_after_cooldown() {
        let mut countdown = ResendCountdown::new();
        assert!(!countdown.can_resend());
        for _ in 0..RESEND_COOLDOWN_SECS - 1 {
            assert!(countdown.tick());
        }
        assert!(!countdown.tick());
        assert!(countdown.can_resend());
        // Saturates.
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn restart_and_label() {
        let mut countdown = ResendCountdown { remaining: 0 };
        countdown.restart();
        assert_eq!(countdown.label(), "1:00");
        countdown.tick();
        assert_eq!(countdown.label(), "0:59");
    }
}
