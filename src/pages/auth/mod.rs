//! Authentication pages: login, signup, code verification, password reset.

mod login;
mod reset_password;
mod signup;
mod verify_otp;

pub use login::Login;
pub use reset_password::ResetPassword;
pub use signup::Signup;
pub use verify_otp::VerifyOtp;
