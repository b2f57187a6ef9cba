//! Page components for LearnHub.

mod auth;
mod checkout;
mod course_detail;
mod courses;
mod dashboard;
mod home;
mod invoices;
mod not_found;
mod settings;

pub use auth::{Login, ResetPassword, Signup, VerifyOtp};
pub use checkout::Checkout;
pub use course_detail::CourseDetail;
pub use courses::Courses;
pub use dashboard::Dashboard;
pub use home::Home;
pub use invoices::Invoices;
pub use not_found::NotFound;
pub use settings::Settings;
