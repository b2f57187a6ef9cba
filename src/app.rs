use dioxus::prelude::*;

use crate::components::{AccountLayout, AuthLayout, SiteLayout};
use crate::pages::{
    Checkout, CourseDetail, Courses, Dashboard, Home, Invoices, Login, NotFound, ResetPassword,
    Settings, Signup, VerifyOtp,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Marketing home page
/// - `/courses`, `/courses/:id` - Track catalog and details
/// - `/checkout?course_id=` - Enrollment form, optionally preselecting a track
/// - `/auth/*` - Login, signup, code verification and password reset
/// - `/dashboard`, `/settings`, `/invoices` - Learner account pages
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/courses")]
        Courses {},
        #[route("/courses/:id")]
        CourseDetail { id: String },
        #[route("/checkout?:course_id")]
        Checkout { course_id: String },
    #[end_layout]

    #[layout(AuthLayout)]
        #[route("/auth/login")]
        Login {},
        #[route("/auth/signup")]
        Signup {},
        #[route("/auth/verify-otp")]
        VerifyOtp {},
        #[route("/auth/reset-password")]
        ResetPassword {},
    #[end_layout]

    #[layout(AccountLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/settings")]
        Settings {},
        #[route("/invoices")]
        Invoices {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles and routing.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_account_and_auth_paths() {
        assert_eq!(Route::from_str("/dashboard").ok(), Some(Route::Dashboard {}));
        assert_eq!(Route::from_str("/auth/verify-otp").ok(), Some(Route::VerifyOtp {}));
    }

    #[test]
    fn checkout_reads_course_query() {
        assert_eq!(
            Route::from_str("/checkout?course_id=data-science-mastery").ok(),
            Some(Route::Checkout {
                course_id: "data-science-mastery".to_string()
            })
        );
    }

    #[test]
    fn course_detail_renders_its_path() {
        let route = Route::CourseDetail {
            id: "software-development".to_string(),
        };
        assert_eq!(route.to_string(), "/courses/software-development");
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert!(matches!(
            Route::from_str("/nope/missing"),
            Ok(Route::NotFound { .. })
        ));
    }
}
