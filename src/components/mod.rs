//! Application components: site chrome, layouts and shared page pieces.

mod banner;
mod course_card;
mod footer;
mod header;
mod layout;

pub use banner::FormBanner;
pub use course_card::{star_rating, CourseCard};
pub use footer::SiteFooter;
pub use header::{Logo, NavLocation, SiteHeader};
pub use layout::{AccountLayout, AccountTab, AuthLayout, SiteLayout};
