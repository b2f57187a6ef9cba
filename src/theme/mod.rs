//! Theme for the LearnHub desktop app.

mod styles;

pub use styles::GLOBAL_STYLES;
