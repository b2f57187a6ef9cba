//! Track catalog with search.

use dioxus::prelude::*;
use learnhub_core::catalog::search_courses;
use learnhub_ui::{Input, InputSize};

use crate::components::CourseCard;

#[component]
pub fn Courses() -> Element {
    let mut term = use_signal(String::new);
    let results = search_courses(&term.read());

    rsx! {
        section { class: "bg-primary-600 text-white py-16",
            div { class: "container text-center",
                h1 { class: "text-5xl font-bold", "Tracks" }
            }
        }
        section { class: "py-12 bg-white",
            div { class: "container max-w-2xl",
                Input {
                    value: term(),
                    oninput: move |value: String| {
                        tracing::debug!(term = %value, "searching tracks");
                        term.set(value);
                    },
                    placeholder: "Search Track".to_string(),
                    left_icon: "\u{1F50D}".to_string(),
                    size: InputSize::Lg,
                }
            }
        }
        section { class: "py-16 bg-white",
            div { class: "container",
                h2 { class: "text-3xl font-bold text-neutral-900 mb-8", "Top Tracks" }
                if results.is_empty() {
                    p { class: "text-neutral-500 text-center py-12", "No tracks match \"{term}\"." }
                } else {
                    div { class: "grid grid-cols-3 gap-8",
                        for course in results {
                            CourseCard { key: "{course.id}", course: course }
                        }
                    }
                }
            }
        }
    }
}
