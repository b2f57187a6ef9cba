//! Learner dashboard: enrolled tracks, intro courses and tracks to rate.

use dioxus::prelude::*;
use learnhub_core::account::{enrolled_courses, technology_intros, EnrollmentStatus};
use learnhub_core::catalog::courses;
use learnhub_ui::{Badge, BadgeSize, BadgeVariant, Card, CardSize, CardVariant};

use crate::app::Route;

fn status_badge(status: EnrollmentStatus) -> BadgeVariant {
    match status {
        EnrollmentStatus::Completed => BadgeVariant::Success,
        EnrollmentStatus::InProgress => BadgeVariant::Info,
        EnrollmentStatus::NotStarted => BadgeVariant::Secondary,
    }
}

#[component]
pub fn Dashboard() -> Element {
    let navigator = use_navigator();
    let enrolled = use_hook(enrolled_courses);
    let intros = use_hook(technology_intros);

    rsx! {
        div { class: "space-y-12",
            section {
                h2 { class: "text-2xl font-bold text-neutral-900 mb-6", "Enrolled courses" }
                div { class: "space-y-4",
                    for course in enrolled.iter() {
                        Card { key: "{course.id}", size: CardSize::Md,
                            div { class: "flex items-center justify-between",
                                div {
                                    h3 { class: "text-lg font-semibold text-neutral-900 mb-2", "{course.title}" }
                                    div { class: "progress-track",
                                        div { class: "progress-fill", width: "{course.progress}%" }
                                    }
                                    p { class: "text-sm text-neutral-600 mt-2", "{course.progress}% completed" }
                                }
                                Badge { variant: status_badge(course.status), "{course.status.label()}" }
                            }
                        }
                    }
                }
            }
            section {
                h2 { class: "text-2xl font-bold text-neutral-900 mb-6", "Technologies" }
                div { class: "grid grid-cols-4 gap-6",
                    for intro in intros.iter() {
                        Card { key: "{intro.id}", variant: CardVariant::Interactive, size: CardSize::Sm, class: "text-center".to_string(),
                            h3 { class: "font-semibold text-neutral-900 mb-3", "{intro.name}" }
                            if intro.registered {
                                Badge { size: BadgeSize::Sm, class: "bg-primary-100 text-primary-700".to_string(), "Registered" }
                            } else {
                                Badge { variant: BadgeVariant::Secondary, size: BadgeSize::Sm, "Not registered" }
                            }
                        }
                    }
                }
            }
            section {
                h2 { class: "text-2xl font-bold text-neutral-900 mb-6", "Rate us" }
                div { class: "grid grid-cols-2 gap-6",
                    for course in courses().iter().take(2) {
                        Card {
                            key: "{course.id}",
                            variant: CardVariant::Interactive,
                            onclick: move |_| {
                                navigator.push(Route::CourseDetail { id: course.id.to_string() });
                            },
                            h3 { class: "font-bold text-neutral-900 mb-2", "{course.title}" }
                            p { class: "text-sm text-neutral-600", "{course.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_badges() {
        assert_eq!(status_badge(EnrollmentStatus::Completed), BadgeVariant::Success);
        assert_eq!(status_badge(EnrollmentStatus::InProgress), BadgeVariant::Info);
    }
}
