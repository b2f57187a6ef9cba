//! Track details with enrollment link and related tracks.

use dioxus::prelude::*;
use learnhub_core::catalog::{related_courses, require_course};
use learnhub_ui::{button_class, ButtonSize, ButtonVariant, Card, CardSize, CardVariant};

use crate::app::Route;
use crate::components::{star_rating, CourseCard};
use crate::pages::not_found::Missing;

#[component]
pub fn CourseDetail(id: String) -> Element {
    let course = match require_course(&id) {
        Ok(course) => course,
        Err(e) => {
            tracing::warn!("{}", e);
            return rsx! { Missing {} };
        }
    };
    let related = related_courses(course.id);
    let enroll_class = button_class(ButtonVariant::Primary, ButtonSize::Lg, false, true, None);
    let stars = star_rating(course.rating);

    rsx! {
        section { class: "bg-primary-600 text-white py-12",
            div { class: "container",
                nav { class: "breadcrumb flex items-center gap-2 text-sm mb-8",
                    Link { to: Route::Home {}, "Home" }
                    span { "\u{203A}" }
                    Link { to: Route::Courses {}, "Tracks" }
                    span { "\u{203A}" }
                    span { class: "text-white", "{course.title}" }
                }
                div { class: "detail-hero",
                    div { class: "space-y-6",
                        h1 { class: "text-4xl font-bold", "{course.title} Track" }
                        p { class: "text-lg leading-relaxed", "{course.full_description}" }
                        div { class: "flex flex-wrap gap-8",
                            div {
                                div { class: "text-sm mb-1", "Enrolled students" }
                                div { class: "text-2xl font-bold", "{course.enrolled_students}" }
                            }
                            div {
                                div { class: "text-sm mb-1", "Rating" }
                                div { class: "text-warning-500", "{stars} " span { class: "text-white", "{course.rating}" } }
                            }
                        }
                    }
                    img { class: "detail-image rounded-lg object-cover", src: course.image, alt: course.title }
                }
            }
        }
        div { class: "container py-12 detail-grid",
            div { class: "space-y-12",
                section {
                    h2 { class: "text-2xl font-bold text-neutral-900 mb-6", "What you'll learn" }
                    ul { class: "space-y-3",
                        for outcome in course.learning_outcomes.iter() {
                            li { class: "flex gap-3 text-neutral-700",
                                span { class: "text-success-500", "\u{2713}" }
                                "{outcome}"
                            }
                        }
                    }
                }
                section {
                    h2 { class: "text-2xl font-bold text-neutral-900 mb-6", "Technologies" }
                    div { class: "flex flex-wrap gap-2",
                        for tech in course.technologies.iter() {
                            span { class: "tech-chip rounded-full px-3 py-1 text-sm", "{tech}" }
                        }
                    }
                }
                section {
                    h2 { class: "text-2xl font-bold text-neutral-900 mb-6", "Explore related courses" }
                    div { class: "grid grid-cols-2 gap-6",
                        for other in related {
                            CourseCard { key: "{other.id}", course: other }
                        }
                    }
                }
            }
            aside {
                Card { variant: CardVariant::Elevated, size: CardSize::Md, class: "sticky top-24 space-y-6".to_string(),
                    h3 { class: "text-lg font-bold text-neutral-900", "Course Details" }
                    dl { class: "space-y-3 text-sm text-neutral-700",
                        DetailRow { icon: "\u{23F1}", label: "Duration", value: course.duration.to_string() }
                        DetailRow { icon: "\u{1F4D6}", label: "Courses", value: course.courses_count.to_string() }
                        DetailRow { icon: "\u{1F464}", label: "Instructor", value: course.instructor.to_string() }
                        DetailRow { icon: "\u{1F4C5}", label: "Date", value: course.date.to_string() }
                    }
                    div { class: "text-3xl font-bold text-neutral-900", "${course.price}.00" }
                    Link {
                        to: Route::Checkout { course_id: course.id.to_string() },
                        class: "{enroll_class}",
                        "Enroll"
                    }
                }
            }
        }
    }
}

#[component]
fn DetailRow(icon: &'static str, label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "flex items-center gap-3",
            span { class: "text-neutral-500", "{icon}" }
            dt { class: "text-neutral-500", "{label}:" }
            dd { class: "font-medium", "{value}" }
        }
    }
}
