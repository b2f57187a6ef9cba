//! Marketing home page.
//!
//! Sections, top to bottom: hero, solutions, next-step skills, stats,
//! learner journey, closing call to action.

use dioxus::prelude::*;
use learnhub_ui::{button_class, Badge, BadgeSize, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardSize, CardVariant};

use crate::app::Route;

struct Solution {
    title: &'static str,
    course_id: &'static str,
    price: &'static str,
    duration: &'static str,
    technologies: &'static [&'static str],
}

static SOLUTIONS: [Solution; 4] = [
    Solution {
        title: "Software Engineering",
        course_id: "software-development",
        price: "$400",
        duration: "12 weeks",
        technologies: &["Node.js", "React.js"],
    },
    Solution {
        title: "Cloud Computing",
        course_id: "cloud-computing-expertise",
        price: "$350",
        duration: "12 weeks",
        technologies: &["Azure", "AWS"],
    },
    Solution {
        title: "Data Science",
        course_id: "data-science-mastery",
        price: "$400",
        duration: "12 weeks",
        technologies: &["PowerBI", "Python"],
    },
    Solution {
        title: "UI/UX",
        course_id: "",
        price: "$250",
        duration: "8 weeks",
        technologies: &["Figma", "Sketch"],
    },
];

static SKILLS: [&str; 12] = [
    "ReactJs", "NextJs", "NodeJs", "Django", "MongoDB", "VueJs", "AWS", "Azure", "PowerBI",
    "Python", "Excel", "Tableau",
];

static STATS: [(&str, &str, &str); 3] = [
    ("4+", "Courses", "text-primary-600"),
    ("200+", "Course students", "text-secondary-600"),
    ("250+", "Hours of content", "text-success-600"),
];

static JOURNEY: [(&str, &str, &str); 3] = [
    (
        "\u{1F464}",
        "Sign Up and Choose Your Course",
        "Create your account quickly with just your email or social media login, then explore a wide range",
    ),
    (
        "\u{1F4D6}",
        "Onboarding",
        "Get started seamlessly with a smooth onboarding experience. Learn the essentials and set yourself up for success from day one.",
    ),
    (
        "\u{1F393}",
        "Start Learning",
        "Start your learning journey with practical, hands-on experience. Develop the skills needed to build, implement, and manage effective solutions.",
    ),
];

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        Solutions {}
        Skills {}
        Stats {}
        Journey {}
        CallToAction {}
    }
}

#[component]
fn Hero() -> Element {
    let cta = button_class(ButtonVariant::Primary, ButtonSize::Lg, false, false, Some("text-base"));

    rsx! {
        section { class: "hero",
            div { class: "container hero-content",
                div { class: "max-w-xl",
                    h1 { class: "text-5xl font-bold text-white leading-tight mb-4",
                        "Unlock Your Potential with Industry-Leading Courses!"
                    }
                    p { class: "text-lg text-white leading-relaxed mb-8",
                        "\u{201C}Join thousands of learners gaining real-world skills and advancing their careers. "
                        "Our expert-led courses are designed to empower you to succeed.\u{201D}"
                    }
                    Link { to: Route::Signup {}, class: "{cta}", "Get started" }
                }
            }
        }
    }
}

#[component]
fn Solutions() -> Element {
    let navigator = use_navigator();

    rsx! {
        section { class: "py-16 bg-white",
            div { class: "container",
                SectionTitle {
                    title: "Our solutions",
                    lead: "Create your account quickly with just your email or social media login, then explore a wide range",
                }
                div { class: "grid grid-cols-4 gap-6",
                    for solution in SOLUTIONS.iter() {
                        Card {
                            key: "{solution.title}",
                            variant: CardVariant::Interactive,
                            size: CardSize::Md,
                            class: "rounded-3xl".to_string(),
                            onclick: move |_| {
                                let route = if solution.course_id.is_empty() {
                                    Route::Courses {}
                                } else {
                                    Route::CourseDetail { id: solution.course_id.to_string() }
                                };
                                navigator.push(route);
                            },
                            div { class: "flex justify-between items-start mb-4",
                                h3 { class: "text-lg font-bold text-neutral-900", "{solution.title}" }
                                Badge { class: "bg-white text-neutral-900 shadow-sm".to_string(), "{solution.price}" }
                            }
                            p { class: "text-sm text-neutral-600 mb-6", "\u{1F4C5} {solution.duration}" }
                            div { class: "flex flex-wrap gap-2",
                                for tech in solution.technologies.iter() {
                                    Badge { variant: BadgeVariant::Secondary, size: BadgeSize::Sm, "{tech}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Skills() -> Element {
    rsx! {
        section { class: "py-16 bg-primary-800 text-white",
            div { class: "container max-w-2xl space-y-6",
                h2 { class: "text-4xl font-bold leading-tight", "What will be next step" }
                p { class: "text-lg leading-relaxed",
                    "Discover our diverse stack of solutions, including software development, data science, "
                    "and cloud tools. Sign up today and kickstart your journey!"
                }
                div { class: "grid grid-cols-4 gap-3",
                    for skill in SKILLS.iter() {
                        div { class: "skill-chip text-sm font-medium text-center", "{skill}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Stats() -> Element {
    rsx! {
        section { class: "py-16 bg-neutral-50",
            div { class: "container",
                SectionTitle {
                    title: "We are proud",
                    lead: "We take pride in our achievements and contribution to excellence in unleashing innovation, growth, and success.",
                }
                div { class: "grid grid-cols-3 gap-8",
                    for (value, label, color) in STATS.iter() {
                        div { class: "text-center",
                            div { class: "text-6xl font-bold mb-2 {color}", "{value}" }
                            div { class: "text-xl text-neutral-700 font-medium", "{label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Journey() -> Element {
    rsx! {
        section { class: "py-16 bg-white",
            div { class: "container max-w-2xl space-y-8",
                for (step, (icon, title, description)) in JOURNEY.iter().enumerate() {
                    Card { key: "{title}", size: CardSize::Md,
                        div { class: "flex gap-6",
                            div { class: "icon-disc bg-primary-100 text-primary-600", "{icon}" }
                            div {
                                h3 { class: "text-xl font-bold text-neutral-900 mb-3", "{step + 1}. {title}" }
                                p { class: "text-neutral-600 leading-relaxed", "{description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CallToAction() -> Element {
    let navigator = use_navigator();

    rsx! {
        section { class: "py-12 bg-primary-700 text-white",
            div { class: "container flex items-center justify-between gap-8",
                div { class: "flex-1",
                    h2 { class: "text-3xl font-bold mb-3", "It's time to start investing in yourself" }
                    p { class: "text-lg max-w-2xl",
                        "Online courses open the opportunity for learning to almost anyone, regardless of their scheduling commitments."
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Lg,
                    class: "cta-outline".to_string(),
                    onclick: move |_| {
                        tracing::info!("Get started clicked");
                        navigator.push(Route::Signup {});
                    },
                    "Get started"
                }
            }
        }
    }
}

#[component]
fn SectionTitle(title: &'static str, lead: &'static str) -> Element {
    rsx! {
        div { class: "text-center space-y-4 mb-12",
            h2 { class: "text-4xl font-bold text-neutral-900", "{title}" }
            p { class: "text-lg text-neutral-600 max-w-2xl mx-auto", "{lead}" }
        }
    }
}
