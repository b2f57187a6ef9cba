//! Course tile used by the catalog, the home page and related tracks.

use dioxus::prelude::*;
use learnhub_core::catalog::format_price;
use learnhub_core::Course;
use learnhub_ui::{
    button_class, Badge, BadgeSize, BadgeVariant, ButtonSize, ButtonVariant, Card, CardSize,
    CardVariant,
};

use crate::app::Route;

/// Five-star rating strip, rounded to whole stars.
pub fn star_rating(rating: f32) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(5 - filled))
}

#[component]
pub fn CourseCard(course: &'static Course) -> Element {
    let navigator = use_navigator();
    let details_class = button_class(ButtonVariant::Outline, ButtonSize::Sm, false, false, None);
    let stars = star_rating(course.rating);
    let price = format_price(course.price);

    rsx! {
        Card {
            variant: CardVariant::Interactive,
            size: CardSize::Sm,
            class: "overflow-hidden p-0".to_string(),
            onclick: move |_| {
                navigator.push(Route::CourseDetail { id: course.id.to_string() });
            },
            div { class: "relative h-48 overflow-hidden",
                img { class: "h-full w-full object-cover", src: course.image, alt: course.title }
                div { class: "absolute top-3 right-3",
                    Badge { variant: BadgeVariant::Secondary, size: BadgeSize::Sm, "{course.category}" }
                }
            }
            div { class: "p-6 space-y-4",
                div { class: "space-y-2",
                    h3 { class: "font-semibold text-lg leading-tight", "{course.title}" }
                    p { class: "text-sm text-neutral-600 line-clamp-2", "{course.description}" }
                }
                div { class: "flex items-center gap-4 text-xs text-neutral-500",
                    span { class: "text-warning-500", "{stars}" }
                    span { "{course.duration}" }
                    span { "{course.enrolled_students} students" }
                }
                div { class: "flex items-center justify-between pt-2",
                    span { class: "text-xl font-bold text-neutral-900", "{price}" }
                    Link {
                        to: Route::CourseDetail { id: course.id.to_string() },
                        class: "{details_class}",
                        "View details"
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
    fn star_rating_rounds() {
        assert_eq!(star_rating(4.0), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2606}");
        assert_eq!(star_rating(4.6).chars().filter(|c| *c == '\u{2605}').count(), 5);
        assert_eq!(star_rating(-1.0).chars().count(), 5);
    }
}
