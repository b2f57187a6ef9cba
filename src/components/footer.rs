//! Site footer: menu, contact details and social links.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::header::Logo;

#[component]
pub fn SiteFooter() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "bg-primary-800 text-white",
            div { class: "container",
                div { class: "py-8 flex flex-wrap justify-between items-start gap-8",
                    div { class: "flex items-center gap-12",
                        Logo { class: "logo-inverted".to_string() }
                        div { class: "flex gap-6",
                            h3 { class: "text-base font-semibold", "Menu" }
                            nav { class: "flex gap-6",
                                Link { to: Route::Home {}, class: "footer-link text-sm", "Home" }
                                Link { to: Route::Courses {}, class: "footer-link text-sm", "Courses" }
                            }
                        }
                    }
                    div { class: "flex gap-12",
                        div { class: "flex gap-6",
                            h3 { class: "text-base font-semibold", "Contact" }
                            div { class: "flex flex-col gap-2",
                                span { class: "text-sm text-neutral-300", "+23341002000" }
                                span { class: "text-sm text-neutral-300", "New Reiss, Ghana, Accra" }
                            }
                        }
                        div { class: "flex gap-6",
                            h3 { class: "text-base font-semibold", "Social" }
                            div { class: "flex flex-col gap-2",
                                a { class: "footer-link text-sm underline", href: "https://linkedin.com", "LinkedIn" }
                                a { class: "footer-link text-sm underline", href: "https://facebook.com", "Facebook" }
                            }
                        }
                    }
                }
                div { class: "border-t border-primary-700 py-6 flex justify-between items-center gap-4",
                    p { class: "text-sm text-neutral-400",
                        "\u{a9} copyright {year} - G-client, All rights reserved"
                    }
                    button {
                        class: "footer-link text-sm",
                        r#type: "button",
                        onclick: move |_| {
                            document::eval("window.scrollTo({ top: 0, behavior: 'smooth' })");
                        },
                        "Back to top \u{2191}"
                    }
                }
            }
        }
    }
}
