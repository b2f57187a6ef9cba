//! Payment history.

use dioxus::prelude::*;
use learnhub_core::account::invoices;
use learnhub_core::Invoice;
use learnhub_ui::{Badge, Card, CardSize, IconButton};

#[component]
pub fn Invoices() -> Element {
    let history = use_hook(invoices);
    let mut viewing: Signal<Option<u32>> = use_signal(|| None);

    if history.is_empty() {
        return rsx! {
            Card { size: CardSize::Lg, class: "text-center".to_string(),
                h3 { class: "text-xl font-semibold text-neutral-600 mb-2", "No invoices yet" }
                p { class: "text-neutral-500",
                    "Your payment history will appear here once you enroll in courses."
                }
            }
        };
    }

    let selected = viewing().and_then(|id| history.iter().find(|inv| inv.id == id).cloned());

    rsx! {
        section {
            h2 { class: "text-3xl font-bold text-neutral-900 mb-8", "Past Invoices" }
            Card { size: CardSize::Sm, class: "p-0 overflow-x-auto".to_string(),
                table { class: "w-full invoice-table",
                    thead {
                        tr {
                            th { "#" }
                            th { "Date" }
                            th { "Amount" }
                            th { "Status" }
                            th { class: "text-right", "Action" }
                        }
                    }
                    tbody {
                        for invoice in history.iter() {
                            tr { key: "{invoice.id}",
                                td { class: "font-medium text-neutral-900", "{invoice.id}" }
                                td { class: "text-neutral-700", "{invoice.date_label()}" }
                                td { class: "font-semibold text-neutral-900", "{invoice.amount_label()}" }
                                td {
                                    Badge { variant: invoice.status.badge(), "{invoice.status.label()}" }
                                }
                                td { class: "text-right",
                                    IconButton {
                                        aria_label: format!("View invoice {}", invoice.id),
                                        onclick: {
                                            let id = invoice.id;
                                            move |_| {
                                                tracing::info!(invoice = id, "Viewing invoice");
                                                viewing.set(Some(id));
                                            }
                                        },
                                        "\u{1F441}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(invoice) = selected {
                InvoiceDetail { invoice: invoice, on_close: move |_| viewing.set(None) }
            }
        }
    }
}

#[component]
fn InvoiceDetail(invoice: Invoice, on_close: EventHandler<()>) -> Element {
    let course = invoice.course_title.unwrap_or("Course");

    rsx! {
        Card { size: CardSize::Md, class: "mt-6".to_string(),
            div { class: "flex items-center justify-between mb-4",
                h3 { class: "text-xl font-bold text-neutral-900", "Invoice #{invoice.id}" }
                IconButton { aria_label: "Close invoice".to_string(), onclick: move |_| on_close.call(()), "\u{2715}" }
            }
            dl { class: "space-y-2 text-sm",
                div { class: "flex justify-between",
                    dt { class: "text-neutral-500", "Course:" }
                    dd { class: "text-neutral-700", "{course}" }
                }
                div { class: "flex justify-between",
                    dt { class: "text-neutral-500", "Date:" }
                    dd { class: "text-neutral-700", "{invoice.date_label()}" }
                }
                div { class: "flex justify-between",
                    dt { class: "text-neutral-500", "Amount:" }
                    dd { class: "font-semibold text-neutral-900", "{invoice.amount_label()}" }
                }
                div { class: "flex justify-between items-center",
                    dt { class: "text-neutral-500", "Status:" }
                    dd { Badge { variant: invoice.status.badge(), "{invoice.status.label()}" } }
                }
            }
        }
    }
}
