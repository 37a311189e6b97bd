use dioxus::prelude::*;

use crate::{
    app::{dispatch_event, Route},
    domain::{AppState, MarketEvent, OrderTimeline},
    ui::{
        components::{
            order_timeline::OrderTimelineView, status_badge::OrderStatusBadge, toast::ToastMessage,
        },
        format, theme,
    },
};

#[component]
pub fn OrderTrackingPage(order_id: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let Some(order) = state.with(|st| st.order(&order_id).cloned()) else {
        return rsx! { MissingOrder { order_id } };
    };
    let delivered = OrderTimeline::new(order.current_step).is_delivered();

    let request_document = move |name: String| {
        let ui = state.with(|st| st.config.ui.clone());
        dispatch_event(MarketEvent::DocumentRequested { name }, toasts, nav, &ui);
    };

    rsx! {
        button {
            class: "{theme::link_class()} mb-4",
            onclick: move |_| {
                nav.push(Route::Dashboard {});
            },
            "← Dashboard"
        }
        header { class: "{theme::panel()} mb-6 flex flex-wrap items-start justify-between gap-4 p-6",
            div {
                h1 { class: "text-2xl font-semibold text-slate-100", "Order {order.id}" }
                p { class: "text-sm {theme::text_muted()}", "{order.supplier} · {order.material}" }
                p { class: "mt-1 text-sm text-slate-300",
                    "{format::kg(order.quantity_kg)} at {format::usd_per_kg(order.unit_price)} · {format::usd(order.total_value())}"
                }
            }
            div { class: "text-right",
                OrderStatusBadge { status: order.status }
                p { class: "mt-2 text-xs {theme::text_muted()}", "Ordered {format::date(order.order_date)}" }
                p { class: "text-xs {theme::text_muted()}", "Expected {format::date(order.delivery_date)}" }
            }
        }
        div { class: "grid gap-6 lg:grid-cols-[2fr_1fr]",
            OrderTimelineView { current_step: order.current_step }
            aside { class: "space-y-6",
                if let Some(tracking) = order.tracking.clone() {
                    section { class: "{theme::panel()} p-5 text-sm",
                        h2 { class: "{theme::section_title()}", "Shipment" }
                        dl { class: "mt-3 space-y-1",
                            Row { label: "Carrier", value: tracking.carrier }
                            Row { label: "Tracking #", value: tracking.tracking_number }
                            Row { label: "Location", value: tracking.current_location }
                            Row { label: "Last update", value: tracking.last_update }
                            Row { label: "ETA", value: format::date(tracking.estimated_delivery) }
                        }
                    }
                }
                if let Some(qc) = order.qc_report.clone() {
                    section { class: "{theme::panel()} p-5 text-sm",
                        h2 { class: "{theme::section_title()}", "QC report" }
                        dl { class: "mt-3 space-y-1",
                            Row { label: "Status", value: qc.status }
                            Row { label: "Date", value: format::date(qc.date) }
                            Row { label: "MFI", value: qc.mfi }
                            Row { label: "Contamination", value: qc.contamination }
                            Row { label: "Color", value: qc.color }
                            Row { label: "Inspector", value: qc.inspector }
                        }
                    }
                }
                section { class: "{theme::panel()} p-5 text-sm",
                    h2 { class: "{theme::section_title()}", "Documents" }
                    if order.documents.is_empty() {
                        p { class: "mt-3 {theme::text_muted()}", "No documents yet." }
                    }
                    ul { class: "mt-3 space-y-2",
                        for doc in order.documents.clone() {
                            li { key: "{doc.id}", class: "flex items-center justify-between gap-2",
                                div {
                                    p { "{doc.name}" }
                                    p { class: "text-xs {theme::text_muted()}", "{doc.id} · {doc.kind}" }
                                }
                                button {
                                    class: theme::btn_small(false),
                                    onclick: {
                                        let name = doc.name.clone();
                                        move |_| request_document(name.clone())
                                    },
                                    "Download"
                                }
                            }
                        }
                    }
                }
                if delivered {
                    button {
                        class: "{theme::btn_primary()} w-full",
                        onclick: {
                            let order_id = order.id.clone();
                            move |_| {
                                nav.push(Route::OrderCompletion { order_id: order_id.clone() });
                            }
                        },
                        "View completion certificate"
                    }
                } else {
                    button {
                        class: "{theme::btn_primary()} w-full",
                        onclick: {
                            let order_id = order.id.clone();
                            move |_| {
                                nav.push(Route::DeliveryConfirmation { order_id: order_id.clone() });
                            }
                        },
                        "Confirm delivery"
                    }
                }
            }
        }
    }
}

#[component]
fn Row(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "flex justify-between gap-3",
            dt { class: "{theme::text_muted()}", "{label}" }
            dd { class: "text-right text-slate-200", "{value}" }
        }
    }
}

#[component]
pub fn MissingOrder(order_id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        div { class: "{theme::panel()} p-10 text-center",
            p { class: "text-lg font-semibold", "Order not found" }
            p { class: "mt-1 text-sm {theme::text_muted()}", "No order with id \"{order_id}\"." }
            button {
                class: "{theme::btn_secondary()} mt-4",
                onclick: move |_| {
                    nav.push(Route::Dashboard {});
                },
                "Back to dashboard"
            }
        }
    }
}
