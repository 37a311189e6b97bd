use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{AppState, MaterialKind, Order, RfqSummary},
    ui::{
        components::{
            company_profile::CompanyProfile,
            compliance_tracker::ComplianceTracker,
            kpi_card::KpiCard,
            status_badge::OrderStatusBadge,
        },
        format, theme,
    },
};

#[derive(Clone, Debug, PartialEq)]
struct MarketRow {
    kind: &'static str,
    latest: String,
    change: String,
    rising: bool,
}

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let kpis = state.with(|st| st.kpis());
    let compliance = state.with(|st| st.compliance());
    let (active, completed): (Vec<Order>, Vec<Order>) = state.with(|st| {
        st.orders()
            .into_iter()
            .cloned()
            .partition(|order| order.status.is_open())
    });
    let buyer = state.with(|st| st.config.buyer.clone());
    let rfqs = state.with(|st| st.catalog.rfqs.clone());
    let boards: Vec<String> = state.with(|st| {
        rfqs.iter()
            .filter(|rfq| st.quote_board(&rfq.id).is_some())
            .map(|rfq| rfq.id.clone())
            .collect()
    });
    let sent = state.with(|st| {
        st.rfqs
            .iter()
            .map(|rfq| (rfq.reference.clone(), rfq.supplier.clone(), rfq.material.clone(), rfq.quantity.kg()))
            .chain(st.bookings.iter().map(|booking| {
                (
                    booking.reference.clone(),
                    booking.supplier.clone(),
                    booking.material.clone(),
                    booking.quantity.kg(),
                )
            }))
            .collect::<Vec<_>>()
    });
    let (months, market) = state.with(|st| {
        let history = &st.catalog.price_history;
        let rows = MaterialKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let latest = history.latest(kind)?;
                let change = history.change_pct(kind).unwrap_or(0.0);
                Some(MarketRow {
                    kind: kind.label(),
                    latest: format::usd_per_kg(latest),
                    change: format!("{change:+.1}%"),
                    rising: change > 0.0,
                })
            })
            .collect::<Vec<_>>();
        let span = match (history.months.first(), history.months.last()) {
            (Some(first), Some(last)) => format!("{first} – {last}"),
            _ => String::new(),
        };
        (span, rows)
    });

    let avg_price = kpis
        .avg_price_per_kg
        .map(format::usd_per_kg)
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        h1 { class: "mb-6 text-2xl font-semibold text-slate-100", "Buyer Dashboard" }
        div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
            KpiCard { title: "Orders".to_string(), value: kpis.order_count.to_string(), description: Some(format!("{} open", kpis.open_orders)) }
            KpiCard { title: "Volume".to_string(), value: format::kg(kpis.total_kg), description: None }
            KpiCard { title: "Total spend".to_string(), value: format::usd(kpis.total_spend), description: Some("Material and freight".to_string()) }
            KpiCard { title: "Avg. price".to_string(), value: avg_price, description: Some(format!("{} recycled", format::kg_f64(kpis.recycled_kg))) }
        }
        div { class: "mt-6 grid gap-6 lg:grid-cols-[2fr_1fr]",
            ComplianceTracker { snapshot: compliance }
            CompanyProfile { buyer }
            section { class: "{theme::panel()} p-6 lg:col-span-2",
                h2 { class: "{theme::section_title()}", "Market prices" }
                p { class: "text-xs {theme::text_muted()}", "{months}" }
                ul { class: "mt-4 space-y-2 text-sm",
                    for row in market {
                        li { key: "{row.kind}", class: "flex justify-between",
                            span { "{row.kind}" }
                            span { class: "font-mono", "{row.latest}" }
                            span { class: if row.rising { "text-amber-300" } else { "text-emerald-300" }, "{row.change}" }
                        }
                    }
                }
            }
        }
        section { class: "mt-8",
            h2 { class: "mb-3 {theme::section_title()}", "RFQs" }
            RfqTable { rfqs, boards }
            if !sent.is_empty() {
                h3 { class: "mt-4 mb-2 text-xs uppercase {theme::text_muted()}", "Sent this session" }
                ul { class: "space-y-1 text-sm",
                    for (reference, supplier, material, kg) in sent {
                        li { key: "{reference}", class: "flex gap-3",
                            span { class: "font-mono {theme::accent_text()}", "{reference}" }
                            span { "{supplier}" }
                            span { class: "{theme::text_muted()}", "{material} · {format::kg(kg)}" }
                        }
                    }
                }
            }
        }
        section { class: "mt-8",
            h2 { class: "mb-3 {theme::section_title()}", "Active orders" }
            OrderTable { orders: active, completed: false }
        }
        section { class: "mt-8",
            h2 { class: "mb-3 {theme::section_title()}", "Completed orders" }
            OrderTable { orders: completed, completed: true }
        }
    }
}

#[component]
fn RfqTable(rfqs: Vec<RfqSummary>, boards: Vec<String>) -> Element {
    let nav = use_navigator();
    rsx! {
        div { class: "{theme::table_container()}",
            table { class: "min-w-full text-sm",
                thead { class: "{theme::table_header()}",
                    tr {
                        th { class: "px-4 py-2 text-left", "RFQ" }
                        th { class: "px-4 py-2 text-left", "Supplier" }
                        th { class: "px-4 py-2 text-left", "Material" }
                        th { class: "px-4 py-2 text-right", "Quantity" }
                        th { class: "px-4 py-2 text-left", "Requested" }
                        th { class: "px-4 py-2 text-left", "Status" }
                        th { class: "px-4 py-2" }
                    }
                }
                tbody { class: "{theme::table_divider()}",
                    for rfq in rfqs {
                        tr { key: "{rfq.id}",
                            td { class: "px-4 py-2 font-mono", "{rfq.id}" }
                            td { class: "px-4 py-2", "{rfq.supplier}" }
                            td { class: "px-4 py-2", "{rfq.material}" }
                            td { class: "px-4 py-2 text-right", "{format::kg(rfq.quantity_kg)}" }
                            td { class: "px-4 py-2", "{format::date(rfq.request_date)}" }
                            td { class: "px-4 py-2", OrderStatusBadge { status: rfq.status } }
                            td { class: "px-4 py-2 text-right",
                                if boards.contains(&rfq.id) {
                                    button {
                                        class: theme::link_class(),
                                        onclick: {
                                            let rfq_id = rfq.id.clone();
                                            move |_| {
                                                nav.push(Route::QuoteComparison { rfq_id: rfq_id.clone() });
                                            }
                                        },
                                        "Compare quotes"
                                    }
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
fn OrderTable(orders: Vec<Order>, completed: bool) -> Element {
    let nav = use_navigator();
    if orders.is_empty() {
        return rsx! {
            p { class: "{theme::panel()} p-6 text-sm {theme::text_muted()}", "Nothing here yet." }
        };
    }
    rsx! {
        div { class: "{theme::table_container()}",
            table { class: "min-w-full text-sm",
                thead { class: "{theme::table_header()}",
                    tr {
                        th { class: "px-4 py-2 text-left", "Order" }
                        th { class: "px-4 py-2 text-left", "Supplier" }
                        th { class: "px-4 py-2 text-left", "Material" }
                        th { class: "px-4 py-2 text-right", "Quantity" }
                        th { class: "px-4 py-2 text-right", "Value" }
                        th { class: "px-4 py-2 text-left", if completed { "Delivered" } else { "Expected" } }
                        th { class: "px-4 py-2 text-left", "Status" }
                        th { class: "px-4 py-2" }
                    }
                }
                tbody { class: "{theme::table_divider()}",
                    for order in orders {
                        tr { key: "{order.id}",
                            td { class: "px-4 py-2 font-mono", "{order.id}" }
                            td { class: "px-4 py-2", "{order.supplier}" }
                            td { class: "px-4 py-2", "{order.material}" }
                            td { class: "px-4 py-2 text-right", "{format::kg(order.quantity_kg)}" }
                            td { class: "px-4 py-2 text-right", "{format::usd(order.total_value())}" }
                            td { class: "px-4 py-2", "{format::date(order.delivery_date)}" }
                            td { class: "px-4 py-2", OrderStatusBadge { status: order.status } }
                            td { class: "px-4 py-2 text-right",
                                button {
                                    class: theme::link_class(),
                                    onclick: {
                                        let order_id = order.id.clone();
                                        move |_| {
                                            let target = if completed {
                                                Route::OrderCompletion { order_id: order_id.clone() }
                                            } else {
                                                Route::OrderTracking { order_id: order_id.clone() }
                                            };
                                            nav.push(target);
                                        }
                                    },
                                    if completed { "Certificate" } else { "Track" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
