use dioxus::prelude::*;

use crate::{
    app::{dispatch_event, Route},
    domain::{AppState, Party},
    ui::{components::toast::ToastMessage, format, theme},
    util::today,
};

#[component]
pub fn OrderConfirmationPage(quote_id: String) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();
    let order_date = today();

    let draft = use_hook(|| state.with(|st| st.purchase_order(&quote_id, order_date)));
    let order = match draft {
        Ok(order) => order,
        Err(err) => {
            return rsx! {
                div { class: "{theme::panel()} p-10 text-center",
                    p { class: "text-lg font-semibold", "Cannot prepare this order" }
                    p { class: "mt-1 text-sm {theme::text_muted()}", "{err}" }
                    button {
                        class: "{theme::btn_secondary()} mt-4",
                        onclick: move |_| {
                            nav.push(Route::Dashboard {});
                        },
                        "Back to dashboard"
                    }
                }
            };
        }
    };

    let buyer = state.with(|st| st.buyer());
    let supplier = state.with(|st| {
        st.catalog
            .supplier(&order.supplier_id)
            .map(|s| Party {
                name: s.name.clone(),
                ..s.contact.clone()
            })
            .unwrap_or_else(|| Party {
                name: order.supplier.clone(),
                ..Party::default()
            })
    });
    let already_placed = state.with(|st| st.order(&order.id).is_some());
    let incoterm = order.incoterm.map(|term| term.label()).unwrap_or("—");
    let payment = order.payment_terms.map(|terms| terms.label()).unwrap_or("—");
    let lead_time = order
        .lead_time_days
        .map(|days| format!("{days} days"))
        .unwrap_or_else(|| "—".to_string());

    let on_confirm = {
        let order = order.clone();
        move |_| {
            let event = state.with_mut(|st| st.place_order(order.clone()));
            let ui = state.with(|st| st.config.ui.clone());
            dispatch_event(event, toasts, nav, &ui);
        }
    };

    rsx! {
        div { class: "mb-6 flex items-end justify-between",
            div {
                h1 { class: "text-2xl font-semibold text-slate-100", "Purchase Order" }
                p { class: "font-mono text-sm {theme::accent_text()}", "{order.id}" }
            }
            p { class: "text-sm {theme::text_muted()}", "Issued {format::date(order.order_date)}" }
        }
        div { class: "grid gap-4 sm:grid-cols-2",
            PartyBlock { heading: "Buyer", party: buyer }
            PartyBlock { heading: "Supplier", party: supplier }
        }
        section { class: "mt-6 {theme::table_container()}",
            table { class: "min-w-full text-sm",
                thead { class: "{theme::table_header()}",
                    tr {
                        th { class: "px-4 py-2 text-left", "Material" }
                        th { class: "px-4 py-2 text-right", "Quantity" }
                        th { class: "px-4 py-2 text-right", "Unit price" }
                        th { class: "px-4 py-2 text-right", "Amount" }
                    }
                }
                tbody { class: "{theme::table_divider()}",
                    tr {
                        td { class: "px-4 py-2", "{order.material}" }
                        td { class: "px-4 py-2 text-right", "{format::kg(order.quantity_kg)}" }
                        td { class: "px-4 py-2 text-right", "{format::usd_per_kg(order.unit_price)}" }
                        td { class: "px-4 py-2 text-right", "{format::usd(order.material_cost())}" }
                    }
                    tr {
                        td { class: "px-4 py-2", colspan: 3, "Freight" }
                        td { class: "px-4 py-2 text-right", "{format::usd(order.shipping_cost)}" }
                    }
                    tr { class: "font-semibold",
                        td { class: "px-4 py-2", colspan: 3, "Total" }
                        td { class: "px-4 py-2 text-right text-emerald-300", "{format::usd(order.total_value())}" }
                    }
                }
            }
        }
        dl { class: "mt-6 {theme::panel()} grid grid-cols-2 gap-3 p-5 text-sm sm:grid-cols-4",
            div {
                dt { class: "{theme::text_muted()}", "Incoterm" }
                dd { "{incoterm}" }
            }
            div {
                dt { class: "{theme::text_muted()}", "Payment terms" }
                dd { "{payment}" }
            }
            div {
                dt { class: "{theme::text_muted()}", "Lead time" }
                dd { "{lead_time}" }
            }
            div {
                dt { class: "{theme::text_muted()}", "Expected delivery" }
                dd { "{format::date(order.delivery_date)}" }
            }
        }
        div { class: "mt-6 flex justify-end gap-2",
            button {
                class: theme::btn_secondary(),
                onclick: move |_| {
                    nav.go_back();
                },
                "Back"
            }
            if already_placed {
                button {
                    class: theme::btn_primary(),
                    onclick: {
                        let order_id = order.id.clone();
                        move |_| {
                            nav.push(Route::OrderTracking { order_id: order_id.clone() });
                        }
                    },
                    "Track order"
                }
            } else {
                button { class: theme::btn_primary(), onclick: on_confirm, "Confirm & send PO" }
            }
        }
    }
}

#[component]
fn PartyBlock(heading: &'static str, party: Party) -> Element {
    rsx! {
        section { class: "{theme::panel()} p-5 text-sm",
            h2 { class: "{theme::section_title()}", "{heading}" }
            p { class: "mt-2 font-semibold text-slate-100", "{party.name}" }
            if !party.contact.is_empty() {
                p { "{party.contact}" }
            }
            if !party.address.is_empty() {
                p { class: "{theme::text_muted()}", "{party.address}" }
            }
            if !party.email.is_empty() {
                p { class: "{theme::text_muted()}", "{party.email} · {party.phone}" }
            }
        }
    }
}
