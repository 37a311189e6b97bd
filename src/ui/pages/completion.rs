use dioxus::prelude::*;

use crate::{
    app::{dispatch_event, Route},
    domain::{AppState, MarketEvent},
    ui::{components::toast::ToastMessage, format, theme},
};

#[component]
pub fn CompletionPage(order_id: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let certificate = state.with(|st| st.certificate(&order_id));
    let receipt = state.with(|st| st.receipt(&order_id));

    let cert = match certificate {
        Ok(cert) => cert,
        Err(err) => {
            return rsx! {
                div { class: "{theme::panel()} p-10 text-center",
                    p { class: "text-lg font-semibold", "No certificate yet" }
                    p { class: "mt-1 text-sm {theme::text_muted()}", "{err}" }
                    button {
                        class: "{theme::btn_secondary()} mt-4",
                        onclick: {
                            let order_id = order_id.clone();
                            move |_| {
                                nav.push(Route::OrderTracking { order_id: order_id.clone() });
                            }
                        },
                        "Back to tracking"
                    }
                }
            };
        }
    };

    let download = {
        let name = format!("{}.pdf", cert.number);
        move |_| {
            let ui = state.with(|st| st.config.ui.clone());
            dispatch_event(MarketEvent::DocumentRequested { name: name.clone() }, toasts, nav, &ui);
        }
    };
    let certifications = if cert.certifications.is_empty() {
        "—".to_string()
    } else {
        cert.certifications.join(", ")
    };

    rsx! {
        div { class: "mx-auto max-w-3xl",
            div { class: "mb-6 text-center",
                p { class: "text-5xl", "🏅" }
                h1 { class: "mt-3 text-2xl font-semibold text-slate-100", "Order complete" }
                p { class: "text-sm {theme::text_muted()}", "Recycled content has been added to your compliance record." }
            }
            section { class: "{theme::panel_highlight()} p-8",
                div { class: "flex items-start justify-between",
                    div {
                        h2 { class: "{theme::section_title()}", "Certificate of Recycled Content" }
                        p { class: "mt-1 font-mono text-sm {theme::accent_text()}", "{cert.number}" }
                    }
                    p { class: "text-sm {theme::text_muted()}", "{format::date(cert.completion_date)}" }
                }
                dl { class: "mt-6 grid grid-cols-2 gap-4 text-sm",
                    div {
                        dt { class: "{theme::text_muted()}", "Buyer" }
                        dd { class: "font-semibold", "{cert.buyer}" }
                    }
                    div {
                        dt { class: "{theme::text_muted()}", "Supplier" }
                        dd { class: "font-semibold", "{cert.supplier}" }
                    }
                    div {
                        dt { class: "{theme::text_muted()}", "Material" }
                        dd { "{cert.material}" }
                    }
                    div {
                        dt { class: "{theme::text_muted()}", "Quantity received" }
                        dd { "{format::kg_f64(cert.quantity_kg)}" }
                    }
                    div {
                        dt { class: "{theme::text_muted()}", "Recycled content" }
                        dd { class: "text-emerald-300", "{format::pct(cert.recycled_pct)} · {format::kg_f64(cert.recycled_kg)}" }
                    }
                    div {
                        dt { class: "{theme::text_muted()}", "Certifications" }
                        dd { "{certifications}" }
                    }
                }
                if let Some(receipt) = receipt {
                    div { class: "mt-6 border-t border-emerald-800/40 pt-4 text-xs {theme::text_muted()}",
                        p { "Received by {receipt.received_by} · QC {receipt.quality_check.label()}" }
                        if let Some(issue) = receipt.problem_summary() {
                            p { class: "mt-1 text-amber-300", "Reported: {issue}" }
                        }
                    }
                }
            }
            div { class: "mt-6 flex justify-center gap-2",
                button { class: theme::btn_secondary(), onclick: download, "Download certificate" }
                button {
                    class: theme::btn_primary(),
                    onclick: move |_| {
                        nav.push(Route::Dashboard {});
                    },
                    "Back to dashboard"
                }
            }
        }
    }
}
