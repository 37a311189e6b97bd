use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::Supplier,
    ui::{components::status_badge::VerificationBadge, format, theme},
};

#[component]
pub fn SupplierCard(supplier: Supplier) -> Element {
    let nav = use_navigator();
    let kinds = supplier
        .material_kinds()
        .iter()
        .map(|kind| kind.label())
        .collect::<Vec<_>>()
        .join(" · ");
    let price_range = supplier
        .price_range()
        .map(|(low, high)| format!("{} – {}", format::usd_per_kg(low), format::usd_per_kg(high)))
        .unwrap_or_else(|| "—".to_string());
    let min_order = supplier.min_order().map(format::kg).unwrap_or_else(|| "—".to_string());
    let id = supplier.id.clone();

    rsx! {
        article {
            class: "{theme::panel()} flex flex-col gap-3 p-5 transition hover:border-emerald-700/60",
            div { class: "flex items-start justify-between gap-3",
                div {
                    h3 { class: "text-lg font-semibold text-slate-100",
                        "{supplier.name}"
                        if supplier.verified {
                            span { class: "ml-2 text-xs {theme::accent_text()}", "✔ Verified" }
                        }
                    }
                    p { class: "text-sm {theme::text_muted()}", "📍 {supplier.location}" }
                }
                VerificationBadge { level: supplier.ai_verification }
            }
            p { class: "text-sm text-slate-300", "{kinds}" }
            dl { class: "grid grid-cols-3 gap-2 text-xs",
                div {
                    dt { class: "{theme::text_muted()}", "Price" }
                    dd { class: "font-semibold text-slate-200", "{price_range}" }
                }
                div {
                    dt { class: "{theme::text_muted()}", "Min. order" }
                    dd { class: "font-semibold text-slate-200", "{min_order}" }
                }
                div {
                    dt { class: "{theme::text_muted()}", "Rating" }
                    dd { class: "font-semibold text-slate-200", "★ {supplier.rating:.1} ({supplier.review_count})" }
                }
            }
            div { class: "flex flex-wrap gap-1",
                for cert in supplier.certifications.iter() {
                    span {
                        key: "{cert.name}",
                        class: "rounded border border-slate-700 px-2 py-0.5 text-[11px] text-slate-400",
                        "{cert.name}"
                    }
                }
            }
            button {
                class: "{theme::btn_primary()} mt-auto",
                onclick: move |_| {
                    nav.push(Route::SupplierDetail { id: id.clone() });
                },
                "View supplier"
            }
        }
    }
}
