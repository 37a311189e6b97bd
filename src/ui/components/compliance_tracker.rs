use dioxus::prelude::*;

use crate::{
    domain::ComplianceSnapshot,
    ui::{format, theme},
};

#[component]
pub fn ComplianceTracker(snapshot: ComplianceSnapshot) -> Element {
    let current = snapshot.current_pct();
    let bar_width = format!("{:.1}%", snapshot.progress_pct());
    let (bar_color, verdict) = if snapshot.is_compliant() {
        ("bg-emerald-500", "On track for the recycled-content mandate")
    } else {
        ("bg-amber-500", "Below the recycled-content mandate")
    };
    let shortfall = snapshot.shortfall_kg().map(format::kg_f64);

    rsx! {
        section {
            class: "{theme::panel()} p-6",
            div { class: "flex items-start justify-between gap-4",
                div {
                    h2 { class: "{theme::section_title()}", "PCR Compliance" }
                    p { class: "mt-1 text-sm text-slate-400", "{verdict}" }
                }
                div { class: "text-right",
                    p { class: "text-3xl font-semibold text-slate-100", "{format::pct(current)}" }
                    p { class: "text-xs {theme::text_muted()}", "Required {format::pct(snapshot.required_pct)}" }
                }
            }
            div { class: "mt-4 h-3 w-full overflow-hidden rounded-full bg-slate-800",
                div { class: "h-full rounded-full {bar_color}", style: "width: {bar_width}" }
            }
            dl { class: "mt-4 grid grid-cols-3 gap-4 text-sm",
                div {
                    dt { class: "{theme::text_muted()}", "Total plastic used" }
                    dd { class: "font-semibold", "{format::kg_f64(snapshot.total_used_kg)}" }
                }
                div {
                    dt { class: "{theme::text_muted()}", "Recycled content" }
                    dd { class: "font-semibold", "{format::kg_f64(snapshot.recycled_used_kg)}" }
                }
                div {
                    dt { class: "{theme::text_muted()}", "Shortfall" }
                    dd {
                        class: "font-semibold",
                        if let Some(missing) = shortfall {
                            span { class: "text-amber-300", "{missing}" }
                        } else {
                            span { class: "{theme::accent_text()}", "None" }
                        }
                    }
                }
            }
        }
    }
}
