use dioxus::prelude::*;

use crate::{config::BuyerConfig, ui::theme};

#[component]
pub fn CompanyProfile(buyer: BuyerConfig) -> Element {
    let facts = buyer.profile_facts();
    rsx! {
        section { class: "{theme::panel()} p-6",
            h2 { class: "{theme::section_title()}", "Company profile" }
            div { class: "mt-4 flex items-start justify-between gap-3",
                div {
                    p { class: "text-lg font-semibold text-slate-100", "{buyer.name}" }
                    if !buyer.registration.is_empty() {
                        p { class: "text-xs {theme::text_muted()}", "Reg. No: {buyer.registration}" }
                    }
                }
                if buyer.verified {
                    span { class: "rounded-full border border-emerald-500/40 bg-emerald-500/10 px-2 py-0.5 text-xs font-semibold text-emerald-300",
                        "Verified"
                    }
                }
            }
            dl { class: "mt-4 grid grid-cols-2 gap-4 text-sm",
                for (label, value) in facts {
                    div { key: "{label}",
                        dt { class: "{theme::label_class()}", "{label}" }
                        dd { class: "mt-1 text-slate-200", "{value}" }
                    }
                }
            }
            if !buyer.certifications.is_empty() {
                h3 { class: "mt-4 {theme::label_class()}", "Certifications & compliance" }
                div { class: "mt-2 flex flex-wrap gap-2",
                    for cert in buyer.certifications.iter() {
                        span { key: "{cert}", class: "rounded border border-slate-700 px-2 py-0.5 text-xs text-slate-300", "{cert}" }
                    }
                }
            }
        }
    }
}
