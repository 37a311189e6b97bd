use dioxus::prelude::*;

use crate::{app::Route, domain::AppState, ui::theme};

#[component]
pub fn HomePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();

    let (supplier_count, verified_count, material_count) = state.with(|st| {
        let suppliers = &st.catalog.suppliers;
        (
            suppliers.len(),
            suppliers.iter().filter(|s| s.verified).count(),
            suppliers.iter().map(|s| s.materials.len()).sum::<usize>(),
        )
    });

    rsx! {
        section { class: "py-12 text-center",
            p { class: "text-xs font-semibold uppercase tracking-[0.3em] {theme::accent_text()}", "Post-consumer recycled resin" }
            h1 { class: "mt-4 text-4xl font-bold tracking-tight text-slate-100 sm:text-5xl",
                "Source verified PCR at volume pricing"
            }
            p { class: "mx-auto mt-4 max-w-2xl text-slate-400",
                "Compare verified suppliers, see tiered bulk prices before you ask, and track every order through to a recycled-content certificate."
            }
            div { class: "mt-8 flex justify-center gap-3",
                button {
                    class: theme::btn_primary(),
                    onclick: move |_| {
                        nav.push(Route::Marketplace {});
                    },
                    "Browse marketplace"
                }
                button {
                    class: theme::btn_secondary(),
                    onclick: move |_| {
                        nav.push(Route::Dashboard {});
                    },
                    "Open dashboard"
                }
            }
        }
        section { class: "grid gap-4 sm:grid-cols-3",
            Stat { value: supplier_count.to_string(), label: "Suppliers" }
            Stat { value: verified_count.to_string(), label: "Verified" }
            Stat { value: material_count.to_string(), label: "Material listings" }
        }
        section { class: "mt-10 grid gap-4 sm:grid-cols-3",
            Feature { icon: "📊", title: "Tiered pricing", text: "Unit prices drop at published volume breaks; the estimate updates as you type." }
            Feature { icon: "🧾", title: "RFQs and quotes", text: "Request quotes with your incoterms and compare offers side by side." }
            Feature { icon: "♻️", title: "Compliance", text: "Every delivery counts toward your recycled-content target." }
        }
    }
}

#[component]
fn Stat(value: String, label: &'static str) -> Element {
    rsx! {
        div { class: "{theme::panel()} p-6 text-center",
            p { class: "text-3xl font-semibold text-emerald-300", "{value}" }
            p { class: "mt-1 {theme::label_class()}", "{label}" }
        }
    }
}

#[component]
fn Feature(icon: &'static str, title: &'static str, text: &'static str) -> Element {
    rsx! {
        div { class: "{theme::panel()} p-5",
            p { class: "text-2xl", "{icon}" }
            h3 { class: "mt-2 font-semibold text-slate-100", "{title}" }
            p { class: "mt-1 text-sm text-slate-400", "{text}" }
        }
    }
}
