use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::AppState,
    ui::{format, theme},
    util::version::{version_label, APP_NAME},
};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let buyer = state.with(|st| st.config.buyer.name.clone());
    let compliance = state.with(|st| st.compliance());
    let compliance_class = if compliance.is_compliant() {
        theme::accent_text()
    } else {
        "text-amber-300"
    };

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
                div { class: "mx-auto grid max-w-6xl grid-cols-[1fr_auto_1fr] items-center gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "♻️" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight text-emerald-200", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500", "{buyer}" }
                        }
                    }
                    nav { class: "flex gap-2 text-sm justify-center",
                        NavButton { active: matches!(current_route, Route::Home {}), onclick: move |_| { nav.push(Route::Home {}); }, label: "Home" }
                        NavButton { active: matches!(current_route, Route::Marketplace {} | Route::SupplierDetail { .. }), onclick: move |_| { nav.push(Route::Marketplace {}); }, label: "Marketplace" }
                        NavButton {
                            active: !matches!(current_route, Route::Home {} | Route::Marketplace {} | Route::SupplierDetail { .. } | Route::NotFound { .. }),
                            onclick: move |_| { nav.push(Route::Dashboard {}); },
                            label: "Dashboard",
                        }
                    }
                    div { class: "text-right text-xs",
                        p { class: "text-slate-500", "PCR content" }
                        p { class: "font-semibold {compliance_class}", "{format::pct(compliance.current_pct())}" }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
            footer { class: "border-t border-slate-900/60 px-6 py-4 text-center text-xs text-slate-600",
                "{APP_NAME} {version_label()}"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "min-w-[5.5rem] rounded-lg border border-emerald-500/60 bg-emerald-500/15 px-4 py-2 font-semibold text-emerald-300"
    } else {
        "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
