use dioxus::prelude::*;

use crate::{
    domain::{filter_suppliers, AppState, MarketplaceFilter, MaterialKind, Region},
    ui::{components::supplier_card::SupplierCard, theme},
};

#[component]
pub fn MarketplacePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let mut filter = use_signal(MarketplaceFilter::default);

    let current = filter();
    let suppliers = state.with(|st| {
        filter_suppliers(&st.catalog, &current)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });
    let total = state.with(|st| st.catalog.suppliers.len());
    let count = suppliers.len();

    rsx! {
        div { class: "mb-6 flex items-end justify-between gap-4",
            div {
                h1 { class: "text-2xl font-semibold text-slate-100", "Marketplace" }
                p { class: "text-sm {theme::text_muted()}", "Showing {count} of {total} suppliers" }
            }
            if !current.is_empty() {
                button {
                    class: theme::btn_secondary(),
                    onclick: move |_| filter.set(MarketplaceFilter::default()),
                    "Clear filters"
                }
            }
        }
        div { class: "{theme::panel()} mb-6 grid gap-4 p-4 sm:grid-cols-3",
            label {
                span { class: "{theme::label_class()}", "Search" }
                input {
                    class: "{theme::input_class()}",
                    placeholder: "Supplier or location",
                    value: "{current.search}",
                    oninput: move |evt| filter.with_mut(|f| f.search = evt.value()),
                }
            }
            label {
                span { class: "{theme::label_class()}", "Material" }
                select {
                    class: "{theme::input_class()}",
                    onchange: move |evt| filter.with_mut(|f| f.material_kind = MaterialKind::from_label(&evt.value())),
                    option { value: "all", selected: current.material_kind.is_none(), "All materials" }
                    for kind in MaterialKind::ALL {
                        option { key: "{kind.label()}", value: kind.label(), selected: current.material_kind == Some(kind), "{kind.label()}" }
                    }
                }
            }
            label {
                span { class: "{theme::label_class()}", "Region" }
                select {
                    class: "{theme::input_class()}",
                    onchange: move |evt| filter.with_mut(|f| f.region = Region::from_key(&evt.value())),
                    option { value: "all", selected: current.region.is_none(), "All regions" }
                    for region in Region::ALL {
                        option { key: "{region.key()}", value: region.key(), selected: current.region == Some(region), "{region.label()}" }
                    }
                }
            }
        }
        if suppliers.is_empty() {
            div { class: "{theme::panel()} p-10 text-center text-slate-400",
                "No suppliers match these filters."
            }
        } else {
            div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                for supplier in suppliers {
                    SupplierCard { key: "{supplier.id}", supplier }
                }
            }
        }
    }
}
