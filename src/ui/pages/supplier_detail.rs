use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{parse_quantity, AppState, Material, Supplier},
    ui::{
        components::{
            booking_modal::BookingModal, rfq_modal::RfqModal, status_badge::VerificationBadge,
            tier_table::TierTable,
        },
        format, theme,
    },
};

#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Book(Material),
    Quote(Material),
}

#[component]
pub fn SupplierDetailPage(id: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();
    let mut dialog = use_signal(|| None::<Dialog>);
    let mut preview_qty = use_signal(String::new);

    let Some(supplier) = state.with(|st| st.catalog.supplier(&id).cloned()) else {
        return rsx! {
            div { class: "{theme::panel()} p-10 text-center",
                p { class: "text-lg font-semibold", "Supplier not found" }
                p { class: "mt-1 text-sm {theme::text_muted()}", "No supplier with id \"{id}\"." }
                button {
                    class: "{theme::btn_secondary()} mt-4",
                    onclick: move |_| {
                        nav.push(Route::Marketplace {});
                    },
                    "Back to marketplace"
                }
            }
        };
    };

    let preview = parse_quantity(&preview_qty()).ok();

    rsx! {
        button {
            class: "{theme::link_class()} mb-4",
            onclick: move |_| {
                nav.push(Route::Marketplace {});
            },
            "← Marketplace"
        }
        SupplierHeader { supplier: supplier.clone() }
        div { class: "mt-6 grid gap-6 lg:grid-cols-[2fr_1fr]",
            div { class: "space-y-6",
                div { class: "flex items-center justify-between",
                    h2 { class: "{theme::section_title()}", "Materials" }
                    label { class: "flex items-center gap-2 text-xs {theme::text_muted()}",
                        "Preview quantity"
                        input {
                            class: "w-32 rounded-lg border border-slate-700 bg-slate-950 px-2 py-1 text-sm text-slate-100",
                            placeholder: "kg",
                            value: "{preview_qty}",
                            oninput: move |evt| preview_qty.set(evt.value()),
                        }
                    }
                }
                for material in supplier.materials.iter().cloned() {
                    MaterialPanel {
                        key: "{material.id}",
                        material: material.clone(),
                        preview,
                        on_book: move |m: Material| dialog.set(Some(Dialog::Book(m))),
                        on_quote: move |m: Material| dialog.set(Some(Dialog::Quote(m))),
                    }
                }
            }
            aside { class: "space-y-6",
                section { class: "{theme::panel()} p-5",
                    h2 { class: "{theme::section_title()}", "Logistics" }
                    dl { class: "mt-3 space-y-2 text-sm",
                        div { class: "flex justify-between",
                            dt { class: "{theme::text_muted()}", "Pickup" }
                            dd { if supplier.logistics.pickup { "Available" } else { "—" } }
                        }
                        div { class: "flex justify-between",
                            dt { class: "{theme::text_muted()}", "Delivery" }
                            dd { if supplier.logistics.delivery { "Available" } else { "—" } }
                        }
                        div { class: "flex justify-between",
                            dt { class: "{theme::text_muted()}", "Freight" }
                            dd { "{supplier.logistics.estimated_freight}" }
                        }
                        div { class: "flex justify-between",
                            dt { class: "{theme::text_muted()}", "Lead time" }
                            dd { "{supplier.logistics.lead_time}" }
                        }
                    }
                }
                section { class: "{theme::panel()} p-5",
                    h2 { class: "{theme::section_title()}", "Certifications" }
                    ul { class: "mt-3 space-y-1 text-sm",
                        for cert in supplier.certifications.iter() {
                            li { key: "{cert.name}", class: "flex justify-between",
                                span { "{cert.name}" }
                                if cert.verified {
                                    span { class: "{theme::accent_text()}", "Verified" }
                                } else {
                                    span { class: "{theme::text_muted()}", "Pending" }
                                }
                            }
                        }
                    }
                }
                if !supplier.contact.name.is_empty() {
                    section { class: "{theme::panel()} p-5 text-sm",
                        h2 { class: "{theme::section_title()}", "Contact" }
                        p { class: "mt-3 font-semibold", "{supplier.contact.contact}" }
                        p { class: "{theme::text_muted()}", "{supplier.contact.email}" }
                        p { class: "{theme::text_muted()}", "{supplier.contact.phone}" }
                    }
                }
                section { class: "{theme::panel()} p-5",
                    h2 { class: "{theme::section_title()}", "Reviews" }
                    if supplier.reviews.is_empty() {
                        p { class: "mt-3 text-sm {theme::text_muted()}", "No reviews yet." }
                    }
                    for review in supplier.reviews.iter() {
                        div { key: "{review.author}{review.date}", class: "mt-3 border-t border-slate-800 pt-3 text-sm",
                            p { class: "font-semibold", "{review.author} · {\"★\".repeat(review.rating as usize)}" }
                            p { class: "text-slate-300", "{review.comment}" }
                            p { class: "text-xs {theme::text_muted()}", "{format::date(review.date)}" }
                        }
                    }
                }
            }
        }
        match dialog() {
            Some(Dialog::Book(material)) => rsx! {
                BookingModal {
                    supplier_id: supplier.id.clone(),
                    supplier_name: supplier.name.clone(),
                    material,
                    on_close: move |_| dialog.set(None),
                }
            },
            Some(Dialog::Quote(material)) => rsx! {
                RfqModal {
                    supplier_id: supplier.id.clone(),
                    supplier_name: supplier.name.clone(),
                    material,
                    on_close: move |_| dialog.set(None),
                }
            },
            None => rsx! {},
        }
    }
}

#[component]
fn SupplierHeader(supplier: Supplier) -> Element {
    rsx! {
        header { class: "{theme::panel()} flex flex-wrap items-start justify-between gap-4 p-6",
            div {
                h1 { class: "text-2xl font-semibold text-slate-100",
                    "{supplier.name}"
                    if supplier.verified {
                        span { class: "ml-2 text-sm {theme::accent_text()}", "✔ Verified" }
                    }
                }
                p { class: "mt-1 text-sm {theme::text_muted()}", "📍 {supplier.location} · {supplier.region.label()}" }
                p { class: "mt-1 text-sm text-slate-300", "★ {supplier.rating:.1} from {supplier.review_count} reviews" }
            }
            VerificationBadge { level: supplier.ai_verification }
        }
    }
}

#[component]
fn MaterialPanel(
    material: Material,
    preview: Option<f64>,
    on_book: EventHandler<Material>,
    on_quote: EventHandler<Material>,
) -> Element {
    let book_material = material.clone();
    let quote_material = material.clone();

    rsx! {
        section { class: "{theme::panel()} p-5",
            div { class: "flex flex-wrap items-start justify-between gap-3",
                div {
                    h3 { class: "text-lg font-semibold text-slate-100", "{material.display_name()}" }
                    p { class: "text-sm {theme::text_muted()}",
                        "{format::kg(material.available_kg)} available · MOQ {format::kg(material.moq)}"
                    }
                }
                p { class: "text-xl font-semibold text-emerald-300", "{format::usd_per_kg(material.base_price())}" }
            }
            dl { class: "mt-4 grid grid-cols-2 gap-3 text-xs sm:grid-cols-4",
                Spec { label: "Color", value: material.color.clone() }
                Spec { label: "MFI", value: material.mfi.clone() }
                Spec { label: "Contamination", value: material.contamination.clone() }
                Spec { label: "Pellet size", value: material.pellet_size.clone() }
            }
            div { class: "mt-4",
                TierTable { schedule: material.pricing.clone(), quantity: preview }
            }
            div { class: "mt-4 flex justify-end gap-2",
                button {
                    class: theme::btn_secondary(),
                    onclick: move |_| on_quote.call(quote_material.clone()),
                    "Request quote"
                }
                button {
                    class: theme::btn_primary(),
                    onclick: move |_| on_book.call(book_material.clone()),
                    "Book now"
                }
            }
        }
    }
}

#[component]
fn Spec(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            dt { class: "{theme::text_muted()}", "{label}" }
            dd { class: "font-semibold text-slate-200", "{value}" }
        }
    }
}
