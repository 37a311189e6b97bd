use dioxus::prelude::*;

use crate::{
    app::dispatch_event,
    domain::{AppState, Incoterm, Material, PaymentTerms, RfqContext, RfqForm, Wizard, WizardStep},
    ui::{
        components::{
            booking_modal::{problem_messages, step_problems},
            modal::{Modal, ProblemList, StepIndicator, TextField},
            toast::ToastMessage,
        },
        format, theme,
    },
};

fn edit(mut wizard: Signal<Wizard<RfqForm>>, apply: impl FnOnce(&mut RfqForm)) {
    wizard.with_mut(|w| {
        if let Some(form) = w.form_mut() {
            apply(form);
        }
    });
}

/// "$0.05/kg above target" style hint for the review step.
pub fn target_gap_label(gap: f64) -> String {
    if gap.abs() < 0.005 {
        "Matches your target price".to_string()
    } else if gap > 0.0 {
        format!("{} above your target", format::usd_per_kg(gap))
    } else {
        format!("{} below your target", format::usd_per_kg(-gap))
    }
}

#[component]
pub fn RfqModal(
    supplier_id: String,
    supplier_name: String,
    material: Material,
    on_close: EventHandler<()>,
) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let ctx = RfqContext {
        supplier_id,
        supplier_name: supplier_name.clone(),
        material: material.clone(),
    };
    let mut wizard = use_signal({
        let material = material.clone();
        let buyer = state.with(|st| st.buyer());
        move || {
            Wizard::new(RfqForm {
                company_name: buyer.name,
                contact_person: buyer.contact,
                email: buyer.email,
                phone: buyer.phone,
                ..RfqForm::for_material(&material)
            })
        }
    });
    let mut problems = use_signal(Vec::<String>::new);
    let mut reference = use_signal(|| None::<String>);

    let snapshot = wizard();
    let form = snapshot.form().clone();
    let step = snapshot.step();
    let estimate = form.estimate(&material);
    let estimate_label = format::estimate(estimate.map(|quote| quote.total));
    let unit_label = estimate
        .map(|quote| format::usd_per_kg(quote.unit_price))
        .unwrap_or_else(|| "—".to_string());
    let target_label = match form.target_price() {
        Ok(Some(price)) => format::usd_per_kg(price),
        Ok(None) => "Not specified".to_string(),
        Err(_) => "—".to_string(),
    };
    let gap_label = form.gap_to_target(&material).map(target_gap_label);

    let on_continue = {
        let ctx = ctx.clone();
        move |_| problems.set(step_problems(wizard.with_mut(|w| w.continue_to_review(&ctx))))
    };

    let on_submit = {
        let ctx = ctx.clone();
        move |_| match wizard.with_mut(|w| w.submit(&ctx)) {
            Ok(request) => {
                reference.set(Some(request.reference.clone()));
                let event = state.with_mut(|st| st.record_rfq(request));
                let ui = state.with(|st| st.config.ui.clone());
                dispatch_event(event, toasts, nav, &ui);
            }
            Err(err) => problems.set(problem_messages(&err)),
        }
    };

    let mut close = move || {
        wizard.with_mut(|w| w.close());
        on_close.call(());
    };

    rsx! {
        Modal {
            title: "Request for Quotation".to_string(),
            subtitle: Some(format!("{} · {}", supplier_name, material.display_name())),
            on_close: move |_| close(),
            StepIndicator { step }
            match step {
                WizardStep::Entry => rsx! {
                    h3 { class: "mb-2 {theme::section_title()}", "Contact" }
                    div { class: "grid gap-4 sm:grid-cols-2",
                        TextField { label: "Company name", value: form.company_name.clone(), on_input: move |v: String| edit(wizard, |f| f.company_name = v) }
                        TextField { label: "Contact person", value: form.contact_person.clone(), on_input: move |v: String| edit(wizard, |f| f.contact_person = v) }
                        TextField { label: "Email", value: form.email.clone(), placeholder: "buyer@company.com", on_input: move |v: String| edit(wizard, |f| f.email = v) }
                        TextField { label: "Phone", value: form.phone.clone(), on_input: move |v: String| edit(wizard, |f| f.phone = v) }
                    }
                    h3 { class: "mt-6 mb-2 {theme::section_title()}", "Order" }
                    div { class: "grid gap-4 sm:grid-cols-2",
                        TextField { label: "Quantity (kg)", value: form.quantity.clone(), on_input: move |v: String| edit(wizard, |f| f.quantity = v) }
                        TextField { label: "Target price ($/kg)", value: form.target_price.clone(), placeholder: "Optional", on_input: move |v: String| edit(wizard, |f| f.target_price = v) }
                        label {
                            span { class: "{theme::label_class()}", "Incoterm" }
                            select {
                                class: "{theme::input_class()}",
                                value: form.incoterm.code(),
                                onchange: move |evt| {
                                    if let Some(term) = Incoterm::from_code(&evt.value()) {
                                        edit(wizard, |f| f.incoterm = term);
                                    }
                                },
                                for term in Incoterm::ALL {
                                    option { key: "{term.code()}", value: term.code(), selected: term == form.incoterm, "{term.label()}" }
                                }
                            }
                        }
                        label {
                            span { class: "{theme::label_class()}", "Payment terms" }
                            select {
                                class: "{theme::input_class()}",
                                value: form.payment_terms.code(),
                                onchange: move |evt| {
                                    if let Some(terms) = PaymentTerms::from_code(&evt.value()) {
                                        edit(wizard, |f| f.payment_terms = terms);
                                    }
                                },
                                for terms in PaymentTerms::RFQ_OPTIONS {
                                    option { key: "{terms.code()}", value: terms.code(), selected: terms == form.payment_terms, "{terms.label()}" }
                                }
                            }
                        }
                        div { class: "sm:col-span-2",
                            TextField { label: "Delivery location", value: form.delivery_location.clone(), placeholder: "City, State", on_input: move |v: String| edit(wizard, |f| f.delivery_location = v) }
                        }
                    }
                    h3 { class: "mt-6 mb-2 {theme::section_title()}", "Requirements" }
                    div { class: "grid gap-4",
                        TextField { label: "Quality requirements", value: form.quality_requirements.clone(), placeholder: "MFI, contamination, color", on_input: move |v: String| edit(wizard, |f| f.quality_requirements = v) }
                        TextField { label: "Compliance needs", value: form.compliance_needs.clone(), placeholder: "FDA, EFSA, GRS", on_input: move |v: String| edit(wizard, |f| f.compliance_needs = v) }
                        TextField { label: "Additional notes", value: form.additional_notes.clone(), on_input: move |v: String| edit(wizard, |f| f.additional_notes = v) }
                    }
                    div { class: "mt-6 {theme::panel_highlight()} flex items-center justify-between p-4",
                        div {
                            p { class: "{theme::label_class()}", "List price estimate" }
                            p { class: "text-2xl font-semibold text-emerald-300", "{estimate_label}" }
                        }
                        p { class: "text-sm text-slate-400", "{unit_label}" }
                    }
                    ProblemList { problems: problems() }
                    div { class: "mt-6 flex justify-end gap-2",
                        button { class: theme::btn_secondary(), onclick: move |_| close(), "Cancel" }
                        button { class: theme::btn_primary(), onclick: on_continue, "Review RFQ" }
                    }
                },
                WizardStep::Review => rsx! {
                    dl { class: "grid grid-cols-2 gap-3 text-sm",
                        dt { class: "{theme::text_muted()}", "Company" }
                        dd { "{form.company_name}" }
                        dt { class: "{theme::text_muted()}", "Contact" }
                        dd { "{form.contact_person} · {form.email}" }
                        dt { class: "{theme::text_muted()}", "Quantity" }
                        dd { "{form.quantity} kg" }
                        dt { class: "{theme::text_muted()}", "Incoterm" }
                        dd { "{form.incoterm.label()}" }
                        dt { class: "{theme::text_muted()}", "Payment terms" }
                        dd { "{form.payment_terms.label()}" }
                        dt { class: "{theme::text_muted()}", "Delivery location" }
                        dd { "{form.delivery_location}" }
                        dt { class: "{theme::text_muted()}", "Tier price" }
                        dd { "{unit_label}" }
                        dt { class: "{theme::text_muted()}", "Target price" }
                        dd { "{target_label}" }
                        dt { class: "{theme::text_muted()}", "List price estimate" }
                        dd { class: "font-semibold text-emerald-300", "{estimate_label}" }
                    }
                    if let Some(gap) = gap_label.clone() {
                        p { class: "mt-4 text-sm {theme::accent_text()}", "{gap}" }
                    }
                    ProblemList { problems: problems() }
                    div { class: "mt-6 flex justify-end gap-2",
                        button {
                            class: theme::btn_secondary(),
                            onclick: move |_| problems.set(step_problems(wizard.with_mut(|w| w.back()))),
                            "Back"
                        }
                        button { class: theme::btn_primary(), onclick: on_submit, "Send RFQ" }
                    }
                },
                WizardStep::Submitted => rsx! {
                    div { class: "py-8 text-center",
                        p { class: "text-4xl", "📨" }
                        p { class: "mt-3 text-lg font-semibold", "RFQ sent to {supplier_name}" }
                        if let Some(reference) = reference() {
                            p { class: "mt-1 font-mono text-sm {theme::text_muted()}", "Reference {reference}" }
                        }
                        p { class: "mt-2 text-sm text-slate-400", "Expect a response within 24-48 hours." }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_reads_against_target() {
        assert_eq!(target_gap_label(0.05), "$0.05/kg above your target");
        assert_eq!(target_gap_label(-0.10), "$0.10/kg below your target");
        assert_eq!(target_gap_label(0.001), "Matches your target price");
    }

    #[test]
    fn back_reports_a_misplaced_step() {
        let mut wizard = Wizard::new(RfqForm::default());
        assert_eq!(
            step_problems(wizard.back()),
            vec!["cannot go back from the Entry step".to_string()]
        );
        assert!(step_problems(Ok(())).is_empty());
    }
}
