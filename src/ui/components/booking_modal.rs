use dioxus::prelude::*;

use crate::{
    app::dispatch_event,
    domain::{
        parse_date_input, AppState, BookingContext, BookingForm, DeliveryMethod, Material, Wizard,
        WizardError, WizardStep,
    },
    ui::{
        components::{
            modal::{Modal, ProblemList, StepIndicator},
            toast::ToastMessage,
        },
        format, theme,
    },
    util::today,
};

/// Problems to list under the form after a rejected step.
pub fn problem_messages(err: &WizardError) -> Vec<String> {
    match err {
        WizardError::Invalid(problems) => problems.iter().map(ToString::to_string).collect(),
        other => vec![other.to_string()],
    }
}

/// Problem list after a step change; empty when the step went through.
pub fn step_problems(outcome: Result<(), WizardError>) -> Vec<String> {
    outcome.err().map(|err| problem_messages(&err)).unwrap_or_default()
}

#[component]
pub fn BookingModal(
    supplier_id: String,
    supplier_name: String,
    material: Material,
    on_close: EventHandler<()>,
) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let ctx = BookingContext {
        supplier_id,
        supplier_name: supplier_name.clone(),
        material: material.clone(),
        today: today(),
    };
    let mut wizard = use_signal({
        let material = material.clone();
        move || Wizard::new(BookingForm::for_material(&material))
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
    let savings = estimate.filter(|quote| quote.savings > 0.0).map(|quote| format::usd(quote.savings));
    let min_date = ctx
        .today
        .next_day()
        .map(|day| day.to_string())
        .unwrap_or_default();
    let date_value = form.preferred_date.map(|day| day.to_string()).unwrap_or_default();
    let date_label = form.preferred_date.map(format::date).unwrap_or_else(|| "—".to_string());

    let on_continue = {
        let ctx = ctx.clone();
        move |_| problems.set(step_problems(wizard.with_mut(|w| w.continue_to_review(&ctx))))
    };

    let on_submit = {
        let ctx = ctx.clone();
        move |_| match wizard.with_mut(|w| w.submit(&ctx)) {
            Ok(request) => {
                reference.set(Some(request.reference.clone()));
                let event = state.with_mut(|st| st.record_booking(request));
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
            title: format!("Book {}", material.display_name()),
            subtitle: Some(supplier_name.clone()),
            on_close: move |_| close(),
            StepIndicator { step }
            match step {
                WizardStep::Entry => rsx! {
                    div { class: "grid gap-4 sm:grid-cols-2",
                        label {
                            span { class: "{theme::label_class()}", "Quantity (kg)" }
                            input {
                                class: "{theme::input_class()}",
                                value: "{form.quantity}",
                                oninput: move |evt| wizard.with_mut(|w| {
                                    if let Some(form) = w.form_mut() {
                                        form.quantity = evt.value();
                                    }
                                }),
                            }
                            p { class: "mt-1 text-xs {theme::text_muted()}", "Minimum order {format::kg(material.moq)}" }
                        }
                        label {
                            span { class: "{theme::label_class()}", "Preferred date" }
                            input {
                                class: "{theme::input_class()}",
                                r#type: "date",
                                min: "{min_date}",
                                value: "{date_value}",
                                oninput: move |evt| wizard.with_mut(|w| {
                                    if let Some(form) = w.form_mut() {
                                        form.preferred_date = parse_date_input(&evt.value());
                                    }
                                }),
                            }
                        }
                        div { class: "sm:col-span-2",
                            span { class: "{theme::label_class()}", "Delivery method" }
                            div { class: "mt-2 flex gap-2",
                                for method in [DeliveryMethod::Delivery, DeliveryMethod::Pickup] {
                                    button {
                                        key: "{method.label()}",
                                        class: theme::btn_small(form.delivery_method == method),
                                        onclick: move |_| wizard.with_mut(|w| {
                                            if let Some(form) = w.form_mut() {
                                                form.delivery_method = method;
                                            }
                                        }),
                                        "{method.label()}"
                                    }
                                }
                            }
                        }
                        label { class: "sm:col-span-2",
                            span { class: "{theme::label_class()}", "Notes" }
                            textarea {
                                class: "{theme::input_class()}",
                                rows: 3,
                                value: "{form.notes}",
                                oninput: move |evt| wizard.with_mut(|w| {
                                    if let Some(form) = w.form_mut() {
                                        form.notes = evt.value();
                                    }
                                }),
                            }
                        }
                    }
                    div { class: "mt-6 {theme::panel_highlight()} flex items-center justify-between p-4",
                        div {
                            p { class: "{theme::label_class()}", "Estimated total" }
                            p { class: "text-2xl font-semibold text-emerald-300", "{estimate_label}" }
                        }
                        div { class: "text-right text-sm text-slate-400",
                            p { "{unit_label}" }
                            if let Some(saved) = savings.clone() {
                                p { class: "{theme::accent_text()}", "You save {saved}" }
                            }
                        }
                    }
                    ProblemList { problems: problems() }
                    div { class: "mt-6 flex justify-end gap-2",
                        button { class: theme::btn_secondary(), onclick: move |_| close(), "Cancel" }
                        button { class: theme::btn_primary(), onclick: on_continue, "Review booking" }
                    }
                },
                WizardStep::Review => rsx! {
                    dl { class: "grid grid-cols-2 gap-3 text-sm",
                        dt { class: "{theme::text_muted()}", "Supplier" }
                        dd { "{supplier_name}" }
                        dt { class: "{theme::text_muted()}", "Material" }
                        dd { "{material.display_name()}" }
                        dt { class: "{theme::text_muted()}", "Quantity" }
                        dd { "{form.quantity} kg" }
                        dt { class: "{theme::text_muted()}", "Unit price" }
                        dd { "{unit_label}" }
                        dt { class: "{theme::text_muted()}", "Delivery method" }
                        dd { "{form.delivery_method.label()}" }
                        dt { class: "{theme::text_muted()}", "Preferred date" }
                        dd { "{date_label}" }
                        dt { class: "{theme::text_muted()}", "Estimated total" }
                        dd { class: "font-semibold text-emerald-300", "{estimate_label}" }
                    }
                    ProblemList { problems: problems() }
                    div { class: "mt-6 flex justify-end gap-2",
                        button {
                            class: theme::btn_secondary(),
                            onclick: move |_| problems.set(step_problems(wizard.with_mut(|w| w.back()))),
                            "Back"
                        }
                        button { class: theme::btn_primary(), onclick: on_submit, "Submit booking" }
                    }
                },
                WizardStep::Submitted => rsx! {
                    div { class: "py-8 text-center",
                        p { class: "text-4xl", "✅" }
                        p { class: "mt-3 text-lg font-semibold", "Booking request sent" }
                        if let Some(reference) = reference() {
                            p { class: "mt-1 font-mono text-sm {theme::text_muted()}", "Reference {reference}" }
                        }
                        p { class: "mt-2 text-sm text-slate-400", "Redirecting to your dashboard…" }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{QuantityError, ValidationError};

    #[test]
    fn invalid_steps_list_every_problem() {
        let err = WizardError::Invalid(vec![
            ValidationError::Quantity(QuantityError::NotNumeric("abc".into())),
            ValidationError::DateMissing,
        ]);
        let messages = problem_messages(&err);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], "Select a preferred date");
    }

    #[test]
    fn wrong_step_is_a_single_message() {
        let err = WizardError::WrongStep {
            action: "submit",
            step: WizardStep::Entry,
        };
        assert_eq!(problem_messages(&err), vec!["cannot submit from the Entry step".to_string()]);
    }
}
