use dioxus::prelude::*;

use crate::{
    app::{dispatch_event, Route},
    domain::{
        parse_date_input, AppState, Condition, DeliveryError, DeliveryForm, QualityCheck,
        SessionError,
    },
    ui::{
        components::{modal::ProblemList, toast::ToastMessage},
        format,
        pages::order_tracking::MissingOrder,
        theme,
    },
    util::today,
};

/// Messages shown under the form when confirmation is refused.
pub fn delivery_problems(err: &SessionError) -> Vec<String> {
    match err {
        SessionError::Delivery(DeliveryError::Invalid(problems)) => {
            problems.iter().map(ToString::to_string).collect()
        }
        other => vec![other.to_string()],
    }
}

#[component]
pub fn DeliveryPage(order_id: String) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let initial = state.with(|st| st.order(&order_id).map(|order| DeliveryForm::for_order(order, today())));
    let mut form = use_signal(move || initial);
    let mut problems = use_signal(Vec::<String>::new);
    let mut pending_doc = use_signal(String::new);

    let Some(order) = state.with(|st| st.order(&order_id).cloned()) else {
        return rsx! { MissingOrder { order_id } };
    };
    let Some(current) = form() else {
        return rsx! { MissingOrder { order_id } };
    };

    let variance = current.variance(order.quantity_kg);
    let variance_label = variance.map(|v| {
        if v.is_exact() {
            "Matches the ordered quantity".to_string()
        } else {
            format!("{} ({:+.1}%) against {}", format::kg_f64(v.delta_kg), v.pct, format::kg(order.quantity_kg))
        }
    });
    let date_value = current.delivery_date.map(|d| d.to_string()).unwrap_or_default();

    let mut edit = move |apply: &dyn Fn(&mut DeliveryForm)| {
        form.with_mut(|f| {
            if let Some(f) = f.as_mut() {
                apply(f);
            }
        });
    };

    let on_confirm = {
        let order_id = order_id.clone();
        move |_| {
            let Some(current) = form() else { return };
            let outcome = state.with_mut(|st| st.confirm_delivery(&order_id, &current));
            let ui = state.with(|st| st.config.ui.clone());
            match outcome {
                Ok(events) => {
                    problems.set(Vec::new());
                    for event in events {
                        dispatch_event(event, toasts, nav, &ui);
                    }
                }
                Err(err) => {
                    tracing::debug!(%err, "delivery confirmation refused");
                    problems.set(delivery_problems(&err));
                }
            }
        }
    };

    rsx! {
        button {
            class: "{theme::link_class()} mb-4",
            onclick: {
                let order_id = order.id.clone();
                move |_| {
                    nav.push(Route::OrderTracking { order_id: order_id.clone() });
                }
            },
            "← Tracking"
        }
        h1 { class: "text-2xl font-semibold text-slate-100", "Confirm delivery" }
        p { class: "mb-6 text-sm {theme::text_muted()}", "{order.id} · {order.supplier} · {order.material}" }
        div { class: "{theme::panel()} grid gap-4 p-6 sm:grid-cols-2",
            label {
                span { class: "{theme::label_class()}", "Received quantity (kg)" }
                input {
                    class: "{theme::input_class()}",
                    value: "{current.received_quantity}",
                    oninput: move |evt| {
                        let value = evt.value();
                        edit(&|f| f.received_quantity = value.clone());
                    },
                }
                if let Some(label) = variance_label {
                    p { class: "mt-1 text-xs {theme::text_muted()}", "{label}" }
                }
            }
            label {
                span { class: "{theme::label_class()}", "Delivery date" }
                input {
                    class: "{theme::input_class()}",
                    r#type: "date",
                    value: "{date_value}",
                    oninput: move |evt| {
                        let date = parse_date_input(&evt.value());
                        edit(&|f| f.delivery_date = date);
                    },
                }
            }
            label {
                span { class: "{theme::label_class()}", "Received by" }
                input {
                    class: "{theme::input_class()}",
                    value: "{current.received_by}",
                    oninput: move |evt| {
                        let value = evt.value();
                        edit(&|f| f.received_by = value.clone());
                    },
                }
            }
            label {
                span { class: "{theme::label_class()}", "Quality check" }
                select {
                    class: "{theme::input_class()}",
                    onchange: move |evt| {
                        let picked = QualityCheck::ALL.into_iter().find(|q| q.label() == evt.value());
                        if let Some(check) = picked {
                            edit(&|f| f.quality_check = check);
                        }
                    },
                    for check in QualityCheck::ALL {
                        option { key: "{check.label()}", value: check.label(), selected: check == current.quality_check, "{check.label()}" }
                    }
                }
            }
            ConditionPicker {
                label: "Packaging condition",
                value: current.packaging_condition,
                on_pick: move |c: Condition| edit(&|f| f.packaging_condition = c),
            }
            ConditionPicker {
                label: "Material condition",
                value: current.material_condition,
                on_pick: move |c: Condition| edit(&|f| f.material_condition = c),
            }
            label { class: "sm:col-span-2",
                span { class: "{theme::label_class()}", "Notes" }
                textarea {
                    class: "{theme::input_class()}",
                    rows: 2,
                    value: "{current.notes}",
                    oninput: move |evt| {
                        let value = evt.value();
                        edit(&|f| f.notes = value.clone());
                    },
                }
            }
            div { class: "sm:col-span-2",
                label { class: "flex items-center gap-2 text-sm",
                    input {
                        r#type: "checkbox",
                        checked: current.issues_reported,
                        onchange: move |evt| {
                            let checked = evt.checked();
                            edit(&|f| f.issues_reported = checked);
                        },
                    }
                    "Report an issue with this delivery"
                }
                if current.issues_reported {
                    textarea {
                        class: "{theme::input_class()}",
                        rows: 2,
                        placeholder: "Describe the issue",
                        value: "{current.issue_description}",
                        oninput: move |evt| {
                            let value = evt.value();
                            edit(&|f| f.issue_description = value.clone());
                        },
                    }
                }
            }
            div { class: "sm:col-span-2",
                span { class: "{theme::label_class()}", "Documents" }
                div { class: "mt-1 flex gap-2",
                    input {
                        class: "{theme::input_class()} mt-0",
                        placeholder: "e.g. signed-bol.pdf",
                        value: "{pending_doc}",
                        oninput: move |evt| pending_doc.set(evt.value()),
                    }
                    button {
                        class: theme::btn_secondary(),
                        onclick: move |_| {
                            let name = pending_doc().trim().to_string();
                            if !name.is_empty() {
                                edit(&|f| f.attach(name.clone()));
                                pending_doc.set(String::new());
                            }
                        },
                        "Attach"
                    }
                }
                ul { class: "mt-2 space-y-1 text-xs text-slate-300",
                    for doc in current.uploaded_documents.iter() {
                        li { key: "{doc}", "📎 {doc}" }
                    }
                }
            }
        }
        ProblemList { problems: problems() }
        div { class: "mt-6 flex justify-end",
            button { class: theme::btn_primary(), onclick: on_confirm, "Confirm receipt" }
        }
    }
}

#[component]
fn ConditionPicker(label: &'static str, value: Condition, on_pick: EventHandler<Condition>) -> Element {
    rsx! {
        div {
            span { class: "{theme::label_class()}", "{label}" }
            div { class: "mt-2 flex gap-1",
                for condition in Condition::ALL {
                    button {
                        key: "{condition.label()}",
                        class: theme::btn_small(condition == value),
                        onclick: move |_| on_pick.call(condition),
                        "{condition.label()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn invalid_form_lists_each_field() {
        let err = SessionError::Delivery(DeliveryError::Invalid(vec![
            ValidationError::Required("Received by"),
            ValidationError::Required("Issue description"),
        ]));
        assert_eq!(
            delivery_problems(&err),
            vec!["Received by is required".to_string(), "Issue description is required".to_string()]
        );
    }

    #[test]
    fn other_refusals_are_one_line() {
        let err = SessionError::AlreadyDelivered("PO-2024-001".into());
        assert_eq!(delivery_problems(&err), vec!["order PO-2024-001 was already delivered".to_string()]);
    }
}
