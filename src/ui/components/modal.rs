use dioxus::prelude::*;

use crate::{domain::WizardStep, ui::theme};

#[component]
pub fn Modal(title: String, subtitle: Option<String>, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-slate-950/80 px-4 backdrop-blur-sm",
            div {
                class: "max-h-[90vh] w-full max-w-2xl overflow-y-auto rounded-2xl border border-slate-800 bg-slate-900 p-6 shadow-2xl",
                div { class: "mb-4 flex items-start justify-between gap-4",
                    div {
                        h2 { class: "text-lg font-semibold text-slate-100", "{title}" }
                        if let Some(sub) = subtitle {
                            p { class: "text-sm text-slate-400", "{sub}" }
                        }
                    }
                    button {
                        class: "text-slate-500 hover:text-slate-200",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                {children}
            }
        }
    }
}

#[component]
pub fn StepIndicator(step: WizardStep) -> Element {
    let steps = [
        (WizardStep::Entry, "Details"),
        (WizardStep::Review, "Review"),
        (WizardStep::Submitted, "Sent"),
    ];
    let current = steps.iter().position(|(s, _)| *s == step).unwrap_or(0);

    rsx! {
        ol { class: "mb-6 flex items-center gap-2 text-xs",
            for (idx, (_, label)) in steps.iter().enumerate() {
                li {
                    key: "{label}",
                    class: if idx <= current {
                        "rounded-full border border-emerald-500/40 bg-emerald-500/10 px-3 py-1 font-semibold text-emerald-300"
                    } else {
                        "rounded-full border border-slate-700 px-3 py-1 text-slate-500"
                    },
                    "{idx + 1}. {label}"
                }
            }
        }
    }
}

#[component]
pub fn ProblemList(problems: Vec<String>) -> Element {
    if problems.is_empty() {
        return rsx! { Fragment {} };
    }
    rsx! {
        ul { class: "mt-4 space-y-1 rounded-lg border border-rose-500/30 bg-rose-500/5 px-4 py-3 text-sm text-rose-200",
            for problem in problems {
                li { key: "{problem}", "{problem}" }
            }
        }
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    value: String,
    placeholder: Option<&'static str>,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            span { class: "{theme::label_class()}", "{label}" }
            input {
                class: "{theme::input_class()}",
                value: "{value}",
                placeholder: placeholder.unwrap_or_default(),
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}
