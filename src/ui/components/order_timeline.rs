use dioxus::prelude::*;

use crate::{
    domain::{OrderTimeline, StageState},
    ui::theme,
};

fn marker(state: StageState) -> (&'static str, &'static str) {
    match state {
        StageState::Completed => ("✓", "border-emerald-500 bg-emerald-500 text-slate-950"),
        StageState::Active => ("●", "border-sky-400 bg-sky-500/20 text-sky-300"),
        StageState::Pending => ("○", "border-slate-700 bg-slate-900 text-slate-600"),
    }
}

#[component]
pub fn OrderTimelineView(current_step: u8) -> Element {
    let timeline = OrderTimeline::new(current_step);
    let progress = format!("{:.0}%", timeline.progress_pct());

    rsx! {
        section {
            class: "{theme::panel()} p-6",
            div { class: "mb-4 flex items-center justify-between",
                h2 { class: "{theme::section_title()}", "Order Timeline" }
                span { class: "text-xs {theme::text_muted()}", "{progress} complete" }
            }
            ol { class: "space-y-4",
                for (stage, state) in timeline.stages().iter().copied() {
                    li {
                        key: "{stage.step()}",
                        class: "flex items-start gap-3",
                        span {
                            class: "flex h-7 w-7 shrink-0 items-center justify-center rounded-full border text-xs font-bold {marker(state).1}",
                            "{marker(state).0}"
                        }
                        div {
                            p {
                                class: if state == StageState::Pending { "text-sm text-slate-500" } else { "text-sm font-semibold text-slate-100" },
                                "{stage.label()}"
                            }
                            p { class: "text-xs {theme::text_muted()}", "{stage.details()}" }
                        }
                        span { class: "ml-auto text-xs {theme::text_muted()}", "{state.label()}" }
                    }
                }
            }
        }
    }
}
