use dioxus::prelude::*;

use crate::{app::Route, ui::theme};

#[component]
pub fn NotFoundPage(path: String) -> Element {
    let nav = use_navigator();
    rsx! {
        div { class: "py-20 text-center",
            p { class: "text-6xl font-bold text-slate-700", "404" }
            p { class: "mt-4 text-lg text-slate-300", "Nothing lives at /{path}" }
            button {
                class: "{theme::btn_primary()} mt-6",
                onclick: move |_| {
                    nav.push(Route::Home {});
                },
                "Go home"
            }
        }
    }
}
