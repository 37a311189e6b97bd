use dioxus::prelude::*;

use crate::{
    app::{dispatch_event, Route},
    domain::{AppState, Quote, QuoteDecision, QuoteHighlights},
    ui::{
        components::{
            status_badge::QuoteStatusBadge,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        format, theme,
    },
};

/// Badges earned by the quote at `idx`.
pub fn badges_for(highlights: &QuoteHighlights, idx: usize) -> Vec<&'static str> {
    [
        (highlights.lowest_total, "Best total"),
        (highlights.lowest_unit_price, "Lowest price/kg"),
        (highlights.fastest, "Fastest"),
        (highlights.best_rated, "Top rated"),
        (highlights.most_certified, "Most certified"),
    ]
    .into_iter()
    .filter(|(winner, _)| *winner == Some(idx))
    .map(|(_, label)| label)
    .collect()
}

#[component]
pub fn QuoteComparisonPage(rfq_id: String) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let Some(board) = state.with(|st| st.quote_board(&rfq_id)) else {
        return rsx! {
            div { class: "{theme::panel()} p-10 text-center",
                p { class: "text-lg font-semibold", "No quotes for {rfq_id}" }
                button {
                    class: "{theme::btn_secondary()} mt-4",
                    onclick: move |_| {
                        nav.push(Route::Dashboard {});
                    },
                    "Back to dashboard"
                }
            }
        };
    };
    let rfq = state.with(|st| st.catalog.rfq(&rfq_id).cloned());
    let highlights = board.highlights();
    let quantity = board.quantity_kg();
    let locked = board.accepted().is_some();

    let decide = {
        let rfq_id = rfq_id.clone();
        move |quote_id: String, decision: QuoteDecision| {
            let outcome = state.with_mut(|st| st.decide_quote(&rfq_id, &quote_id, decision));
            let ui = state.with(|st| st.config.ui.clone());
            match outcome {
                Ok(event) => dispatch_event(event, toasts, nav, &ui),
                Err(err) => {
                    tracing::debug!(%err, "quote decision refused");
                    push_toast(toasts, ToastMessage::new(ToastKind::Error, err.to_string()), ui.toast_limit);
                }
            }
        }
    };

    rsx! {
        button {
            class: "{theme::link_class()} mb-4",
            onclick: move |_| {
                nav.push(Route::Dashboard {});
            },
            "← Dashboard"
        }
        div { class: "mb-6",
            h1 { class: "text-2xl font-semibold text-slate-100", "Compare quotes" }
            p { class: "text-sm {theme::text_muted()}",
                if let Some(rfq) = rfq {
                    "{rfq.id} · {rfq.material} · {format::kg(quantity)}"
                } else {
                    "{rfq_id} · {format::kg(quantity)}"
                }
            }
        }
        div { class: "grid gap-4 lg:grid-cols-3",
            for (idx, quote) in board.quotes().iter().cloned().enumerate() {
                QuoteCard {
                    key: "{quote.id}",
                    badges: badges_for(&highlights, idx).into_iter().map(str::to_string).collect::<Vec<_>>(),
                    quantity,
                    locked,
                    on_decide: {
                        let mut decide = decide.clone();
                        let quote_id = quote.id.clone();
                        move |decision: QuoteDecision| decide(quote_id.clone(), decision)
                    },
                    quote: quote.clone(),
                }
            }
        }
    }
}

#[component]
fn QuoteCard(
    quote: Quote,
    badges: Vec<String>,
    quantity: u64,
    locked: bool,
    on_decide: EventHandler<QuoteDecision>,
) -> Element {
    let open = !quote.status.is_final() && !locked;
    let class = if badges.is_empty() { theme::panel() } else { theme::panel_highlight() };

    rsx! {
        article { class: "{class} flex flex-col gap-3 p-5",
            div { class: "flex items-start justify-between",
                div {
                    h3 { class: "font-semibold text-slate-100", "{quote.supplier}" }
                    p { class: "text-xs {theme::text_muted()}", "★ {quote.supplier_rating:.1} · {quote.verification_level}" }
                }
                QuoteStatusBadge { status: quote.status }
            }
            div { class: "flex flex-wrap gap-1",
                for badge in badges.iter() {
                    span { key: "{badge}", class: "rounded-full bg-emerald-500/15 px-2 py-0.5 text-[11px] font-semibold text-emerald-300", "{badge}" }
                }
            }
            dl { class: "grid grid-cols-2 gap-2 text-sm",
                dt { class: "{theme::text_muted()}", "Price" }
                dd { class: "text-right font-mono", "{format::usd_per_kg(quote.price_per_kg)}" }
                dt { class: "{theme::text_muted()}", "Material" }
                dd { class: "text-right", "{format::usd(quote.material_cost(quantity))}" }
                dt { class: "{theme::text_muted()}", "Shipping" }
                dd { class: "text-right", "{format::usd(quote.shipping_estimate)}" }
                dt { class: "font-semibold", "Total" }
                dd { class: "text-right font-semibold text-emerald-300", "{format::usd(quote.total_estimate(quantity))}" }
                dt { class: "{theme::text_muted()}", "MOQ" }
                dd { class: "text-right", "{format::kg(quote.moq)}" }
                dt { class: "{theme::text_muted()}", "Lead time" }
                dd { class: "text-right", "{quote.lead_time_days} days" }
                dt { class: "{theme::text_muted()}", "Incoterm" }
                dd { class: "text-right", "{quote.incoterm.code()}" }
                dt { class: "{theme::text_muted()}", "Payment" }
                dd { class: "text-right", "{quote.payment_terms.label()}" }
            }
            if !quote.certifications.is_empty() {
                p { class: "text-xs {theme::text_muted()}", "{quote.certifications.join(\", \")}" }
            }
            if !quote.notes.is_empty() {
                p { class: "text-xs italic text-slate-400", "{quote.notes}" }
            }
            div { class: "mt-auto flex flex-wrap gap-2 pt-2",
                button {
                    class: theme::btn_primary(),
                    disabled: !open,
                    onclick: move |_| on_decide.call(QuoteDecision::Accept),
                    "Accept"
                }
                button {
                    class: theme::btn_secondary(),
                    disabled: !open,
                    onclick: move |_| on_decide.call(QuoteDecision::RequestRevision),
                    "Request revision"
                }
                button {
                    class: theme::btn_danger(),
                    disabled: !open,
                    onclick: move |_| on_decide.call(QuoteDecision::Reject),
                    "Reject"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_follow_highlight_indices() {
        let highlights = QuoteHighlights {
            lowest_total: Some(1),
            lowest_unit_price: Some(1),
            fastest: Some(2),
            best_rated: Some(2),
            most_certified: Some(2),
        };
        assert!(badges_for(&highlights, 0).is_empty());
        assert_eq!(badges_for(&highlights, 1), vec!["Best total", "Lowest price/kg"]);
        assert_eq!(badges_for(&highlights, 2).len(), 3);
    }
}
