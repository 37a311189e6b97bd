use dioxus::prelude::*;

use crate::domain::{AiVerification, OrderStatus, QuoteStatus};

const GREEN: &str = "bg-emerald-500/10 text-emerald-300 border-emerald-500/40";
const AMBER: &str = "bg-amber-500/10 text-amber-300 border-amber-500/40";
const SKY: &str = "bg-sky-500/10 text-sky-300 border-sky-500/40";
const ROSE: &str = "bg-rose-500/10 text-rose-300 border-rose-500/40";
const GREY: &str = "bg-slate-700/40 text-slate-300 border-slate-600/60";

fn order_color(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Delivered | OrderStatus::Completed => GREEN,
        OrderStatus::InTransit | OrderStatus::InProduction | OrderStatus::Confirmed => SKY,
        OrderStatus::QuoteReceived
        | OrderStatus::UnderReview
        | OrderStatus::Negotiation
        | OrderStatus::PendingApproval => AMBER,
        OrderStatus::Cancelled => ROSE,
        OrderStatus::RfqSent => GREY,
    }
}

fn quote_color(status: QuoteStatus) -> &'static str {
    match status {
        QuoteStatus::Accepted => GREEN,
        QuoteStatus::Rejected => ROSE,
        QuoteStatus::RevisionRequested => AMBER,
        QuoteStatus::Received => SKY,
    }
}

fn verification_color(level: AiVerification) -> &'static str {
    match level {
        AiVerification::Verified => GREEN,
        AiVerification::Conditional => AMBER,
        AiVerification::NotVerified => GREY,
    }
}

#[component]
fn Badge(label: String, color: &'static str) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {color}",
            "{label}"
        }
    }
}

#[component]
pub fn OrderStatusBadge(status: OrderStatus) -> Element {
    rsx! { Badge { label: status.label().to_string(), color: order_color(status) } }
}

#[component]
pub fn QuoteStatusBadge(status: QuoteStatus) -> Element {
    rsx! { Badge { label: status.label().to_string(), color: quote_color(status) } }
}

#[component]
pub fn VerificationBadge(level: AiVerification) -> Element {
    rsx! { Badge { label: level.label().to_string(), color: verification_color(level) } }
}
