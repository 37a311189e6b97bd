use std::time::Duration;

use dioxus::{core::spawn_forever, prelude::*, router::Navigator};

use crate::{
    config::UiConfig,
    domain::{AppState, Destination, FollowUp, MarketEvent},
    ui::{
        components::toast::{push_toast, Toast, ToastMessage},
        pages::{
            CompletionPage, DashboardPage, DeliveryPage, HomePage, MarketplacePage, NotFoundPage,
            OrderConfirmationPage, OrderTrackingPage, QuoteComparisonPage, SupplierDetailPage,
        },
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/marketplace")]
    Marketplace {},
    #[route("/supplier/:id")]
    SupplierDetail { id: String },
    #[route("/dashboard")]
    Dashboard {},
    #[route("/quotes/:rfq_id")]
    QuoteComparison { rfq_id: String },
    #[route("/order/:quote_id/confirm")]
    OrderConfirmation { quote_id: String },
    #[route("/order/:order_id/tracking")]
    OrderTracking { order_id: String },
    #[route("/order/:order_id/delivery")]
    DeliveryConfirmation { order_id: String },
    #[route("/order/:order_id/completion")]
    OrderCompletion { order_id: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Dashboard => Route::Dashboard {},
            Destination::Marketplace => Route::Marketplace {},
            Destination::OrderConfirmation { quote_id } => Route::OrderConfirmation { quote_id },
            Destination::OrderTracking { order_id } => Route::OrderTracking { order_id },
            Destination::OrderCompletion { order_id } => Route::OrderCompletion { order_id },
        }
    }
}

#[component]
pub fn App() -> Element {
    // Seeded in main with the loaded config and catalog.
    let seed = use_context::<AppState>();
    let state = use_signal(move || seed);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

fn redirect_for(event: &MarketEvent, ui: &UiConfig) -> Option<(Route, Duration)> {
    event
        .follow_up(ui)
        .map(|FollowUp { destination, delay }| (Route::from(destination), delay))
}

/// Shows the event's toast and schedules its follow-up navigation, if any.
///
/// The redirect runs on the root scope so closing the dialog that raised the
/// event does not cancel it.
pub fn dispatch_event(
    event: MarketEvent,
    toasts: Signal<Vec<ToastMessage>>,
    nav: Navigator,
    ui: &UiConfig,
) {
    tracing::debug!(?event, "market event");
    push_toast(toasts, event.notification(), ui.toast_limit);
    if let Some((route, delay)) = redirect_for(&event, ui) {
        spawn_forever(async move {
            tokio::time::sleep(delay).await;
            nav.push(route);
        });
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn Marketplace() -> Element {
    rsx! { Shell { MarketplacePage {} } }
}

#[component]
pub fn SupplierDetail(id: String) -> Element {
    rsx! { Shell { SupplierDetailPage { id } } }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn QuoteComparison(rfq_id: String) -> Element {
    rsx! { Shell { QuoteComparisonPage { rfq_id } } }
}

#[component]
pub fn OrderConfirmation(quote_id: String) -> Element {
    rsx! { Shell { OrderConfirmationPage { quote_id } } }
}

#[component]
pub fn OrderTracking(order_id: String) -> Element {
    rsx! { Shell { OrderTrackingPage { order_id } } }
}

#[component]
pub fn DeliveryConfirmation(order_id: String) -> Element {
    rsx! { Shell { DeliveryPage { order_id } } }
}

#[component]
pub fn OrderCompletion(order_id: String) -> Element {
    rsx! { Shell { CompletionPage { order_id } } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! { Shell { NotFoundPage { path: segments.join("/") } } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destinations_map_to_routes() {
        assert!(matches!(Route::from(Destination::Dashboard), Route::Dashboard {}));
        let route = Route::from(Destination::OrderTracking {
            order_id: "PO-2024-001".into(),
        });
        assert_eq!(route.to_string(), "/order/PO-2024-001/tracking");
        let route = Route::from(Destination::OrderConfirmation {
            quote_id: "Q-002".into(),
        });
        assert_eq!(route.to_string(), "/order/Q-002/confirm");
    }

    #[test]
    fn submissions_redirect_after_configured_delay() {
        let ui = UiConfig {
            navigation_delay_ms: 250,
            quote_accept_delay_ms: 40,
            ..UiConfig::default()
        };
        let booking = MarketEvent::BookingSubmitted {
            reference: "BK-1234ABCD".into(),
            supplier: "GreenCycle Materials".into(),
            material: "rPET Food Grade".into(),
            quantity_kg: 5_000,
            estimated_total: 6_250.0,
        };
        let (route, delay) = redirect_for(&booking, &ui).unwrap();
        assert!(matches!(route, Route::Dashboard {}));
        assert_eq!(delay, Duration::from_millis(250));

        let accepted = MarketEvent::QuoteAccepted {
            quote_id: "Q-002".into(),
            supplier: "EcoPlast Solutions".into(),
        };
        let (route, delay) = redirect_for(&accepted, &ui).unwrap();
        assert_eq!(route.to_string(), "/order/Q-002/confirm");
        assert_eq!(delay, Duration::from_millis(40));
    }

    #[test]
    fn paths_parse_to_screens() {
        use std::str::FromStr;

        assert!(matches!(Route::from_str("/supplier/greencycle"), Ok(Route::SupplierDetail { id }) if id == "greencycle"));
        assert!(matches!(Route::from_str("/quotes/RFQ-2024-001"), Ok(Route::QuoteComparison { .. })));
        assert!(matches!(Route::from_str("/order/PO-2024-001/delivery"), Ok(Route::DeliveryConfirmation { .. })));
        assert!(matches!(Route::from_str("/nowhere/at/all"), Ok(Route::NotFound { .. })));
    }
}
