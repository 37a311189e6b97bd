//! Side effects of user actions, expressed as data.
//!
//! Handlers return a [`MarketEvent`]; the UI turns it into a toast and, when
//! [`MarketEvent::follow_up`] says so, a delayed navigation.

use std::time::Duration;

use crate::config::UiConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Screen a follow-up navigation lands on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Dashboard,
    Marketplace,
    OrderConfirmation { quote_id: String },
    OrderTracking { order_id: String },
    OrderCompletion { order_id: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FollowUp {
    pub destination: Destination,
    pub delay: Duration,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MarketEvent {
    BookingSubmitted {
        reference: String,
        supplier: String,
        material: String,
        quantity_kg: u64,
        estimated_total: f64,
    },
    RfqSubmitted {
        reference: String,
        supplier: String,
        material: String,
        quantity_kg: u64,
    },
    QuoteAccepted {
        quote_id: String,
        supplier: String,
    },
    QuoteRejected {
        quote_id: String,
        supplier: String,
    },
    RevisionRequested {
        quote_id: String,
        supplier: String,
    },
    OrderConfirmed {
        order_id: String,
    },
    DeliveryConfirmed {
        order_id: String,
    },
    IssueReported {
        order_id: String,
        summary: String,
    },
    DocumentRequested {
        name: String,
    },
}

impl MarketEvent {
    pub fn notification(&self) -> Notification {
        use NotificationKind::*;
        match self {
            Self::BookingSubmitted { .. } => Notification::new(
                Success,
                "Booking Request Submitted",
                "Your booking request has been sent to the supplier for approval.",
            ),
            Self::RfqSubmitted { .. } => Notification::new(
                Success,
                "RFQ Submitted Successfully",
                "Your request for quotation has been sent to the supplier. You'll receive a response within 24-48 hours.",
            ),
            Self::QuoteAccepted { supplier, .. } => Notification::new(
                Success,
                "Quote Accepted",
                format!("Proceeding to order confirmation with {supplier}"),
            ),
            Self::QuoteRejected { .. } => {
                Notification::new(Info, "Quote Rejected", "The supplier has been notified")
            }
            Self::RevisionRequested { .. } => Notification::new(
                Info,
                "Revision Requested",
                "The supplier will be notified of your revision request",
            ),
            Self::OrderConfirmed { .. } => Notification::new(
                Success,
                "Order Confirmed",
                "Purchase order has been generated and sent to the supplier",
            ),
            Self::DeliveryConfirmed { .. } => Notification::new(
                Success,
                "Delivery Confirmed",
                "Order has been marked as received. Generating completion certificate...",
            ),
            Self::IssueReported { summary, .. } => Notification::new(
                Warning,
                "Issue Reported",
                format!("The supplier and support team have been notified: {summary}"),
            ),
            Self::DocumentRequested { name } => {
                Notification::new(Info, "Downloading Document", name.clone())
            }
        }
    }

    pub fn follow_up(&self, ui: &UiConfig) -> Option<FollowUp> {
        let (destination, delay) = match self {
            Self::BookingSubmitted { .. } | Self::RfqSubmitted { .. } => {
                (Destination::Dashboard, ui.navigation_delay())
            }
            Self::QuoteAccepted { quote_id, .. } => (
                Destination::OrderConfirmation {
                    quote_id: quote_id.clone(),
                },
                ui.quote_accept_delay(),
            ),
            Self::OrderConfirmed { order_id } => (
                Destination::OrderTracking {
                    order_id: order_id.clone(),
                },
                ui.navigation_delay(),
            ),
            Self::DeliveryConfirmed { order_id } => (
                Destination::OrderCompletion {
                    order_id: order_id.clone(),
                },
                ui.navigation_delay(),
            ),
            Self::QuoteRejected { .. }
            | Self::RevisionRequested { .. }
            | Self::IssueReported { .. }
            | Self::DocumentRequested { .. } => return None,
        };
        Some(FollowUp { destination, delay })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submissions_return_to_dashboard_after_delay() {
        let ui = UiConfig::default();
        let event = MarketEvent::BookingSubmitted {
            reference: "BK-1".into(),
            supplier: "GreenCycle Materials".into(),
            material: "rPET - Food Grade".into(),
            quantity_kg: 5_000,
            estimated_total: 6_250.0,
        };
        assert_eq!(
            event.follow_up(&ui),
            Some(FollowUp {
                destination: Destination::Dashboard,
                delay: Duration::from_millis(1_500),
            })
        );
        assert_eq!(event.notification().kind, NotificationKind::Success);
    }

    #[test]
    fn accepted_quote_moves_to_confirmation_sooner() {
        let ui = UiConfig::default();
        let event = MarketEvent::QuoteAccepted {
            quote_id: "Q-002".into(),
            supplier: "EcoPlast Solutions".into(),
        };
        let follow_up = event.follow_up(&ui).unwrap();
        assert_eq!(follow_up.delay, Duration::from_millis(1_000));
        assert_eq!(
            follow_up.destination,
            Destination::OrderConfirmation {
                quote_id: "Q-002".into()
            }
        );
        assert!(event.notification().description.contains("EcoPlast Solutions"));
    }

    #[test]
    fn informational_events_stay_on_page() {
        let ui = UiConfig::default();
        let rejected = MarketEvent::QuoteRejected {
            quote_id: "Q-001".into(),
            supplier: "GreenCycle Materials".into(),
        };
        assert!(rejected.follow_up(&ui).is_none());
        let issue = MarketEvent::IssueReported {
            order_id: "PO-2024-001".into(),
            summary: "torn bags".into(),
        };
        assert_eq!(issue.notification().kind, NotificationKind::Warning);
        assert!(issue.follow_up(&ui).is_none());
    }
}
