use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Date, Duration};

use super::{
    entities::{Incoterm, Order, OrderStatus, PaymentTerms},
    events::MarketEvent,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    #[default]
    Received,
    Accepted,
    Rejected,
    RevisionRequested,
}

impl QuoteStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::RevisionRequested => "Revision Requested",
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteDecision {
    Accept,
    Reject,
    RequestRevision,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub rfq_id: String,
    pub supplier: String,
    pub supplier_rating: f32,
    pub material: String,
    pub price_per_kg: f64,
    pub moq: u64,
    pub lead_time_days: u32,
    pub incoterm: Incoterm,
    pub payment_terms: PaymentTerms,
    pub verification_level: String,
    #[serde(default)]
    pub shipping_estimate: f64,
    #[serde(default)]
    pub status: QuoteStatus,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl Quote {
    pub fn material_cost(&self, quantity_kg: u64) -> f64 {
        self.price_per_kg * quantity_kg as f64
    }

    /// Material plus quoted freight; DDP quotes carry freight in the unit price.
    pub fn total_estimate(&self, quantity_kg: u64) -> f64 {
        self.material_cost(quantity_kg) + self.shipping_estimate
    }

    pub fn expected_delivery(&self, order_date: Date) -> Date {
        order_date
            .checked_add(Duration::days(i64::from(self.lead_time_days)))
            .unwrap_or(order_date)
    }

    /// Purchase order raised when this quote is accepted.
    pub fn to_order(&self, order_id: String, supplier_id: String, quantity_kg: u64, order_date: Date) -> Order {
        Order {
            id: order_id,
            quote_id: Some(self.id.clone()),
            rfq_id: Some(self.rfq_id.clone()),
            supplier_id,
            supplier: self.supplier.clone(),
            material: self.material.clone(),
            quantity_kg,
            unit_price: self.price_per_kg,
            shipping_cost: self.shipping_estimate,
            order_date,
            delivery_date: self.expected_delivery(order_date),
            status: OrderStatus::Confirmed,
            incoterm: Some(self.incoterm),
            payment_terms: Some(self.payment_terms),
            lead_time_days: Some(self.lead_time_days),
            current_step: 1,
            recycled_pct: 100.0,
            tracking: None,
            qc_report: None,
            documents: Vec::new(),
            certifications: self.certifications.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuoteError {
    #[error("no quote {0} on this request")]
    UnknownQuote(String),
    #[error("quote {id} is already {}", .status.label().to_lowercase())]
    AlreadyDecided { id: String, status: QuoteStatus },
    #[error("quote {accepted} has already been accepted for this request")]
    AnotherAccepted { accepted: String },
}

/// Indices into [`QuoteBoard::quotes`] for each comparison column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuoteHighlights {
    pub lowest_total: Option<usize>,
    pub lowest_unit_price: Option<usize>,
    pub fastest: Option<usize>,
    pub best_rated: Option<usize>,
    pub most_certified: Option<usize>,
}

fn best_by<T, K, F>(items: &[T], key: F, better: fn(&K, &K) -> bool) -> Option<usize>
where
    F: Fn(&T) -> K,
{
    let mut best: Option<(usize, K)> = None;
    for (idx, item) in items.iter().enumerate() {
        let candidate = key(item);
        match &best {
            Some((_, current)) if !better(&candidate, current) => {}
            _ => best = Some((idx, candidate)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// All quotes received for a single RFQ, compared at the requested quantity.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteBoard {
    rfq_id: String,
    quantity_kg: u64,
    quotes: Vec<Quote>,
}

impl QuoteBoard {
    pub fn new(rfq_id: impl Into<String>, quantity_kg: u64, quotes: Vec<Quote>) -> Self {
        Self {
            rfq_id: rfq_id.into(),
            quantity_kg,
            quotes,
        }
    }

    pub fn rfq_id(&self) -> &str {
        &self.rfq_id
    }

    pub fn quantity_kg(&self) -> u64 {
        self.quantity_kg
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn quote(&self, id: &str) -> Option<&Quote> {
        self.quotes.iter().find(|quote| quote.id == id)
    }

    pub fn accepted(&self) -> Option<&Quote> {
        self.quotes
            .iter()
            .find(|quote| quote.status == QuoteStatus::Accepted)
    }

    pub fn highlights(&self) -> QuoteHighlights {
        let qty = self.quantity_kg;
        QuoteHighlights {
            lowest_total: best_by(&self.quotes, |q| q.total_estimate(qty), |a, b| a < b),
            lowest_unit_price: best_by(&self.quotes, |q| q.price_per_kg, |a, b| a < b),
            fastest: best_by(&self.quotes, |q| q.lead_time_days, |a, b| a < b),
            best_rated: best_by(&self.quotes, |q| q.supplier_rating, |a, b| a > b),
            most_certified: best_by(&self.quotes, |q| q.certifications.len(), |a, b| a > b),
        }
    }

    pub fn decide(&mut self, quote_id: &str, decision: QuoteDecision) -> Result<MarketEvent, QuoteError> {
        let accepted = self.accepted().map(|quote| quote.id.clone());
        let quote = self
            .quotes
            .iter_mut()
            .find(|quote| quote.id == quote_id)
            .ok_or_else(|| QuoteError::UnknownQuote(quote_id.to_string()))?;

        if quote.status.is_final() {
            return Err(QuoteError::AlreadyDecided {
                id: quote.id.clone(),
                status: quote.status,
            });
        }
        if let (QuoteDecision::Accept, Some(accepted)) = (decision, accepted) {
            return Err(QuoteError::AnotherAccepted { accepted });
        }

        let quote_id = quote.id.clone();
        let supplier = quote.supplier.clone();
        let (status, event) = match decision {
            QuoteDecision::Accept => (
                QuoteStatus::Accepted,
                MarketEvent::QuoteAccepted { quote_id, supplier },
            ),
            QuoteDecision::Reject => (
                QuoteStatus::Rejected,
                MarketEvent::QuoteRejected { quote_id, supplier },
            ),
            QuoteDecision::RequestRevision => (
                QuoteStatus::RevisionRequested,
                MarketEvent::RevisionRequested { quote_id, supplier },
            ),
        };
        quote.status = status;
        tracing::info!(rfq = %self.rfq_id, quote = %quote.id, status = status.label(), "quote decided");
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn quote(id: &str, supplier: &str, rating: f32, price: f64, lead: u32, ship: f64, certs: &[&str]) -> Quote {
        Quote {
            id: id.into(),
            rfq_id: "RFQ-2024-001".into(),
            supplier: supplier.into(),
            supplier_rating: rating,
            material: "rPET - Food Grade".into(),
            price_per_kg: price,
            moq: 5_000,
            lead_time_days: lead,
            incoterm: Incoterm::Fob,
            payment_terms: PaymentTerms::Net30,
            verification_level: "ISO".into(),
            shipping_estimate: ship,
            status: QuoteStatus::Received,
            certifications: certs.iter().map(|c| c.to_string()).collect(),
            notes: String::new(),
        }
    }

    fn board() -> QuoteBoard {
        QuoteBoard::new(
            "RFQ-2024-001",
            5_000,
            vec![
                quote("Q-001", "GreenCycle Materials", 4.8, 1.85, 14, 450.0, &["FDA", "ISO 9001", "Chain of Custody"]),
                quote("Q-002", "EcoPlast Solutions", 4.6, 1.78, 21, 420.0, &["ISO 9001"]),
                quote(
                    "Q-003",
                    "ReSource Polymers",
                    4.9,
                    1.92,
                    10,
                    0.0,
                    &["FDA", "ISO 9001", "ISO 14001", "Chain of Custody", "Third-party QC"],
                ),
            ],
        )
    }

    #[test]
    fn totals_include_shipping() {
        let board = board();
        let totals: Vec<f64> = board
            .quotes()
            .iter()
            .map(|q| q.total_estimate(board.quantity_kg()))
            .collect();
        assert_eq!(totals, vec![9_700.0, 9_320.0, 9_600.0]);
    }

    #[test]
    fn highlights_pick_each_column_winner() {
        let highlights = board().highlights();
        assert_eq!(
            highlights,
            QuoteHighlights {
                lowest_total: Some(1),
                lowest_unit_price: Some(1),
                fastest: Some(2),
                best_rated: Some(2),
                most_certified: Some(2),
            }
        );
        assert_eq!(QuoteBoard::new("RFQ-X", 1, vec![]).highlights(), QuoteHighlights::default());
    }

    #[test]
    fn ties_keep_first_quote() {
        let mut board = board();
        board.quotes[0].lead_time_days = 10;
        assert_eq!(board.highlights().fastest, Some(0));
    }

    #[test]
    fn accepted_quote_becomes_confirmed_order() {
        let board = board();
        let q = board.quote("Q-001").unwrap();
        let order = q.to_order("PO-1".into(), "greencycle".into(), 5_000, date!(2025 - 12 - 02));
        assert_eq!(order.delivery_date, date!(2025 - 12 - 16));
        assert_eq!(order.total_value(), 9_700.0);
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.current_step, 1);
        assert_eq!(order.quote_id.as_deref(), Some("Q-001"));
    }

    #[test]
    fn only_one_acceptance_per_board() {
        let mut board = board();
        let event = board.decide("Q-002", QuoteDecision::Accept).unwrap();
        assert_eq!(
            event,
            MarketEvent::QuoteAccepted {
                quote_id: "Q-002".into(),
                supplier: "EcoPlast Solutions".into()
            }
        );
        assert_eq!(board.accepted().map(|q| q.id.as_str()), Some("Q-002"));
        assert_eq!(
            board.decide("Q-001", QuoteDecision::Accept),
            Err(QuoteError::AnotherAccepted {
                accepted: "Q-002".into()
            })
        );
        assert!(board.decide("Q-001", QuoteDecision::Reject).is_ok());
    }

    #[test]
    fn revision_can_still_be_decided_but_final_states_cannot() {
        let mut board = board();
        board.decide("Q-003", QuoteDecision::RequestRevision).unwrap();
        assert_eq!(board.quote("Q-003").unwrap().status, QuoteStatus::RevisionRequested);
        board.decide("Q-003", QuoteDecision::Reject).unwrap();
        assert!(matches!(
            board.decide("Q-003", QuoteDecision::Accept),
            Err(QuoteError::AlreadyDecided { status: QuoteStatus::Rejected, .. })
        ));
        assert_eq!(
            board.decide("Q-404", QuoteDecision::Reject),
            Err(QuoteError::UnknownQuote("Q-404".into()))
        );
    }
}
