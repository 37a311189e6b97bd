#![allow(dead_code)]

use std::collections::HashMap;

use thiserror::Error;
use time::Date;

use super::{
    booking::{new_reference, BookingRequest},
    catalog::Catalog,
    compliance::{ComplianceSnapshot, DashboardKpis},
    delivery::{CompletionCertificate, DeliveryError, DeliveryForm, DeliveryReceipt},
    entities::{Order, OrderStatus, Party},
    events::MarketEvent,
    quotes::{QuoteBoard, QuoteDecision, QuoteError},
    rfq::RfqRequest,
    tracking::TimelineStage,
};
use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("unknown RFQ {0}")]
    UnknownRfq(String),
    #[error("unknown quote {0}")]
    UnknownQuote(String),
    #[error("unknown order {0}")]
    UnknownOrder(String),
    #[error("order {0} was already delivered")]
    AlreadyDelivered(String),
    #[error(transparent)]
    Quote(#[from] QuoteError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Everything the buyer has done since the app started, layered over the catalog.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub bookings: Vec<BookingRequest>,
    pub rfqs: Vec<RfqRequest>,
    boards: HashMap<String, QuoteBoard>,
    /// Orders placed or updated this session; shadow catalog orders with the same id.
    orders: Vec<Order>,
    receipts: HashMap<String, DeliveryReceipt>,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog,
            bookings: Vec::new(),
            rfqs: Vec::new(),
            boards: HashMap::new(),
            orders: Vec::new(),
            receipts: HashMap::new(),
        }
    }

    pub fn buyer(&self) -> Party {
        self.config.buyer.party()
    }

    pub fn record_booking(&mut self, request: BookingRequest) -> MarketEvent {
        let event = request.event();
        self.bookings.push(request);
        event
    }

    pub fn record_rfq(&mut self, request: RfqRequest) -> MarketEvent {
        let event = request.event();
        self.rfqs.push(request);
        event
    }

    /// Current board for an RFQ, including decisions made this session.
    pub fn quote_board(&self, rfq_id: &str) -> Option<QuoteBoard> {
        self.boards
            .get(rfq_id)
            .cloned()
            .or_else(|| self.catalog.quote_board(rfq_id))
    }

    pub fn decide_quote(
        &mut self,
        rfq_id: &str,
        quote_id: &str,
        decision: QuoteDecision,
    ) -> Result<MarketEvent, SessionError> {
        if !self.boards.contains_key(rfq_id) {
            let board = self
                .catalog
                .quote_board(rfq_id)
                .ok_or_else(|| SessionError::UnknownRfq(rfq_id.to_string()))?;
            self.boards.insert(rfq_id.to_string(), board);
        }
        let board = self
            .boards
            .get_mut(rfq_id)
            .ok_or_else(|| SessionError::UnknownRfq(rfq_id.to_string()))?;
        Ok(board.decide(quote_id, decision)?)
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders
            .iter()
            .find(|order| order.id == id)
            .or_else(|| self.catalog.order(id))
    }

    /// Session orders first, then catalog orders not shadowed by them.
    pub fn orders(&self) -> Vec<&Order> {
        let mut all: Vec<&Order> = self.orders.iter().collect();
        all.extend(
            self.catalog
                .orders
                .iter()
                .filter(|order| !self.orders.iter().any(|own| own.id == order.id)),
        );
        all
    }

    /// Purchase order for a quote: the existing one if already raised, else a fresh draft.
    pub fn purchase_order(&self, quote_id: &str, today: Date) -> Result<Order, SessionError> {
        if let Some(order) = self
            .orders
            .iter()
            .chain(self.catalog.orders.iter())
            .find(|order| order.quote_id.as_deref() == Some(quote_id))
        {
            return Ok(order.clone());
        }
        let quote = self
            .catalog
            .quote(quote_id)
            .ok_or_else(|| SessionError::UnknownQuote(quote_id.to_string()))?;
        let quantity_kg = self
            .catalog
            .rfq(&quote.rfq_id)
            .map(|rfq| rfq.quantity_kg)
            .unwrap_or(quote.moq);
        let supplier_id = self
            .catalog
            .supplier_by_name(&quote.supplier)
            .map(|supplier| supplier.id.clone())
            .unwrap_or_default();
        Ok(quote.to_order(new_reference("PO"), supplier_id, quantity_kg, today))
    }

    pub fn confirm_order(&mut self, quote_id: &str, today: Date) -> Result<MarketEvent, SessionError> {
        let order = self.purchase_order(quote_id, today)?;
        Ok(self.place_order(order))
    }

    /// Commits a drafted purchase order; placing the same id twice is a no-op.
    pub fn place_order(&mut self, order: Order) -> MarketEvent {
        let order_id = order.id.clone();
        if self.order(&order_id).is_none() {
            tracing::info!(order = %order_id, quote = ?order.quote_id, total = order.total_value(), "purchase order raised");
            self.orders.push(order);
        }
        MarketEvent::OrderConfirmed { order_id }
    }

    pub fn confirm_delivery(&mut self, order_id: &str, form: &DeliveryForm) -> Result<Vec<MarketEvent>, SessionError> {
        let mut order = self
            .order(order_id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownOrder(order_id.to_string()))?;
        if self.receipts.contains_key(order_id) {
            return Err(SessionError::AlreadyDelivered(order_id.to_string()));
        }
        let (receipt, events) = form.confirm(&order)?;

        order.status = OrderStatus::Delivered;
        order.current_step = TimelineStage::Delivered.step();
        order.delivery_date = receipt.delivery_date;
        self.orders.retain(|own| own.id != order.id);
        self.orders.push(order);
        self.receipts.insert(order_id.to_string(), receipt);
        Ok(events)
    }

    pub fn receipt(&self, order_id: &str) -> Option<DeliveryReceipt> {
        if let Some(receipt) = self.receipts.get(order_id) {
            return Some(receipt.clone());
        }
        let order = self.catalog.order(order_id)?;
        matches!(order.status, OrderStatus::Delivered | OrderStatus::Completed)
            .then(|| DeliveryReceipt::from_records(order, &self.config.buyer.contact))
    }

    pub fn certificate(&self, order_id: &str) -> Result<CompletionCertificate, SessionError> {
        let order = self
            .order(order_id)
            .ok_or_else(|| SessionError::UnknownOrder(order_id.to_string()))?;
        let receipt = self
            .receipt(order_id)
            .ok_or_else(|| DeliveryError::NotDelivered(order_id.to_string()))?;
        Ok(CompletionCertificate::issue(order, &receipt, &self.buyer())?)
    }

    /// Catalog position plus deliveries confirmed this session, against the configured minimum.
    pub fn compliance(&self) -> ComplianceSnapshot {
        let base = ComplianceSnapshot {
            required_pct: self.config.compliance.required_pct,
            ..self.catalog.compliance
        };
        base.with_orders(
            self.orders
                .iter()
                .filter(|order| self.receipts.contains_key(&order.id)),
        )
    }

    pub fn kpis(&self) -> DashboardKpis {
        let orders: Vec<Order> = self.orders().into_iter().cloned().collect();
        DashboardKpis::from_orders(&orders)
    }
}
