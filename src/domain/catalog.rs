//! Marketplace data shipped with the app: suppliers and their tiered price
//! lists, open RFQs with the quotes received, and the buyer's order book.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use super::{
    compliance::{ComplianceSnapshot, PriceHistory},
    entities::{Material, MaterialKind, Order, Region, RfqSummary, Supplier},
    quotes::{Quote, QuoteBoard},
};
use crate::util::assets;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate supplier id {0}")]
    DuplicateSupplier(String),
    #[error("material {material} of supplier {supplier} has a zero minimum order")]
    ZeroMoq { supplier: String, material: String },
    #[error("quote {quote} refers to unknown RFQ {rfq}")]
    OrphanQuote { quote: String, rfq: String },
    #[error("price history series {0:?} does not cover every month")]
    MisalignedHistory(Vec<MaterialKind>),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Catalog {
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub rfqs: Vec<RfqSummary>,
    #[serde(default)]
    pub quotes: Vec<Quote>,
    #[serde(default)]
    pub orders: Vec<Order>,
    pub compliance: ComplianceSnapshot,
    #[serde(default)]
    pub price_history: PriceHistory,
}

impl Catalog {
    /// Decodes and validates the embedded catalog.
    pub fn load() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(assets::catalog_json())?;
        tracing::info!(
            suppliers = catalog.suppliers.len(),
            quotes = catalog.quotes.len(),
            orders = catalog.orders.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Tier schedules are checked while decoding; the rest here.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for supplier in &self.suppliers {
            if !seen.insert(supplier.id.as_str()) {
                return Err(CatalogError::DuplicateSupplier(supplier.id.clone()));
            }
            if let Some(material) = supplier.materials.iter().find(|m| m.moq == 0) {
                return Err(CatalogError::ZeroMoq {
                    supplier: supplier.id.clone(),
                    material: material.id.clone(),
                });
            }
        }
        for quote in &self.quotes {
            if self.rfq(&quote.rfq_id).is_none() {
                return Err(CatalogError::OrphanQuote {
                    quote: quote.id.clone(),
                    rfq: quote.rfq_id.clone(),
                });
            }
        }
        let misaligned = self.price_history.misaligned();
        if !misaligned.is_empty() {
            return Err(CatalogError::MisalignedHistory(misaligned));
        }
        Ok(())
    }

    pub fn supplier(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|supplier| supplier.id == id)
    }

    pub fn supplier_by_name(&self, name: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|supplier| supplier.name == name)
    }

    pub fn material(&self, supplier_id: &str, material_id: &str) -> Option<&Material> {
        self.supplier(supplier_id)?.material(material_id)
    }

    pub fn quote(&self, id: &str) -> Option<&Quote> {
        self.quotes.iter().find(|quote| quote.id == id)
    }

    pub fn rfq(&self, id: &str) -> Option<&RfqSummary> {
        self.rfqs.iter().find(|rfq| rfq.id == id)
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Order placed from an accepted quote, if one exists.
    pub fn order_for_quote(&self, quote_id: &str) -> Option<&Order> {
        self.orders
            .iter()
            .find(|order| order.quote_id.as_deref() == Some(quote_id))
    }

    /// Comparison board for an RFQ, at the quantity the buyer asked for.
    pub fn quote_board(&self, rfq_id: &str) -> Option<QuoteBoard> {
        let rfq = self.rfq(rfq_id)?;
        let quotes = self
            .quotes
            .iter()
            .filter(|quote| quote.rfq_id == rfq_id)
            .cloned()
            .collect();
        Some(QuoteBoard::new(rfq_id, rfq.quantity_kg, quotes))
    }

    pub fn active_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(|order| order.status.is_open())
    }

    pub fn completed_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(|order| !order.status.is_open())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarketplaceFilter {
    pub search: String,
    pub material_kind: Option<MaterialKind>,
    pub region: Option<Region>,
}

impl MarketplaceFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.material_kind.is_none() && self.region.is_none()
    }

    pub fn matches(&self, supplier: &Supplier) -> bool {
        let needle = self.search.trim().to_lowercase();
        let text_match = needle.is_empty()
            || supplier.name.to_lowercase().contains(&needle)
            || supplier.location.to_lowercase().contains(&needle);
        let kind_match = self
            .material_kind
            .map(|kind| supplier.offers(kind))
            .unwrap_or(true);
        let region_match = self
            .region
            .map(|region| supplier.region == region)
            .unwrap_or(true);
        text_match && kind_match && region_match
    }
}

pub fn filter_suppliers<'a>(catalog: &'a Catalog, filter: &MarketplaceFilter) -> Vec<&'a Supplier> {
    let hits: Vec<&Supplier> = catalog
        .suppliers
        .iter()
        .filter(|supplier| filter.matches(supplier))
        .collect();
    tracing::debug!(search = %filter.search, hits = hits.len(), "marketplace filtered");
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::quotes::QuoteStatus, logging};

    fn catalog() -> Catalog {
        Catalog::load().expect("embedded catalog")
    }

    #[test]
    fn embedded_catalog_is_consistent() {
        logging::init_test();
        let catalog = catalog();
        assert_eq!(catalog.suppliers.len(), 8);
        assert!(catalog.quotes.iter().all(|q| q.status == QuoteStatus::Received));
        assert_eq!(catalog.active_orders().count(), 4);
        assert_eq!(catalog.completed_orders().count(), 2);
    }

    #[test]
    fn greencycle_rpet_prices_by_tier() {
        let catalog = catalog();
        let rpet = catalog.material("greencycle", "rpet-food").unwrap();
        assert_eq!(rpet.pricing.resolve_unit_price(5_000.0).unwrap(), 1.25);
        assert_eq!(rpet.pricing.resolve_unit_price(30_000.0).unwrap(), 1.15);
        assert_eq!(rpet.pricing.calculate_total(30_000.0).unwrap(), 34_500.0);
        assert_eq!(catalog.material("greencycle", "nope"), None);
    }

    #[test]
    fn quote_board_uses_rfq_quantity() {
        let board = catalog().quote_board("RFQ-2024-001").unwrap();
        assert_eq!(board.quantity_kg(), 5_000);
        assert_eq!(board.quotes().len(), 3);
        assert_eq!(board.highlights().lowest_total, Some(1));
        assert!(catalog().quote_board("RFQ-9999").is_none());
    }

    #[test]
    fn filters_combine() {
        let catalog = catalog();
        let all = filter_suppliers(&catalog, &MarketplaceFilter::default());
        assert_eq!(all.len(), catalog.suppliers.len());

        let search = MarketplaceFilter {
            search: "  OHIO ".into(),
            ..MarketplaceFilter::default()
        };
        let hits = filter_suppliers(&catalog, &search);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "greencycle");

        let narrowed = MarketplaceFilter {
            search: String::new(),
            material_kind: Some(MaterialKind::RPp),
            region: Some(Region::WestCoast),
        };
        assert!(filter_suppliers(&catalog, &narrowed)
            .iter()
            .all(|s| s.region == Region::WestCoast && s.offers(MaterialKind::RPp)));
    }

    #[test]
    fn rejects_bad_documents() {
        let minimal = r#"{"suppliers": [], "compliance": {"total_used_kg": 1.0, "recycled_used_kg": 0.0, "required_pct": 25.0}}"#;
        assert!(Catalog::from_json(minimal).is_ok());

        let orphan = r#"{
            "suppliers": [],
            "quotes": [{"id": "Q-1", "rfq_id": "RFQ-X", "supplier": "S", "supplier_rating": 4.0,
                        "material": "rPET", "price_per_kg": 1.0, "moq": 1, "lead_time_days": 5,
                        "incoterm": "FOB", "payment_terms": "NET30", "verification_level": "ISO"}],
            "compliance": {"total_used_kg": 1.0, "recycled_used_kg": 0.0, "required_pct": 25.0}
        }"#;
        assert!(matches!(
            Catalog::from_json(orphan),
            Err(CatalogError::OrphanQuote { .. })
        ));
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Parse(_))));
    }
}
