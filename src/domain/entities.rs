#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use time::Date;

use super::pricing::TierSchedule;

time::serde::format_description!(ymd, Date, "[year]-[month]-[day]");

pub type SupplierId = String;
pub type MaterialId = String;

/// Recycled resin families traded on the marketplace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialKind {
    #[serde(rename = "rPET")]
    RPet,
    #[serde(rename = "rHDPE")]
    RHdpe,
    #[serde(rename = "rPP")]
    RPp,
    #[serde(rename = "rLDPE")]
    RLdpe,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 4] = [Self::RPet, Self::RHdpe, Self::RPp, Self::RLdpe];

    pub fn label(&self) -> &'static str {
        match self {
            Self::RPet => "rPET",
            Self::RHdpe => "rHDPE",
            Self::RPp => "rPP",
            Self::RLdpe => "rLDPE",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Midwest,
    WestCoast,
    EastCoast,
    South,
}

impl Region {
    pub const ALL: [Region; 4] = [Self::Midwest, Self::WestCoast, Self::EastCoast, Self::South];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Midwest => "Midwest",
            Self::WestCoast => "West Coast",
            Self::EastCoast => "East Coast",
            Self::South => "South",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Midwest => "midwest",
            Self::WestCoast => "west",
            Self::EastCoast => "east",
            Self::South => "south",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.key() == key)
    }
}

/// Outcome of the automated quality screening shown on supplier cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiVerification {
    Verified,
    Conditional,
    #[default]
    NotVerified,
}

impl AiVerification {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Verified => "AI Verified",
            Self::Conditional => "Conditional",
            Self::NotVerified => "Not Verified",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub kind: MaterialKind,
    pub grade: String,
    pub color: String,
    pub mfi: String,
    pub contamination: String,
    pub pellet_size: String,
    pub available_kg: u64,
    pub moq: u64,
    pub pricing: TierSchedule,
}

impl Material {
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.kind.label(), self.grade)
    }

    pub fn base_price(&self) -> f64 {
        self.pricing.base_price()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Logistics {
    pub pickup: bool,
    pub delivery: bool,
    pub estimated_freight: String,
    pub lead_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub rating: u8,
    pub comment: String,
    #[serde(with = "ymd")]
    pub date: Date,
}

/// Contact block printed on purchase orders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub location: String,
    pub region: Region,
    pub rating: f32,
    pub review_count: u32,
    pub verified: bool,
    #[serde(default)]
    pub ai_verification: AiVerification,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    pub materials: Vec<Material>,
    pub logistics: Logistics,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub contact: Party,
}

impl Supplier {
    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|material| material.id == id)
    }

    pub fn offers(&self, kind: MaterialKind) -> bool {
        self.materials.iter().any(|material| material.kind == kind)
    }

    pub fn material_kinds(&self) -> Vec<MaterialKind> {
        let mut kinds = Vec::new();
        for material in &self.materials {
            if !kinds.contains(&material.kind) {
                kinds.push(material.kind);
            }
        }
        kinds
    }

    /// Cheapest and dearest unit price across all materials and tiers.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.materials
            .iter()
            .map(|material| material.pricing.price_range())
            .reduce(|(low, high), (l, h)| (low.min(l), high.max(h)))
    }

    pub fn min_order(&self) -> Option<u64> {
        self.materials.iter().map(|material| material.moq).min()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    #[default]
    Delivery,
    Pickup,
}

impl DeliveryMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Delivery => "Delivery",
            Self::Pickup => "Pickup",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Incoterm {
    Exw,
    #[default]
    Fob,
    Cif,
    Ddp,
    Dap,
}

impl Incoterm {
    pub const ALL: [Incoterm; 5] = [Self::Exw, Self::Fob, Self::Cif, Self::Ddp, Self::Dap];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Exw => "EXW",
            Self::Fob => "FOB",
            Self::Cif => "CIF",
            Self::Ddp => "DDP",
            Self::Dap => "DAP",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Exw => "EXW - Ex Works",
            Self::Fob => "FOB - Free on Board",
            Self::Cif => "CIF - Cost, Insurance & Freight",
            Self::Ddp => "DDP - Delivered Duty Paid",
            Self::Dap => "DAP - Delivered at Place",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|term| term.code() == code)
    }

    /// Seller pays freight to the buyer's door.
    pub fn includes_freight(&self) -> bool {
        matches!(self, Self::Ddp | Self::Dap | Self::Cif)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentTerms {
    #[default]
    Net30,
    Net45,
    Net60,
    Net90,
    Cod,
    Advance,
    #[serde(rename = "LC")]
    LetterOfCredit,
}

impl PaymentTerms {
    /// Options offered on the RFQ form.
    pub const RFQ_OPTIONS: [PaymentTerms; 6] = [
        Self::Net30,
        Self::Net60,
        Self::Net90,
        Self::Cod,
        Self::Advance,
        Self::LetterOfCredit,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Net30 => "NET30",
            Self::Net45 => "NET45",
            Self::Net60 => "NET60",
            Self::Net90 => "NET90",
            Self::Cod => "COD",
            Self::Advance => "ADVANCE",
            Self::LetterOfCredit => "LC",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Net30 => "Net 30 Days",
            Self::Net45 => "Net 45 Days",
            Self::Net60 => "Net 60 Days",
            Self::Net90 => "Net 90 Days",
            Self::Cod => "Cash on Delivery",
            Self::Advance => "50% Advance / 50% on Delivery",
            Self::LetterOfCredit => "Letter of Credit",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        [
            Self::Net30,
            Self::Net45,
            Self::Net60,
            Self::Net90,
            Self::Cod,
            Self::Advance,
            Self::LetterOfCredit,
        ]
        .into_iter()
        .find(|term| term.code() == code)
    }
}

/// Lifecycle labels shared by RFQs and orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    RfqSent,
    QuoteReceived,
    UnderReview,
    Negotiation,
    Confirmed,
    InProduction,
    InTransit,
    Delivered,
    Completed,
    PendingApproval,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::RfqSent => "RFQ Sent",
            Self::QuoteReceived => "Quote Received",
            Self::UnderReview => "Under Review",
            Self::Negotiation => "Negotiation",
            Self::Confirmed => "Confirmed",
            Self::InProduction => "In Production",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
            Self::Completed => "Completed",
            Self::PendingApproval => "Pending Approval",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Still awaiting delivery or a decision.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Delivered | Self::Completed | Self::Cancelled)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RfqSummary {
    pub id: String,
    pub supplier: String,
    pub material: String,
    pub quantity_kg: u64,
    #[serde(with = "ymd")]
    pub request_date: Date,
    pub status: OrderStatus,
    pub quoted_price: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentTracking {
    pub carrier: String,
    pub tracking_number: String,
    pub current_location: String,
    pub last_update: String,
    #[serde(with = "ymd")]
    pub estimated_delivery: Date,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QcReport {
    pub status: String,
    #[serde(with = "ymd")]
    pub date: Date,
    pub mfi: String,
    pub contamination: String,
    pub color: String,
    pub inspector: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderDocument {
    pub name: String,
    pub id: String,
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub quote_id: Option<String>,
    #[serde(default)]
    pub rfq_id: Option<String>,
    pub supplier_id: SupplierId,
    pub supplier: String,
    pub material: String,
    pub quantity_kg: u64,
    pub unit_price: f64,
    #[serde(default)]
    pub shipping_cost: f64,
    #[serde(with = "ymd")]
    pub order_date: Date,
    #[serde(with = "ymd")]
    pub delivery_date: Date,
    pub status: OrderStatus,
    #[serde(default)]
    pub incoterm: Option<Incoterm>,
    #[serde(default)]
    pub payment_terms: Option<PaymentTerms>,
    #[serde(default)]
    pub lead_time_days: Option<u32>,
    /// Position on the six-stage fulfilment timeline (0 = not started).
    #[serde(default)]
    pub current_step: u8,
    #[serde(default)]
    pub recycled_pct: f64,
    #[serde(default)]
    pub tracking: Option<ShipmentTracking>,
    #[serde(default)]
    pub qc_report: Option<QcReport>,
    #[serde(default)]
    pub documents: Vec<OrderDocument>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl Order {
    pub fn material_cost(&self) -> f64 {
        self.unit_price * self.quantity_kg as f64
    }

    pub fn total_value(&self) -> f64 {
        self.material_cost() + self.shipping_cost
    }

    pub fn recycled_kg(&self) -> f64 {
        self.quantity_kg as f64 * self.recycled_pct / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::PriceTier;

    fn material(id: &str, kind: MaterialKind, base: f64, moq: u64, tiers: Vec<PriceTier>) -> Material {
        Material {
            id: id.to_string(),
            kind,
            grade: "Food Grade".to_string(),
            color: "Clear".to_string(),
            mfi: "25-35 g/10min".to_string(),
            contamination: "< 0.5%".to_string(),
            pellet_size: "3-4mm".to_string(),
            available_kg: 50_000,
            moq,
            pricing: TierSchedule::new(base, tiers).unwrap(),
        }
    }

    fn supplier() -> Supplier {
        Supplier {
            id: "greencycle".to_string(),
            name: "GreenCycle Materials".to_string(),
            location: "Ohio, USA".to_string(),
            region: Region::Midwest,
            rating: 4.8,
            review_count: 127,
            verified: true,
            ai_verification: AiVerification::Verified,
            certifications: Vec::new(),
            materials: vec![
                material("rpet", MaterialKind::RPet, 1.25, 5_000, vec![PriceTier::new(10_000.0, 1.20)]),
                material("rhdpe", MaterialKind::RHdpe, 1.02, 10_000, vec![PriceTier::new(50_000.0, 0.95)]),
            ],
            logistics: Logistics {
                pickup: true,
                delivery: true,
                estimated_freight: "Contact for quote".to_string(),
                lead_time: "7-14 days".to_string(),
            },
            reviews: Vec::new(),
            contact: Party::default(),
        }
    }

    #[test]
    fn supplier_summaries() {
        let supplier = supplier();
        assert_eq!(supplier.price_range(), Some((0.95, 1.25)));
        assert_eq!(supplier.min_order(), Some(5_000));
        assert!(supplier.offers(MaterialKind::RHdpe));
        assert!(!supplier.offers(MaterialKind::RPp));
        assert_eq!(supplier.material("rpet").map(|m| m.display_name()), Some("rPET - Food Grade".to_string()));
    }

    #[test]
    fn codes_round_trip_through_lookup() {
        assert_eq!(Incoterm::from_code("DDP"), Some(Incoterm::Ddp));
        assert_eq!(PaymentTerms::from_code("LC"), Some(PaymentTerms::LetterOfCredit));
        assert_eq!(MaterialKind::from_label("rhdpe"), Some(MaterialKind::RHdpe));
        assert_eq!(Region::from_key("west"), Some(Region::WestCoast));
        assert!(Incoterm::Ddp.includes_freight());
        assert!(!Incoterm::Fob.includes_freight());
    }

    #[test]
    fn order_status_openness() {
        assert!(OrderStatus::InTransit.is_open());
        assert!(!OrderStatus::Delivered.is_open());
        assert_eq!(OrderStatus::RfqSent.label(), "RFQ Sent");
    }
}
