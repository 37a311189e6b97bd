//! Marketplace domain: tiered pricing, purchasing flows and order follow-through.

pub mod app_state;
pub mod booking;
pub mod catalog;
pub mod compliance;
pub mod delivery;
pub mod entities;
pub mod events;
pub mod pricing;
pub mod quotes;
pub mod rfq;
pub mod tracking;
pub mod wizard;

#[allow(unused_imports)]
pub use app_state::{AppState, SessionError};
#[allow(unused_imports)]
pub use booking::{new_reference, parse_date_input, BookingContext, BookingForm, BookingRequest};
#[allow(unused_imports)]
pub use catalog::{filter_suppliers, Catalog, CatalogError, MarketplaceFilter};
#[allow(unused_imports)]
pub use compliance::{ComplianceSnapshot, DashboardKpis, PriceHistory, PriceSeries};
#[allow(unused_imports)]
pub use delivery::{
    CompletionCertificate, Condition, DeliveryError, DeliveryForm, DeliveryReceipt, QualityCheck,
    Variance,
};
#[allow(unused_imports)]
pub use entities::{
    AiVerification, Certification, DeliveryMethod, Incoterm, Logistics, Material, MaterialId,
    MaterialKind, Order, OrderDocument, OrderStatus, Party, PaymentTerms, QcReport, Region, Review,
    RfqSummary, ShipmentTracking, Supplier, SupplierId,
};
#[allow(unused_imports)]
pub use events::{Destination, FollowUp, MarketEvent, Notification, NotificationKind};
#[allow(unused_imports)]
pub use pricing::{
    calculate_total, parse_quantity, resolve_unit_price, PriceQuote, PriceTier, PricingError,
    QuantityError, QuantityRequest, TierSchedule,
};
#[allow(unused_imports)]
pub use quotes::{Quote, QuoteBoard, QuoteDecision, QuoteError, QuoteHighlights, QuoteStatus};
#[allow(unused_imports)]
pub use rfq::{RfqContext, RfqForm, RfqRequest};
#[allow(unused_imports)]
pub use tracking::{OrderTimeline, StageState, TimelineStage};
#[allow(unused_imports)]
pub use wizard::{ValidationError, Wizard, WizardError, WizardForm, WizardStep};
