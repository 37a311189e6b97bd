pub mod booking_modal;
pub mod company_profile;
pub mod compliance_tracker;
pub mod kpi_card;
pub mod modal;
pub mod order_timeline;
pub mod rfq_modal;
pub mod status_badge;
pub mod supplier_card;
pub mod tier_table;
pub mod toast;
