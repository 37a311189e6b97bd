pub mod completion;
pub mod dashboard;
pub mod delivery;
pub mod home;
pub mod marketplace;
pub mod not_found;
pub mod order_confirmation;
pub mod order_tracking;
pub mod quotes;
pub mod supplier_detail;

pub use completion::CompletionPage;
pub use dashboard::DashboardPage;
pub use delivery::DeliveryPage;
pub use home::HomePage;
pub use marketplace::MarketplacePage;
pub use not_found::NotFoundPage;
pub use order_confirmation::OrderConfirmationPage;
pub use order_tracking::OrderTrackingPage;
pub use quotes::QuoteComparisonPage;
pub use supplier_detail::SupplierDetailPage;
