pub mod price_resolver;
pub mod pricing_service;

pub use price_resolver::{
    CommissionSplit, PriceResolver, Quote, QuoteLine, DEFAULT_COMMISSION_PERCENT,
    REMOVED_SERVICE_NAME,
};
pub use pricing_service::PricingService;
