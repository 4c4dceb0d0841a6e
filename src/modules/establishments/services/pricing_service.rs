use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::establishments::services::price_resolver::{PriceResolver, Quote};
use crate::storage::Repositories;

/// Prices service selections with an establishment's current overrides
pub struct PricingService {
    repos: Repositories,
}

impl PricingService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Total price and duration a booking of `service_ids` would freeze
    ///
    /// # Errors
    /// `NotFound` when the establishment does not exist
    pub async fn quote(&self, establishment_id: i64, service_ids: &[i64]) -> Result<Quote> {
        let (establishment, catalog) = tokio::try_join!(
            self.repos.establishments.find_by_id(establishment_id),
            self.repos.services.list(),
        )?;
        let establishment = establishment
            .ok_or_else(|| AppError::not_found(format!("Establishment {}", establishment_id)))?;

        let quote = PriceResolver::new(Some(&establishment), &catalog).quote(service_ids);

        info!(
            establishment_id,
            services = quote.services.len(),
            total_price = %quote.total_price,
            "Quote computed"
        );

        Ok(quote)
    }
}
