use tracing::info;

use crate::core::Result;
use crate::modules::analytics::models::{AnalyticsFilter, AnalyticsResult, Snapshot};
use crate::modules::analytics::services::aggregation::aggregate;
use crate::modules::analytics::services::ranking::build_result;
use crate::storage::Repositories;

/// Pure analytics computation over an already-fetched snapshot
///
/// Same snapshot and filter always give the same result.
pub fn compute(snapshot: &Snapshot, filter: &AnalyticsFilter) -> AnalyticsResult {
    let aggregation = aggregate(snapshot, filter);
    build_result(&aggregation, snapshot)
}

/// Service computing establishment analytics
pub struct AnalyticsService {
    repos: Repositories,
}

impl AnalyticsService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Fetch the establishment snapshot, then aggregate it under `filter`
    ///
    /// # Errors
    /// Only when the snapshot cannot be fetched; missing references and
    /// empty data yield a zero-valued result instead
    pub async fn compute_analytics(
        &self,
        establishment_id: i64,
        filter: &AnalyticsFilter,
    ) -> Result<AnalyticsResult> {
        let snapshot = Snapshot::load(&self.repos, establishment_id).await?;
        let result = compute(&snapshot, filter);

        info!(
            establishment_id,
            appointments = result.summary.total_appointments,
            revenue = %result.summary.total_revenue,
            "Analytics computed"
        );

        Ok(result)
    }
}
