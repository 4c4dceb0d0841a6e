pub mod analytics_result;
pub mod filter;
pub mod snapshot;

pub use analytics_result::{
    AnalyticsResult, AnalyticsSummary, EmployeeRankingEntry, MonthlyEntry, NamedRef,
    ServiceRankingEntry, UnassignedSummary, WeekdayEntry, WEEKDAY_LABELS,
};
pub use filter::{AnalyticsFilter, AnalyticsQuery, PeriodFilter};
pub use snapshot::Snapshot;
