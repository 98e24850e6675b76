//! Shared data models spanning the engine layers.

pub mod health;
pub mod initiative;
pub mod portfolio;

pub use health::{
    FinancialAggregate, HealthStatus, InitiativeHealth, OperationalAggregate, RiskFactor,
    AT_RISK_THRESHOLD,
};
pub use initiative::{
    FinancialMetric, Initiative, InitiativeStatus, InitiativeType, OperationalMetric,
};
pub use portfolio::{
    AtRiskSummary, ExecutiveSummaryRow, HealthDistribution, KpiStatus, PortfolioMetrics,
    TypePerformance, UpcomingCompletions,
};
