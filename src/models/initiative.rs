//! Input dataset shapes supplied by the data source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a transformation initiative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InitiativeType {
    Digital,
    Operational,
    #[serde(rename = "HR")]
    Hr,
    Financial,
}

impl InitiativeType {
    pub const ALL: [InitiativeType; 4] = [
        InitiativeType::Digital,
        InitiativeType::Operational,
        InitiativeType::Hr,
        InitiativeType::Financial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InitiativeType::Digital => "Digital",
            InitiativeType::Operational => "Operational",
            InitiativeType::Hr => "HR",
            InitiativeType::Financial => "Financial",
        }
    }
}

impl std::fmt::Display for InitiativeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status reported by the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InitiativeStatus {
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "At Risk")]
    AtRisk,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl InitiativeStatus {
    pub const ALL: [InitiativeStatus; 5] = [
        InitiativeStatus::Planning,
        InitiativeStatus::InProgress,
        InitiativeStatus::AtRisk,
        InitiativeStatus::Completed,
        InitiativeStatus::OnHold,
    ];

    /// Active means work is underway, including initiatives flagged At Risk.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            InitiativeStatus::InProgress | InitiativeStatus::AtRisk
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InitiativeStatus::Planning => "Planning",
            InitiativeStatus::InProgress => "In Progress",
            InitiativeStatus::AtRisk => "At Risk",
            InitiativeStatus::Completed => "Completed",
            InitiativeStatus::OnHold => "On Hold",
        }
    }
}

impl std::fmt::Display for InitiativeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracked transformation effort. Created once by the data source and
/// never mutated by the engine; scoring derives new fields onto a copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Initiative {
    pub initiative_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub initiative_type: InitiativeType,
    pub start_date: DateTime<Utc>,
    pub target_end_date: DateTime<Utc>,
    pub budget_allocated: f64,
    pub budget_spent: f64,
    pub status: InitiativeStatus,
    pub owner: String,
    pub description: String,
}

/// One daily financial observation for an initiative.
///
/// Identity fields are required; every metric value is optional so a source
/// that drops a column still deserializes (the scorer fills neutral defaults).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialMetric {
    pub initiative_id: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub revenue_impact: Option<f64>,
    #[serde(default)]
    pub cost_reduction: Option<f64>,
    #[serde(default)]
    pub roi_percentage: Option<f64>,
    #[serde(default)]
    pub budget_burn_rate: Option<f64>,
    #[serde(default)]
    pub forecast_completion_cost: Option<f64>,
}

impl FinancialMetric {
    pub fn new(initiative_id: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            initiative_id: initiative_id.into(),
            date,
            revenue_impact: None,
            cost_reduction: None,
            roi_percentage: None,
            budget_burn_rate: None,
            forecast_completion_cost: None,
        }
    }

    pub fn with_revenue_impact(mut self, value: f64) -> Self {
        self.revenue_impact = Some(value);
        self
    }

    pub fn with_cost_reduction(mut self, value: f64) -> Self {
        self.cost_reduction = Some(value);
        self
    }

    pub fn with_roi_percentage(mut self, value: f64) -> Self {
        self.roi_percentage = Some(value);
        self
    }

    pub fn with_budget_burn_rate(mut self, value: f64) -> Self {
        self.budget_burn_rate = Some(value);
        self
    }

    pub fn with_forecast_completion_cost(mut self, value: f64) -> Self {
        self.forecast_completion_cost = Some(value);
        self
    }
}

/// One daily operational observation for an initiative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationalMetric {
    pub initiative_id: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub efficiency_gain_percentage: Option<f64>,
    #[serde(default)]
    pub process_cycle_time: Option<f64>,
    #[serde(default)]
    pub quality_score: Option<f64>,
    #[serde(default)]
    pub employee_satisfaction: Option<f64>,
    #[serde(default)]
    pub customer_satisfaction: Option<f64>,
}

impl OperationalMetric {
    pub fn new(initiative_id: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            initiative_id: initiative_id.into(),
            date,
            efficiency_gain_percentage: None,
            process_cycle_time: None,
            quality_score: None,
            employee_satisfaction: None,
            customer_satisfaction: None,
        }
    }

    pub fn with_efficiency_gain(mut self, value: f64) -> Self {
        self.efficiency_gain_percentage = Some(value);
        self
    }

    pub fn with_process_cycle_time(mut self, value: f64) -> Self {
        self.process_cycle_time = Some(value);
        self
    }

    pub fn with_quality_score(mut self, value: f64) -> Self {
        self.quality_score = Some(value);
        self
    }

    pub fn with_employee_satisfaction(mut self, value: f64) -> Self {
        self.employee_satisfaction = Some(value);
        self
    }

    pub fn with_customer_satisfaction(mut self, value: f64) -> Self {
        self.customer_satisfaction = Some(value);
        self
    }
}
