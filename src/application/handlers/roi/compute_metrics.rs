//! ComputeMetricsHandler - Query handler that runs the ROI engine for one organization.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::foundation::DomainError;
use crate::domain::roi::{
    Assumptions, DerivedMetrics, InvestmentScenario, ModelParameters, RoiCalculator,
    SeatSelection,
};
use crate::ports::OrganizationDirectory;

/// How the investment is described by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentInput {
    /// A packaged course of action, resolved against the organization's headcount.
    Selection(SeatSelection),
    /// An already-resolved scenario (explicit seat plan or raw budget).
    Scenario(InvestmentScenario),
}

impl Default for InvestmentInput {
    fn default() -> Self {
        InvestmentInput::Selection(SeatSelection::default())
    }
}

/// Query to compute metrics for one organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeMetricsQuery {
    pub organization_id: String,
    pub assumptions: Assumptions,
    #[serde(default)]
    pub investment: InvestmentInput,
}

/// Result of a successful metrics query.
pub type ComputeMetricsResult = DerivedMetrics;

/// Handler for computing derived metrics.
///
/// Validates the assumptions against slider ranges, resolves the
/// organization, then delegates to the pure engine.
pub struct ComputeMetricsHandler {
    directory: Arc<dyn OrganizationDirectory>,
    params: ModelParameters,
}

impl ComputeMetricsHandler {
    pub fn new(directory: Arc<dyn OrganizationDirectory>, params: ModelParameters) -> Self {
        Self { directory, params }
    }

    pub fn handle(&self, query: ComputeMetricsQuery) -> Result<ComputeMetricsResult, DomainError> {
        query.assumptions.validate()?;

        let profile = self.directory.get(&query.organization_id)?;

        let scenario = match query.investment {
            InvestmentInput::Selection(selection) => {
                selection.to_scenario(profile.officers, &self.params)
            }
            InvestmentInput::Scenario(scenario) => scenario,
        };

        let metrics = RoiCalculator::compute(&profile, &query.assumptions, &scenario, &self.params);

        debug!(
            organization_id = %profile.id,
            officers = profile.officers,
            investment = metrics.investment.investment,
            total_savings = metrics.total_savings,
            roi_pct = metrics.roi_pct,
            "Computed ROI metrics"
        );
        if !metrics.is_net_positive() {
            warn!(
                organization_id = %profile.id,
                net_savings = metrics.net_savings,
                "Scenario does not pay for itself"
            );
        }

        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticOrganizationDirectory;
    use crate::domain::foundation::{ErrorCode, Percentage};
    use crate::domain::roi::{ConditionAssumption, ConditionCategory, CourseOfAction};

    fn handler() -> ComputeMetricsHandler {
        ComputeMetricsHandler::new(
            Arc::new(StaticOrganizationDirectory::new()),
            ModelParameters::default(),
        )
    }

    fn query(organization_id: &str) -> ComputeMetricsQuery {
        ComputeMetricsQuery {
            organization_id: organization_id.to_string(),
            assumptions: Assumptions::default(),
            investment: InvestmentInput::default(),
        }
    }

    #[test]
    fn computes_metrics_for_known_organization() {
        let metrics = handler().handle(query("lapd-wide")).unwrap();
        assert_eq!(metrics.population.officers, 8738);
        assert_eq!(metrics.investment.investment, 437_000);
        assert_eq!(metrics.net_savings, 11_473_000);
    }

    #[test]
    fn selection_is_resolved_against_profile_headcount() {
        let mut q = query("div-77th");
        q.investment = InvestmentInput::Selection(SeatSelection::new(CourseOfAction::Scaled));

        let metrics = handler().handle(q).unwrap();

        // round(420 × 0.75) = 315, floored to 500
        assert_eq!(metrics.investment.ready_seats, 500);
        assert_eq!(metrics.investment.ready_price, 150);
    }

    #[test]
    fn explicit_scenario_is_used_as_is() {
        let mut q = query("metro");
        q.investment = InvestmentInput::Scenario(InvestmentScenario::Budget {
            amount: 0,
            coverage: Percentage::new(50),
        });

        let metrics = handler().handle(q).unwrap();
        assert_eq!(metrics.investment.investment, 0);
        assert_eq!(metrics.roi_pct, 0.0);
    }

    #[test]
    fn returns_not_found_for_unknown_organization() {
        let err = handler().handle(query("div-atlantis")).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrganizationNotFound);
    }

    #[test]
    fn rejects_assumptions_outside_slider_range() {
        let mut sud = ConditionAssumption::calibrated(ConditionCategory::SubstanceUse);
        sud.effectiveness = Percentage::new(90);

        let mut q = query("lapd-wide");
        q.assumptions = Assumptions::default().with_condition(sud);

        let err = handler().handle(q).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(
            err.details.get("field"),
            Some(&"substance_use.effectiveness".to_string())
        );
    }

    #[test]
    fn query_deserializes_with_default_investment() {
        let json = serde_json::json!({
            "organization_id": "div-newton",
            "assumptions": Assumptions::default(),
        });
        let q: ComputeMetricsQuery = serde_json::from_value(json).unwrap();
        assert_eq!(q.investment, InvestmentInput::default());
    }
}
