//! DerivedMetrics - the engine's only output.
//!
//! Rebuilt from scratch on every input change; nothing here is ever updated
//! in place.

use serde::{Deserialize, Serialize};

use super::{BreakEven, ConditionCategory, InvestmentSummary};

/// Affected-population figures before and after the comorbidity adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationMetrics {
    pub officers: u32,
    /// Sum of per-condition affected counts, double-counting overlaps.
    pub raw_total_affected: u64,
    /// Deduplicated affected count after the overlap adjustment.
    pub unique_affected: u64,
    /// Officers removed as double-counted (`raw_total_affected - unique_affected`).
    pub comorbidity_reduction: u64,
    /// `unique_affected / raw_total_affected`, or 0 when nobody is affected.
    pub adjustment_factor: f64,
}

/// Per-condition breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionMetrics {
    pub category: ConditionCategory,
    pub raw_affected: u64,
    /// Affected count after the comorbidity adjustment.
    pub affected: u64,
    pub claims: u64,
    pub avg_claim_cost: u64,
    /// Baseline workers' comp cost (`claims × avg_claim_cost`).
    pub claim_cost: u64,
    pub separations: u64,
    pub claims_prevented: u64,
    /// Workers' comp savings (`claims_prevented × avg_claim_cost`).
    pub savings: u64,
    pub break_even: BreakEven,
}

/// Workers' compensation totals across all conditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkersCompMetrics {
    pub baseline_claims: u64,
    pub baseline_cost: u64,
    /// Cost-weighted average claim, or the configured fallback when there are no claims.
    pub avg_claim_cost: u64,
    pub claims_prevented: u64,
    pub savings: u64,
    pub break_even: BreakEven,
}

/// Behavioral-health separations and the retention savings from preventing them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetentionMetrics {
    /// Department-wide attrition at the configured rate, for context.
    pub baseline_separations: u64,
    pub behavioral_separations: u64,
    /// Separation-weighted mean effectiveness (0.0 to 1.0).
    pub weighted_effectiveness: f64,
    pub separations_prevented: u64,
    pub replacement_cost: u64,
    /// `behavioral_separations × replacement_cost`.
    pub baseline_cost: u64,
    pub savings: u64,
    pub break_even: BreakEven,
}

/// Discipline and misconduct cost avoidance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisciplineMetrics {
    pub baseline_cases: u64,
    pub cost_per_case: u64,
    pub baseline_cost: u64,
    pub cases_prevented: u64,
    pub savings: u64,
    pub break_even: BreakEven,
}

/// Every figure the calculator displays, derived from one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub population: PopulationMetrics,
    pub conditions: Vec<ConditionMetrics>,
    pub investment: InvestmentSummary,
    pub workers_comp: WorkersCompMetrics,
    pub retention: RetentionMetrics,
    pub discipline: DisciplineMetrics,
    /// Workers' comp + retention + discipline baseline cost.
    pub total_baseline_cost: u64,
    pub total_savings: u64,
    /// `total_savings - investment`; may be negative.
    pub net_savings: i64,
    /// `net_savings / investment × 100`, or 0 when nothing is invested.
    pub roi_pct: f64,
}

impl DerivedMetrics {
    /// Returns the breakdown for a category, if it was modeled.
    pub fn condition(&self, category: ConditionCategory) -> Option<&ConditionMetrics> {
        self.conditions.iter().find(|c| c.category == category)
    }

    /// True when savings exceed the investment.
    pub fn is_net_positive(&self) -> bool {
        self.net_savings > 0
    }
}
