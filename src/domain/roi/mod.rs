//! ROI Module - the pure computation engine behind the calculator.
//!
//! # Components
//!
//! - `Assumptions` - condition prevalence/effectiveness/claims/separations plus comorbidity
//! - `ModelParameters` - per-variant constants (replacement cost, seat pricing, incidence rates)
//! - `InvestmentScenario` / `SeatSelection` - what is bought and how far it reaches
//! - `RoiCalculator` - maps the above to `DerivedMetrics`
//! - `BreakEven` - per-category break-even with a not-applicable sentinel
//!
//! # Design Philosophy
//!
//! Everything here is a pure function of its arguments. There is no hidden
//! state, no I/O and no logging, so identical inputs always produce identical
//! output and concurrent callers need no coordination.

mod assumptions;
mod break_even;
mod comparison;
mod engine;
mod investment;
mod metrics;
mod parameters;

pub use assumptions::{
    Assumptions, ConditionAssumption, ConditionCategory, AVG_CLAIM_COST_RANGE, COMORBIDITY_RANGE,
    EFFECTIVENESS_RANGE, FILING_RATE_RANGE, PREVALENCE_RANGE, SEPARATION_RATE_RANGE,
};
pub use break_even::BreakEven;
pub use comparison::ScenarioSummary;
pub use engine::RoiCalculator;
pub(crate) use engine::round_count;
pub use investment::{
    CourseOfAction, InvestmentScenario, InvestmentSummary, SeatPlan, SeatSelection,
};
pub use metrics::{
    ConditionMetrics, DerivedMetrics, DisciplineMetrics, PopulationMetrics, RetentionMetrics,
    WorkersCompMetrics,
};
pub use parameters::{CourseOfActionTiers, ModelParameters, TierPricing};
