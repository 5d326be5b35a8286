//! RoiCalculator - the pure ROI computation engine.
//!
//! Maps one organization headcount, a set of condition assumptions, a
//! comorbidity overlap and an investment scenario to a `DerivedMetrics`.
//! Counts are rounded at every stage, and later stages consume the rounded
//! values, so the rounding points below are part of the contract.

use super::{
    Assumptions, BreakEven, ConditionAssumption, ConditionMetrics, DerivedMetrics,
    DisciplineMetrics, InvestmentScenario, ModelParameters, PopulationMetrics, RetentionMetrics,
    WorkersCompMetrics,
};
use crate::domain::foundation::Percentage;
use crate::domain::organization::OrganizationProfile;

/// Rounds a non-negative figure to the nearest whole count, half away from zero.
///
/// Non-finite and negative inputs collapse to 0 so a bad intermediate can
/// never surface as a huge or wrapped count.
pub(crate) fn round_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

/// `investment - savings` without overflow.
fn signed_difference(minuend: u64, subtrahend: u64) -> i64 {
    let diff = i128::from(minuend) - i128::from(subtrahend);
    diff.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// ROI percentage, 0 when nothing is invested.
pub(crate) fn roi_percent(net_savings: i64, investment: u64) -> f64 {
    if investment == 0 {
        return 0.0;
    }
    let roi = net_savings as f64 / investment as f64 * 100.0;
    if roi.is_finite() {
        roi
    } else {
        0.0
    }
}

/// Stateless ROI computation.
pub struct RoiCalculator;

impl RoiCalculator {
    /// Computes every derived figure from scratch.
    ///
    /// # Algorithm
    /// 1. `raw_c = round(officers × prevalence_c/100)`
    /// 2. `unique = round(Σraw × (1 − overlap/100))`, `affected_c = round(raw_c × unique/Σraw)`
    /// 3. `claims_c`, `separations_c` = `round(affected_c × rate/100)`
    /// 4. `prevented_c = round(claims_c × effectiveness_c/100 × coverage)`
    /// 5. Retention uses the separation-weighted effectiveness
    /// 6. `roi = (savings − investment) / investment × 100`
    ///
    /// # Edge Cases
    /// - Nobody affected: adjustment factor and weighted effectiveness are 0
    /// - Zero investment: ROI is 0, every break-even is `NotApplicable`
    /// - Zero savings in a category: its break-even is `NotApplicable`
    pub fn compute_metrics(
        profile: &OrganizationProfile,
        conditions: &[ConditionAssumption],
        comorbidity_overlap: Percentage,
        investment: &InvestmentScenario,
        params: &ModelParameters,
    ) -> DerivedMetrics {
        let officers = profile.officers;
        let headcount = f64::from(officers);

        // Comorbidity-adjusted affected population
        let raw_affected: Vec<u64> = conditions
            .iter()
            .map(|c| round_count(headcount * c.prevalence.as_fraction()))
            .collect();
        let raw_total_affected: u64 = raw_affected.iter().sum();
        let overlap_multiplier = 1.0 - comorbidity_overlap.as_fraction();
        let unique_affected = round_count(raw_total_affected as f64 * overlap_multiplier);
        let adjustment_factor = if raw_total_affected > 0 {
            unique_affected as f64 / raw_total_affected as f64
        } else {
            0.0
        };

        let summary = investment.resolve(officers);
        let coverage = summary.coverage;
        let invested = summary.investment;

        let mut condition_metrics = Vec::with_capacity(conditions.len());
        for (assumption, &raw) in conditions.iter().zip(&raw_affected) {
            let affected = round_count(raw as f64 * adjustment_factor);
            let claims = round_count(affected as f64 * assumption.filing_rate.as_fraction());
            let separations =
                round_count(affected as f64 * assumption.separation_rate.as_fraction());
            let claims_prevented = round_count(
                claims as f64 * assumption.effectiveness.as_fraction() * coverage,
            );
            let savings = claims_prevented.saturating_mul(assumption.avg_claim_cost);

            condition_metrics.push(ConditionMetrics {
                category: assumption.category,
                raw_affected: raw,
                affected,
                claims,
                avg_claim_cost: assumption.avg_claim_cost,
                claim_cost: claims.saturating_mul(assumption.avg_claim_cost),
                separations,
                claims_prevented,
                savings,
                break_even: BreakEven::compute(invested, savings),
            });
        }

        let workers_comp = Self::workers_comp(&condition_metrics, invested, params);
        let retention = Self::retention(
            conditions,
            &condition_metrics,
            headcount,
            coverage,
            invested,
            params,
        );
        let discipline = Self::discipline(headcount, coverage, invested, params);

        let total_baseline_cost = workers_comp
            .baseline_cost
            .saturating_add(retention.baseline_cost)
            .saturating_add(discipline.baseline_cost);
        let total_savings = workers_comp
            .savings
            .saturating_add(retention.savings)
            .saturating_add(discipline.savings);
        let net_savings = signed_difference(total_savings, invested);

        DerivedMetrics {
            population: PopulationMetrics {
                officers,
                raw_total_affected,
                unique_affected,
                comorbidity_reduction: raw_total_affected.saturating_sub(unique_affected),
                adjustment_factor,
            },
            conditions: condition_metrics,
            investment: summary,
            workers_comp,
            retention,
            discipline,
            total_baseline_cost,
            total_savings,
            net_savings,
            roi_pct: roi_percent(net_savings, invested),
        }
    }

    /// Convenience wrapper taking the bundled assumption set.
    pub fn compute(
        profile: &OrganizationProfile,
        assumptions: &Assumptions,
        investment: &InvestmentScenario,
        params: &ModelParameters,
    ) -> DerivedMetrics {
        Self::compute_metrics(
            profile,
            &assumptions.conditions,
            assumptions.comorbidity_overlap,
            investment,
            params,
        )
    }

    fn workers_comp(
        conditions: &[ConditionMetrics],
        invested: u64,
        params: &ModelParameters,
    ) -> WorkersCompMetrics {
        let baseline_claims: u64 = conditions.iter().map(|c| c.claims).sum();
        let baseline_cost = conditions
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(c.claim_cost));
        let claims_prevented: u64 = conditions.iter().map(|c| c.claims_prevented).sum();
        let savings = conditions
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(c.savings));

        let avg_claim_cost = if baseline_claims > 0 {
            round_count(baseline_cost as f64 / baseline_claims as f64)
        } else {
            params.fallback_avg_claim_cost
        };

        WorkersCompMetrics {
            baseline_claims,
            baseline_cost,
            avg_claim_cost,
            claims_prevented,
            savings,
            break_even: BreakEven::compute(invested, savings),
        }
    }

    fn retention(
        assumptions: &[ConditionAssumption],
        conditions: &[ConditionMetrics],
        headcount: f64,
        coverage: f64,
        invested: u64,
        params: &ModelParameters,
    ) -> RetentionMetrics {
        let behavioral_separations: u64 = conditions.iter().map(|c| c.separations).sum();

        let weighted_effectiveness = if behavioral_separations > 0 {
            let weighted: f64 = conditions
                .iter()
                .zip(assumptions)
                .map(|(m, a)| m.separations as f64 * a.effectiveness.as_fraction())
                .sum();
            let ratio = weighted / behavioral_separations as f64;
            if ratio.is_finite() {
                ratio
            } else {
                0.0
            }
        } else {
            0.0
        };

        let separations_prevented =
            round_count(behavioral_separations as f64 * weighted_effectiveness * coverage);
        let savings = separations_prevented.saturating_mul(params.replacement_cost);

        RetentionMetrics {
            baseline_separations: round_count(headcount * params.attrition_rate),
            behavioral_separations,
            weighted_effectiveness,
            separations_prevented,
            replacement_cost: params.replacement_cost,
            baseline_cost: behavioral_separations.saturating_mul(params.replacement_cost),
            savings,
            break_even: BreakEven::compute(invested, savings),
        }
    }

    fn discipline(
        headcount: f64,
        coverage: f64,
        invested: u64,
        params: &ModelParameters,
    ) -> DisciplineMetrics {
        let baseline_cases = round_count(headcount * params.discipline_incidence);
        let cases_prevented =
            round_count(baseline_cases as f64 * params.discipline_effectiveness * coverage);
        let savings = cases_prevented.saturating_mul(params.discipline_cost_per_case);

        DisciplineMetrics {
            baseline_cases,
            cost_per_case: params.discipline_cost_per_case,
            baseline_cost: baseline_cases.saturating_mul(params.discipline_cost_per_case),
            cases_prevented,
            savings,
            break_even: BreakEven::compute(invested, savings),
        }
    }
}
