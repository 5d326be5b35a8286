//! Side-by-side comparison of the packaged courses of action.

use serde::{Deserialize, Serialize};

use super::{Assumptions, CourseOfAction, DerivedMetrics, ModelParameters, RoiCalculator, SeatSelection};
use crate::domain::organization::OrganizationProfile;

/// Headline figures for one course of action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub course_of_action: CourseOfAction,
    pub lead_seats: u64,
    pub ready_seats: u64,
    pub total_seats: u64,
    pub active_users: u64,
    pub coverage: f64,
    pub investment: u64,
    pub retention_savings: u64,
    pub workers_comp_savings: u64,
    pub discipline_savings: u64,
    pub total_savings: u64,
    pub net_savings: i64,
    pub roi_pct: f64,
}

impl ScenarioSummary {
    /// Extracts the headline figures from a full computation.
    pub fn from_metrics(course_of_action: CourseOfAction, metrics: &DerivedMetrics) -> Self {
        Self {
            course_of_action,
            lead_seats: metrics.investment.lead_seats,
            ready_seats: metrics.investment.ready_seats,
            total_seats: metrics.investment.total_seats,
            active_users: metrics.investment.active_users,
            coverage: metrics.investment.coverage,
            investment: metrics.investment.investment,
            retention_savings: metrics.retention.savings,
            workers_comp_savings: metrics.workers_comp.savings,
            discipline_savings: metrics.discipline.savings,
            total_savings: metrics.total_savings,
            net_savings: metrics.net_savings,
            roi_pct: metrics.roi_pct,
        }
    }
}

impl RoiCalculator {
    /// Runs every course of action against the same assumptions.
    ///
    /// Manual seat overrides belong to the currently selected option only and
    /// are dropped; the lead toggle and any engagement override carry over.
    pub fn compare_courses_of_action(
        profile: &OrganizationProfile,
        assumptions: &Assumptions,
        selection: &SeatSelection,
        params: &ModelParameters,
    ) -> Vec<ScenarioSummary> {
        CourseOfAction::ALL
            .iter()
            .map(|&coa| {
                let scenario = selection
                    .for_course_of_action(coa)
                    .to_scenario(profile.officers, params);
                let metrics = Self::compute(profile, assumptions, &scenario, params);
                ScenarioSummary::from_metrics(coa, &metrics)
            })
            .collect()
    }

    /// Picks the option with the highest ROI; earlier options win ties.
    pub fn best_course_of_action(summaries: &[ScenarioSummary]) -> Option<&ScenarioSummary> {
        summaries.iter().fold(None, |best, candidate| match best {
            Some(current) if current.roi_pct >= candidate.roi_pct => Some(current),
            _ => Some(candidate),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Percentage;
    use crate::domain::organization::find_built_in;

    fn department() -> &'static OrganizationProfile {
        find_built_in("lapd-wide").unwrap()
    }

    #[test]
    fn compares_all_three_options_in_order() {
        let summaries = RoiCalculator::compare_courses_of_action(
            department(),
            &Assumptions::default(),
            &SeatSelection::default(),
            &ModelParameters::default(),
        );

        let order: Vec<_> = summaries.iter().map(|s| s.course_of_action).collect();
        assert_eq!(order, CourseOfAction::ALL.to_vec());
    }

    #[test]
    fn targeted_summary_matches_full_computation() {
        let params = ModelParameters::default();
        let assumptions = Assumptions::default();
        let summaries = RoiCalculator::compare_courses_of_action(
            department(),
            &assumptions,
            &SeatSelection::default(),
            &params,
        );

        let targeted = &summaries[1];
        assert_eq!(targeted.investment, 437_000);
        assert_eq!(targeted.total_savings, 11_910_000);
        assert_eq!(targeted.net_savings, 11_473_000);
    }

    #[test]
    fn seat_overrides_do_not_leak_into_comparison() {
        let params = ModelParameters::default();
        let overridden = SeatSelection::new(CourseOfAction::Targeted).with_seats(0, 1);

        let with_override = RoiCalculator::compare_courses_of_action(
            department(),
            &Assumptions::default(),
            &overridden,
            &params,
        );
        let without = RoiCalculator::compare_courses_of_action(
            department(),
            &Assumptions::default(),
            &SeatSelection::default(),
            &params,
        );

        assert_eq!(with_override, without);
    }

    #[test]
    fn engagement_override_applies_to_every_option() {
        let selection = SeatSelection::default().with_engagement(Percentage::new(100));
        let summaries = RoiCalculator::compare_courses_of_action(
            department(),
            &Assumptions::default(),
            &selection,
            &ModelParameters::default(),
        );

        for summary in &summaries {
            assert_eq!(summary.active_users, summary.total_seats);
        }
    }

    #[test]
    fn best_course_of_action_picks_highest_roi() {
        let summaries = RoiCalculator::compare_courses_of_action(
            department(),
            &Assumptions::default(),
            &SeatSelection::default(),
            &ModelParameters::default(),
        );

        let best = RoiCalculator::best_course_of_action(&summaries).unwrap();
        assert!(summaries.iter().all(|s| s.roi_pct <= best.roi_pct));
    }

    #[test]
    fn best_course_of_action_empty_is_none() {
        assert!(RoiCalculator::best_course_of_action(&[]).is_none());
    }
}
