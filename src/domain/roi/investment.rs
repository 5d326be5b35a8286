//! Investment scenarios - how a purchase resolves to a dollar amount and a coverage fraction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{round_count, ModelParameters};
use crate::domain::foundation::{Percentage, ValidationError};

/// Packaged seat-mix options offered to the department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseOfAction {
    /// Select divisions, proof of concept.
    Pilot,
    /// Balanced scale with volume discount.
    #[default]
    Targeted,
    /// Maximum reach at the best seat price.
    Scaled,
}

impl CourseOfAction {
    /// All options in display order.
    pub const ALL: [CourseOfAction; 3] = [
        CourseOfAction::Pilot,
        CourseOfAction::Targeted,
        CourseOfAction::Scaled,
    ];

    /// Stable identifier used in configuration.
    pub fn key(&self) -> &'static str {
        match self {
            CourseOfAction::Pilot => "pilot",
            CourseOfAction::Targeted => "targeted",
            CourseOfAction::Scaled => "scaled",
        }
    }

    /// Returns the display label for this option.
    pub fn label(&self) -> &'static str {
        match self {
            CourseOfAction::Pilot => "COA 1: Pilot",
            CourseOfAction::Targeted => "COA 2: Targeted (Recommended)",
            CourseOfAction::Scaled => "COA 3: Scaled",
        }
    }
}

impl fmt::Display for CourseOfAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CourseOfAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseOfAction::ALL
            .iter()
            .copied()
            .find(|c| c.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "course_of_action",
                    format!("unknown option '{}'", s),
                )
            })
    }
}

/// A seat purchase: how many of each seat type, at what price, with what engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPlan {
    pub lead_seats: u64,
    pub ready_seats: u64,
    pub lead_price: u64,
    pub ready_price: u64,
    /// Share of seat holders who actively use the program.
    pub engagement: Percentage,
}

/// What the department is buying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InvestmentScenario {
    /// Coverage follows from seats held and engagement.
    Seats(SeatPlan),
    /// A raw dollar amount with an externally assumed coverage.
    ///
    /// Nothing ties `coverage` to `amount`: the caller states how far the
    /// budget reaches, and `amount` is only what ROI is measured against.
    /// Use `Seats` when coverage should follow from what is bought.
    Budget { amount: u64, coverage: Percentage },
}

/// An investment scenario resolved against a headcount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSummary {
    pub lead_seats: u64,
    pub ready_seats: u64,
    pub total_seats: u64,
    pub lead_price: u64,
    pub ready_price: u64,
    /// Engagement applied to seats; absent for budget scenarios.
    pub engagement: Option<Percentage>,
    pub active_users: u64,
    /// Fraction of headcount reached, always within 0.0..=1.0.
    pub coverage: f64,
    pub investment: u64,
}

impl InvestmentScenario {
    /// Resolves the scenario to an investment amount and a coverage fraction.
    ///
    /// # Edge Cases
    /// - Zero officers: coverage is 0
    /// - More active users than officers: coverage is clamped to exactly 1.0
    pub fn resolve(&self, officers: u32) -> InvestmentSummary {
        match *self {
            InvestmentScenario::Seats(plan) => {
                let total_seats = plan.lead_seats.saturating_add(plan.ready_seats);
                let active_users = round_count(total_seats as f64 * plan.engagement.as_fraction());
                let coverage = if officers > 0 {
                    (active_users as f64 / f64::from(officers)).min(1.0)
                } else {
                    0.0
                };
                let investment = plan
                    .lead_seats
                    .saturating_mul(plan.lead_price)
                    .saturating_add(plan.ready_seats.saturating_mul(plan.ready_price));

                InvestmentSummary {
                    lead_seats: plan.lead_seats,
                    ready_seats: plan.ready_seats,
                    total_seats,
                    lead_price: plan.lead_price,
                    ready_price: plan.ready_price,
                    engagement: Some(plan.engagement),
                    active_users,
                    coverage,
                    investment,
                }
            }
            InvestmentScenario::Budget { amount, coverage } => {
                let coverage = if officers > 0 { coverage.as_fraction() } else { 0.0 };
                InvestmentSummary {
                    lead_seats: 0,
                    ready_seats: 0,
                    total_seats: 0,
                    lead_price: 0,
                    ready_price: 0,
                    engagement: None,
                    active_users: round_count(f64::from(officers) * coverage),
                    coverage,
                    investment: amount,
                }
            }
        }
    }
}

/// A course-of-action choice plus any manual overrides made on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeatSelection {
    #[serde(default)]
    pub course_of_action: CourseOfAction,
    /// Add lead seats for supervisors and critical talent.
    #[serde(default)]
    pub include_lead: bool,
    #[serde(default)]
    pub manual_lead_seats: Option<u64>,
    #[serde(default)]
    pub manual_ready_seats: Option<u64>,
    #[serde(default)]
    pub manual_engagement: Option<Percentage>,
}

impl SeatSelection {
    /// Selection for a course of action with no overrides.
    pub fn new(course_of_action: CourseOfAction) -> Self {
        Self {
            course_of_action,
            ..Self::default()
        }
    }

    /// Toggles lead seats.
    pub fn with_lead(mut self, include_lead: bool) -> Self {
        self.include_lead = include_lead;
        self
    }

    /// Overrides the engagement rate.
    pub fn with_engagement(mut self, engagement: Percentage) -> Self {
        self.manual_engagement = Some(engagement);
        self
    }

    /// Overrides both seat counts.
    pub fn with_seats(mut self, lead_seats: u64, ready_seats: u64) -> Self {
        self.manual_lead_seats = Some(lead_seats);
        self.manual_ready_seats = Some(ready_seats);
        self
    }

    /// Same selection for another course of action, keeping only the engagement override.
    pub fn for_course_of_action(&self, course_of_action: CourseOfAction) -> Self {
        Self {
            course_of_action,
            include_lead: self.include_lead,
            manual_lead_seats: None,
            manual_ready_seats: None,
            manual_engagement: self.manual_engagement,
        }
    }

    /// Builds the seat plan for a headcount.
    ///
    /// Ready seats are `round(officers × ready_share)` floored at
    /// `min_ready_seats`; lead seats are `round(officers × lead_share)` when
    /// included. Manual overrides replace the computed counts outright.
    pub fn to_plan(&self, officers: u32, params: &ModelParameters) -> SeatPlan {
        let tier = params.tier(self.course_of_action);
        let lead_share = if self.include_lead { params.lead_share } else { 0.0 };

        let base_lead_seats = round_count(f64::from(officers) * lead_share);
        let base_ready_seats =
            round_count(f64::from(officers) * tier.ready_share).max(params.min_ready_seats);

        SeatPlan {
            lead_seats: self.manual_lead_seats.unwrap_or(base_lead_seats),
            ready_seats: self.manual_ready_seats.unwrap_or(base_ready_seats),
            lead_price: params.lead_price,
            ready_price: tier.ready_price,
            engagement: self.manual_engagement.unwrap_or(params.default_engagement),
        }
    }

    /// Builds the investment scenario for a headcount.
    pub fn to_scenario(&self, officers: u32, params: &ModelParameters) -> InvestmentScenario {
        InvestmentScenario::Seats(self.to_plan(officers, params))
    }
}
