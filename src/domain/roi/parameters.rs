//! Model parameters - the fixed constants that distinguish one page variant from another.
//!
//! Every variant of the calculator shares the same arithmetic; what differs is
//! the replacement cost, incidence rates, seat pricing and so on. Those live
//! here so a variant is just a different `ModelParameters` value.

use serde::{Deserialize, Serialize};

use super::CourseOfAction;
use crate::domain::foundation::{Percentage, ValidationError};

/// Ready-seat share and price for one course of action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierPricing {
    /// Fraction of headcount given a ready seat (0.0 to 1.0).
    pub ready_share: f64,
    /// Price per ready seat in whole dollars.
    pub ready_price: u64,
}

/// Ready-seat tiers keyed by course of action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourseOfActionTiers {
    pub pilot: TierPricing,
    pub targeted: TierPricing,
    pub scaled: TierPricing,
}

impl Default for CourseOfActionTiers {
    fn default() -> Self {
        Self {
            pilot: TierPricing {
                ready_share: 0.15,
                ready_price: 250,
            },
            targeted: TierPricing {
                ready_share: 0.25,
                ready_price: 200,
            },
            scaled: TierPricing {
                ready_share: 0.75,
                ready_price: 150,
            },
        }
    }
}

/// Constants consumed by the engine alongside the user-adjustable assumptions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParameters {
    /// Cost to recruit, train and field a replacement officer.
    pub replacement_cost: u64,
    /// Annual attrition as a fraction of headcount (reported, not costed).
    pub attrition_rate: f64,
    /// Annual discipline/misconduct cases as a fraction of headcount.
    pub discipline_incidence: f64,
    /// Average cost of a discipline case, settlements included.
    pub discipline_cost_per_case: u64,
    /// Fraction of discipline cases prevented among officers reached.
    pub discipline_effectiveness: f64,
    /// Price per lead seat.
    pub lead_price: u64,
    /// Fraction of headcount given a lead seat when lead seats are included.
    pub lead_share: f64,
    /// Floor on ready seats for any course of action.
    pub min_ready_seats: u64,
    /// Share of seat holders expected to actively use the program.
    pub default_engagement: Percentage,
    /// Average claim cost reported when no claims are modeled.
    pub fallback_avg_claim_cost: u64,
    pub tiers: CourseOfActionTiers,
}

impl ModelParameters {
    /// Returns the ready-seat tier for a course of action.
    pub fn tier(&self, course_of_action: CourseOfAction) -> TierPricing {
        match course_of_action {
            CourseOfAction::Pilot => self.tiers.pilot,
            CourseOfAction::Targeted => self.tiers.targeted,
            CourseOfAction::Scaled => self.tiers.scaled,
        }
    }

    /// Checks that every rate is a fraction and every cost is positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.replacement_cost == 0 {
            return Err(ValidationError::out_of_range(
                "replacement_cost",
                1,
                i64::MAX,
                0,
            ));
        }
        check_fraction("attrition_rate", self.attrition_rate)?;
        check_fraction("discipline_incidence", self.discipline_incidence)?;
        check_fraction("discipline_effectiveness", self.discipline_effectiveness)?;
        check_fraction("lead_share", self.lead_share)?;
        check_fraction("tiers.pilot.ready_share", self.tiers.pilot.ready_share)?;
        check_fraction("tiers.targeted.ready_share", self.tiers.targeted.ready_share)?;
        check_fraction("tiers.scaled.ready_share", self.tiers.scaled.ready_share)?;
        Ok(())
    }
}

fn check_fraction(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::invalid_format(
            field,
            format!("expected a fraction between 0 and 1, got {}", value),
        ));
    }
    Ok(())
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            replacement_cost: 150_000,
            attrition_rate: 0.076,
            discipline_incidence: 0.04,
            discipline_cost_per_case: 55_000,
            discipline_effectiveness: 0.22,
            lead_price: 5_785,
            lead_share: 0.10,
            min_ready_seats: 500,
            default_engagement: Percentage::new(65),
            fallback_avg_claim_cost: 65_000,
            tiers: CourseOfActionTiers::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ModelParameters::default().validate().is_ok());
    }

    #[test]
    fn tier_lookup_matches_course_of_action() {
        let params = ModelParameters::default();
        assert_eq!(params.tier(CourseOfAction::Pilot).ready_price, 250);
        assert_eq!(params.tier(CourseOfAction::Targeted).ready_price, 200);
        assert_eq!(params.tier(CourseOfAction::Scaled).ready_price, 150);
    }

    #[test]
    fn validate_rejects_zero_replacement_cost() {
        let params = ModelParameters {
            replacement_cost: 0,
            ..ModelParameters::default()
        };
        assert_eq!(params.validate().unwrap_err().field(), "replacement_cost");
    }

    #[test]
    fn validate_rejects_rate_above_one() {
        let params = ModelParameters {
            attrition_rate: 7.6,
            ..ModelParameters::default()
        };
        assert_eq!(params.validate().unwrap_err().field(), "attrition_rate");
    }

    #[test]
    fn validate_rejects_nan_rate() {
        let params = ModelParameters {
            discipline_effectiveness: f64::NAN,
            ..ModelParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn partial_overrides_deserialize_over_defaults() {
        let params: ModelParameters =
            serde_json::from_str(r#"{"replacement_cost": 120000}"#).unwrap();
        assert_eq!(params.replacement_cost, 120_000);
        assert_eq!(params.lead_price, 5_785);
        assert_eq!(params.default_engagement.value(), 65);
    }
}
