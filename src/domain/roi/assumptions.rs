//! Behavioral-health assumptions - the user-adjustable half of the model input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Percentage, ValidationError};

/// Slider bounds enforced when assumptions are collected from a user.
pub const PREVALENCE_RANGE: (u8, u8) = (10, 35);
pub const EFFECTIVENESS_RANGE: (u8, u8) = (15, 75);
pub const FILING_RATE_RANGE: (u8, u8) = (5, 20);
pub const SEPARATION_RATE_RANGE: (u8, u8) = (0, 50);
pub const COMORBIDITY_RANGE: (u8, u8) = (0, 50);
pub const AVG_CLAIM_COST_RANGE: (u64, u64) = (30_000, 120_000);

/// Behavioral-health condition tracked by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    Ptsd,
    Depression,
    Anxiety,
    SubstanceUse,
}

impl ConditionCategory {
    /// All categories in display order.
    pub const ALL: [ConditionCategory; 4] = [
        ConditionCategory::Ptsd,
        ConditionCategory::Depression,
        ConditionCategory::Anxiety,
        ConditionCategory::SubstanceUse,
    ];

    /// Stable identifier used in field paths and config keys.
    pub fn key(&self) -> &'static str {
        match self {
            ConditionCategory::Ptsd => "ptsd",
            ConditionCategory::Depression => "depression",
            ConditionCategory::Anxiety => "anxiety",
            ConditionCategory::SubstanceUse => "substance_use",
        }
    }

    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            ConditionCategory::Ptsd => "PTSD & Trauma",
            ConditionCategory::Depression => "Depression & Burnout",
            ConditionCategory::Anxiety => "Anxiety & Stress",
            ConditionCategory::SubstanceUse => "Substance Use",
        }
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ConditionCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConditionCategory::ALL
            .iter()
            .copied()
            .find(|c| c.key() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("condition", format!("unknown condition '{}'", s))
            })
    }
}

/// Independent assumptions for one condition category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionAssumption {
    pub category: ConditionCategory,
    /// Share of headcount affected.
    pub prevalence: Percentage,
    /// Share of adverse outcomes neutralized among officers reached.
    pub effectiveness: Percentage,
    /// Share of affected officers who file a workers' comp claim.
    pub filing_rate: Percentage,
    /// Average workers' comp claim cost in whole dollars.
    pub avg_claim_cost: u64,
    /// Share of affected officers who separate.
    pub separation_rate: Percentage,
}

impl ConditionAssumption {
    /// Creates an assumption with every rate at zero.
    pub fn zeroed(category: ConditionCategory) -> Self {
        Self {
            category,
            prevalence: Percentage::ZERO,
            effectiveness: Percentage::ZERO,
            filing_rate: Percentage::ZERO,
            avg_claim_cost: 0,
            separation_rate: Percentage::ZERO,
        }
    }

    /// Department-calibrated defaults for a category.
    pub fn calibrated(category: ConditionCategory) -> Self {
        // (prevalence, effectiveness, filing, avg cost, separation)
        let (prevalence, effectiveness, filing, cost, separation) = match category {
            ConditionCategory::Ptsd => (19, 25, 12, 95_000, 14),
            ConditionCategory::Depression => (19, 25, 10, 60_000, 16),
            ConditionCategory::Anxiety => (15, 20, 8, 50_000, 12),
            ConditionCategory::SubstanceUse => (26, 67, 15, 45_000, 28),
        };
        Self {
            category,
            prevalence: Percentage::new(prevalence),
            effectiveness: Percentage::new(effectiveness),
            filing_rate: Percentage::new(filing),
            avg_claim_cost: cost,
            separation_rate: Percentage::new(separation),
        }
    }

    /// Checks each field against its slider range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let key = self.category.key();
        self.prevalence.ensure_within(
            format!("{}.prevalence", key),
            PREVALENCE_RANGE.0,
            PREVALENCE_RANGE.1,
        )?;
        self.effectiveness.ensure_within(
            format!("{}.effectiveness", key),
            EFFECTIVENESS_RANGE.0,
            EFFECTIVENESS_RANGE.1,
        )?;
        self.filing_rate.ensure_within(
            format!("{}.filing_rate", key),
            FILING_RATE_RANGE.0,
            FILING_RATE_RANGE.1,
        )?;
        self.separation_rate.ensure_within(
            format!("{}.separation_rate", key),
            SEPARATION_RATE_RANGE.0,
            SEPARATION_RATE_RANGE.1,
        )?;

        let (min_cost, max_cost) = AVG_CLAIM_COST_RANGE;
        if self.avg_claim_cost < min_cost || self.avg_claim_cost > max_cost {
            return Err(ValidationError::out_of_range(
                format!("{}.avg_claim_cost", key),
                min_cost as i64,
                max_cost as i64,
                i64::try_from(self.avg_claim_cost).unwrap_or(i64::MAX),
            ));
        }
        Ok(())
    }
}

/// The full, immutable assumption set handed to the engine on every recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assumptions {
    pub conditions: Vec<ConditionAssumption>,
    /// Expected overlap between conditions, used to deduplicate affected counts.
    pub comorbidity_overlap: Percentage,
}

impl Assumptions {
    /// Creates an assumption set from explicit parts.
    pub fn new(conditions: Vec<ConditionAssumption>, comorbidity_overlap: Percentage) -> Self {
        Self {
            conditions,
            comorbidity_overlap,
        }
    }

    /// Returns the assumption for a category, if present.
    pub fn condition(&self, category: ConditionCategory) -> Option<&ConditionAssumption> {
        self.conditions.iter().find(|c| c.category == category)
    }

    /// Replaces (or appends) the assumption for the given category.
    pub fn with_condition(mut self, assumption: ConditionAssumption) -> Self {
        match self
            .conditions
            .iter_mut()
            .find(|c| c.category == assumption.category)
        {
            Some(existing) => *existing = assumption,
            None => self.conditions.push(assumption),
        }
        self
    }

    /// Replaces the comorbidity overlap.
    pub fn with_comorbidity_overlap(mut self, overlap: Percentage) -> Self {
        self.comorbidity_overlap = overlap;
        self
    }

    /// Validates at the input-collection boundary.
    ///
    /// The engine tolerates any percentage; this only reports values a
    /// user could not have produced with the sliders.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for condition in &self.conditions {
            condition.validate()?;
        }
        self.comorbidity_overlap.ensure_within(
            "comorbidity_overlap",
            COMORBIDITY_RANGE.0,
            COMORBIDITY_RANGE.1,
        )
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            conditions: ConditionCategory::ALL
                .iter()
                .map(|&c| ConditionAssumption::calibrated(c))
                .collect(),
            comorbidity_overlap: Percentage::new(35),
        }
    }
}
