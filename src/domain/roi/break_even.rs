//! Break-even percentage with an explicit not-applicable sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The share of a category's modeled savings needed to cover the whole investment.
///
/// `NotApplicable` replaces the division whenever either side is zero, so the
/// value is always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "percent", rename_all = "snake_case")]
pub enum BreakEven {
    Percent(f64),
    NotApplicable,
}

impl BreakEven {
    /// Computes `investment / savings × 100`.
    ///
    /// # Edge Cases
    /// - Zero savings: `NotApplicable` (no division)
    /// - Zero investment: `NotApplicable`
    pub fn compute(investment: u64, savings: u64) -> Self {
        if investment == 0 || savings == 0 {
            return BreakEven::NotApplicable;
        }
        let pct = investment as f64 / savings as f64 * 100.0;
        if pct.is_finite() {
            BreakEven::Percent(pct)
        } else {
            BreakEven::NotApplicable
        }
    }

    /// Returns the percentage, if applicable.
    pub fn percent(&self) -> Option<f64> {
        match self {
            BreakEven::Percent(pct) => Some(*pct),
            BreakEven::NotApplicable => None,
        }
    }

    /// True when this category's savings alone pay back the investment.
    pub fn is_covered(&self) -> bool {
        matches!(self, BreakEven::Percent(pct) if *pct <= 100.0)
    }
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percent() {
            Some(pct) => write!(f, "{:.1}%", pct),
            None => f.write_str("N/A"),
        }
    }
}
