//! Scenario configuration
//!
//! The organization and investment selection evaluated at startup.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Percentage;
use crate::domain::organization::DEFAULT_ORGANIZATION_ID;
use crate::domain::roi::{Assumptions, CourseOfAction, SeatSelection, COMORBIDITY_RANGE};

/// Scenario configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    /// Organization id from the directory
    #[serde(default = "default_organization")]
    pub organization: String,

    /// Course of action key: `pilot`, `targeted` or `scaled`
    #[serde(default = "default_course_of_action")]
    pub course_of_action: String,

    /// Add lead seats for supervisors
    #[serde(default)]
    pub include_lead: bool,

    /// Manual lead seat count
    pub lead_seats: Option<u64>,

    /// Manual ready seat count
    pub ready_seats: Option<u64>,

    /// Manual engagement percentage
    pub engagement: Option<u8>,

    /// Comorbidity overlap percentage
    pub comorbidity_overlap: Option<u8>,
}

impl ScenarioConfig {
    /// Parsed course of action
    pub fn course_of_action(&self) -> Result<CourseOfAction, ValidationError> {
        self.course_of_action
            .parse()
            .map_err(|_| ValidationError::UnknownCourseOfAction(self.course_of_action.clone()))
    }

    /// Seat selection with any manual overrides applied
    pub fn selection(&self) -> Result<SeatSelection, ValidationError> {
        let mut selection =
            SeatSelection::new(self.course_of_action()?).with_lead(self.include_lead);
        selection.manual_lead_seats = self.lead_seats;
        selection.manual_ready_seats = self.ready_seats;
        if let Some(engagement) = self.engagement {
            let engagement = Percentage::try_new(engagement)
                .map_err(|_| ValidationError::InvalidEngagement(engagement))?;
            selection = selection.with_engagement(engagement);
        }
        Ok(selection)
    }

    /// Default assumptions with the configured comorbidity overlap
    pub fn assumptions(&self) -> Assumptions {
        let assumptions = Assumptions::default();
        match self.comorbidity_overlap {
            Some(overlap) => assumptions.with_comorbidity_overlap(Percentage::new(overlap)),
            None => assumptions,
        }
    }

    /// Validate scenario configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.organization.trim().is_empty() {
            return Err(ValidationError::EmptyOrganization);
        }
        self.selection()?;
        if let Some(overlap) = self.comorbidity_overlap {
            if overlap > COMORBIDITY_RANGE.1 {
                return Err(ValidationError::InvalidComorbidity(overlap));
            }
        }
        Ok(())
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            course_of_action: default_course_of_action(),
            include_lead: false,
            lead_seats: None,
            ready_seats: None,
            engagement: None,
            comorbidity_overlap: None,
        }
    }
}

fn default_organization() -> String {
    DEFAULT_ORGANIZATION_ID.to_string()
}

fn default_course_of_action() -> String {
    CourseOfAction::default().key().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_config_defaults() {
        let config = ScenarioConfig::default();
        assert_eq!(config.organization, "lapd-wide");
        assert_eq!(config.course_of_action().unwrap(), CourseOfAction::Targeted);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_selection_applies_overrides() {
        let config = ScenarioConfig {
            course_of_action: "Scaled".to_string(),
            include_lead: true,
            ready_seats: Some(1_000),
            engagement: Some(80),
            ..ScenarioConfig::default()
        };

        let selection = config.selection().unwrap();
        assert_eq!(selection.course_of_action, CourseOfAction::Scaled);
        assert!(selection.include_lead);
        assert_eq!(selection.manual_ready_seats, Some(1_000));
        assert_eq!(selection.manual_lead_seats, None);
        assert_eq!(selection.manual_engagement, Some(Percentage::new(80)));
    }

    #[test]
    fn test_unknown_course_of_action_rejected() {
        let config = ScenarioConfig {
            course_of_action: "rapid".to_string(),
            ..ScenarioConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnknownCourseOfAction(name)) if name == "rapid"
        ));
    }

    #[test]
    fn test_engagement_over_100_rejected() {
        let config = ScenarioConfig {
            engagement: Some(120),
            ..ScenarioConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidEngagement(120))
        ));
    }

    #[test]
    fn test_comorbidity_over_50_rejected() {
        let config = ScenarioConfig {
            comorbidity_overlap: Some(60),
            ..ScenarioConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidComorbidity(60))
        ));
    }

    #[test]
    fn test_assumptions_use_comorbidity_override() {
        let config = ScenarioConfig {
            comorbidity_overlap: Some(20),
            ..ScenarioConfig::default()
        };
        assert_eq!(
            config.assumptions().comorbidity_overlap,
            Percentage::new(20)
        );
    }

    #[test]
    fn test_blank_organization_rejected() {
        let config = ScenarioConfig {
            organization: "  ".to_string(),
            ..ScenarioConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyOrganization)
        ));
    }
}
