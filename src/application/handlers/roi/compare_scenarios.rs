//! CompareScenariosHandler - Query handler for the course-of-action comparison.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::roi::{
    Assumptions, CourseOfAction, ModelParameters, RoiCalculator, ScenarioSummary, SeatSelection,
};
use crate::ports::OrganizationDirectory;

/// Query to compare every course of action for one organization.
#[derive(Debug, Clone)]
pub struct CompareScenariosQuery {
    pub organization_id: String,
    pub assumptions: Assumptions,
    /// Current selection; its lead toggle and engagement override carry over.
    pub selection: SeatSelection,
}

/// Side-by-side summaries plus the highest-ROI option.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareScenariosResult {
    pub summaries: Vec<ScenarioSummary>,
    pub best: Option<CourseOfAction>,
}

/// Handler for comparing courses of action.
pub struct CompareScenariosHandler {
    directory: Arc<dyn OrganizationDirectory>,
    params: ModelParameters,
}

impl CompareScenariosHandler {
    pub fn new(directory: Arc<dyn OrganizationDirectory>, params: ModelParameters) -> Self {
        Self { directory, params }
    }

    pub fn handle(
        &self,
        query: CompareScenariosQuery,
    ) -> Result<CompareScenariosResult, DomainError> {
        query.assumptions.validate()?;

        let profile = self.directory.get(&query.organization_id)?;
        let summaries = RoiCalculator::compare_courses_of_action(
            &profile,
            &query.assumptions,
            &query.selection,
            &self.params,
        );
        let best = RoiCalculator::best_course_of_action(&summaries).map(|s| s.course_of_action);

        debug!(
            organization_id = %profile.id,
            options = summaries.len(),
            best = ?best,
            "Compared courses of action"
        );

        Ok(CompareScenariosResult { summaries, best })
    }
}
