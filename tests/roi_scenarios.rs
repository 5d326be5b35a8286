//! End-to-end scenarios through the public handlers.
//!
//! Uses the built-in organization table unless a test loads its own YAML
//! file. Expected figures follow the calibrated department model.

use std::io::Write;
use std::sync::Arc;

use workforce_roi::adapters::{StaticOrganizationDirectory, YamlOrganizationDirectory};
use workforce_roi::application::{
    AskQuestionCommand, AskQuestionHandler, CompareScenariosHandler, CompareScenariosQuery,
    ComputeMetricsHandler, ComputeMetricsQuery, InvestmentInput,
};
use workforce_roi::domain::faq::{ChatRole, Transcript};
use workforce_roi::domain::formatting;
use workforce_roi::domain::foundation::{ErrorCode, Percentage};
use workforce_roi::domain::organization::find_built_in;
use workforce_roi::domain::roi::{
    Assumptions, BreakEven, ConditionAssumption, ConditionCategory, CourseOfAction,
    DerivedMetrics, InvestmentScenario, ModelParameters, RoiCalculator, SeatPlan, SeatSelection,
};
use workforce_roi::ports::OrganizationDirectory;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn built_in() -> Arc<dyn OrganizationDirectory> {
    Arc::new(StaticOrganizationDirectory::new())
}

fn compute(
    directory: Arc<dyn OrganizationDirectory>,
    organization_id: &str,
    assumptions: Assumptions,
    investment: InvestmentInput,
) -> DerivedMetrics {
    ComputeMetricsHandler::new(directory, ModelParameters::default())
        .handle(ComputeMetricsQuery {
            organization_id: organization_id.to_string(),
            assumptions,
            investment,
        })
        .expect("metrics should compute")
}

/// Runs the engine directly for inputs the sliders cannot produce.
fn engine_only(assumptions: Assumptions) -> DerivedMetrics {
    let params = ModelParameters::default();
    let profile = find_built_in("lapd-wide").unwrap();
    let investment = SeatSelection::default().to_scenario(profile.officers, &params);
    RoiCalculator::compute(profile, &assumptions, &investment, &params)
}

/// Only PTSD is prevalent; every other category is zeroed.
fn ptsd_only(overlap: u8) -> Assumptions {
    let conditions = ConditionCategory::ALL
        .iter()
        .map(|&category| match category {
            ConditionCategory::Ptsd => ConditionAssumption::calibrated(category),
            other => ConditionAssumption::zeroed(other),
        })
        .collect();
    Assumptions::new(conditions, Percentage::new(overlap))
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn department_default_scenario() {
    let metrics = compute(
        built_in(),
        "lapd-wide",
        Assumptions::default(),
        InvestmentInput::default(),
    );

    assert_eq!(metrics.population.raw_total_affected, 6903);
    assert_eq!(metrics.population.unique_affected, 4487);
    assert_eq!(metrics.investment.ready_seats, 2185);
    assert_eq!(metrics.investment.active_users, 1420);
    assert_eq!(metrics.investment.investment, 437_000);
    assert_eq!(metrics.workers_comp.savings, 1_895_000);
    assert_eq!(metrics.retention.savings, 9_300_000);
    assert_eq!(metrics.discipline.savings, 715_000);
    assert_eq!(metrics.total_savings, 11_910_000);
    assert_eq!(metrics.net_savings, 11_473_000);
    assert!(metrics.is_net_positive());

    assert_eq!(formatting::currency(metrics.net_savings), "$11,473,000");
    assert_eq!(formatting::roi(metrics.roi_pct), "26.3X");
}

#[test]
fn baseline_ptsd_population_is_adjusted_for_overlap() {
    let metrics = engine_only(ptsd_only(35));

    let ptsd = metrics.condition(ConditionCategory::Ptsd).unwrap();
    assert_eq!(ptsd.raw_affected, 1660);
    assert_eq!(metrics.population.unique_affected, 1079);
    assert_eq!(ptsd.affected, 1079);
}

#[test]
fn ptsd_claims_and_cost() {
    let metrics = engine_only(ptsd_only(35));

    let ptsd = metrics.condition(ConditionCategory::Ptsd).unwrap();
    assert_eq!(ptsd.claims, 129);
    assert_eq!(ptsd.claim_cost, 12_255_000);
    assert_eq!(metrics.workers_comp.baseline_cost, 12_255_000);
    assert_eq!(metrics.workers_comp.avg_claim_cost, 95_000);
}

#[test]
fn zero_investment_guards_roi() {
    let metrics = compute(
        built_in(),
        "lapd-wide",
        Assumptions::default(),
        InvestmentInput::Scenario(InvestmentScenario::Budget {
            amount: 0,
            coverage: Percentage::new(50),
        }),
    );

    assert!(metrics.total_savings > 0);
    assert_eq!(metrics.net_savings, metrics.total_savings as i64);
    assert_eq!(metrics.roi_pct, 0.0);
    assert_eq!(metrics.workers_comp.break_even, BreakEven::NotApplicable);
    assert_eq!(formatting::percent(metrics.roi_pct), "0.0%");
}

#[test]
fn coverage_is_capped_at_full_headcount() {
    let plan = SeatPlan {
        lead_seats: 0,
        ready_seats: 10_000,
        lead_price: 5_785,
        ready_price: 150,
        engagement: Percentage::new(100),
    };
    let metrics = compute(
        built_in(),
        "metro",
        Assumptions::default(),
        InvestmentInput::Scenario(InvestmentScenario::Seats(plan)),
    );

    assert_eq!(metrics.investment.active_users, 10_000);
    assert_eq!(metrics.investment.coverage, 1.0);
}

#[test]
fn small_division_gets_minimum_seat_package() {
    let metrics = compute(
        built_in(),
        "div-77th",
        Assumptions::default(),
        InvestmentInput::Selection(SeatSelection::new(CourseOfAction::Pilot)),
    );

    assert_eq!(metrics.population.officers, 420);
    assert_eq!(metrics.investment.ready_seats, 500);
    assert_eq!(metrics.investment.investment, 125_000);
    assert_eq!(metrics.total_savings, 2_690_000);
}

#[test]
fn comparison_covers_every_course_of_action() {
    let result = CompareScenariosHandler::new(built_in(), ModelParameters::default())
        .handle(CompareScenariosQuery {
            organization_id: "lapd-wide".to_string(),
            assumptions: Assumptions::default(),
            selection: SeatSelection::new(CourseOfAction::Targeted).with_lead(true),
        })
        .unwrap();

    let options: Vec<_> = result.summaries.iter().map(|s| s.course_of_action).collect();
    assert_eq!(options, CourseOfAction::ALL.to_vec());

    let scaled = &result.summaries[2];
    assert_eq!(scaled.total_seats, 7428);
    assert_eq!(scaled.investment, 6_039_190);
    assert_eq!(scaled.net_savings, 34_375_810);
    assert!(result.best.is_some());
}

#[test]
fn yaml_directory_feeds_the_engine() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "organizations:\n  - id: county-east\n    name: East County Sheriff\n    officers: 8738\n    kind: bureau"
    )
    .unwrap();

    let directory: Arc<dyn OrganizationDirectory> =
        Arc::new(YamlOrganizationDirectory::load(file.path()).unwrap());
    let metrics = compute(
        directory.clone(),
        "county-east",
        Assumptions::default(),
        InvestmentInput::default(),
    );
    assert_eq!(metrics.net_savings, 11_473_000);

    let err = ComputeMetricsHandler::new(directory, ModelParameters::default())
        .handle(ComputeMetricsQuery {
            organization_id: "lapd-wide".to_string(),
            assumptions: Assumptions::default(),
            investment: InvestmentInput::default(),
        })
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::OrganizationNotFound);
}

#[test]
fn handler_rejects_inputs_outside_slider_ranges() {
    let err = ComputeMetricsHandler::new(built_in(), ModelParameters::default())
        .handle(ComputeMetricsQuery {
            organization_id: "lapd-wide".to_string(),
            assumptions: ptsd_only(35),
            investment: InvestmentInput::default(),
        })
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::OutOfRange);
    assert_eq!(err.details.get("field"), Some(&"depression.prevalence".to_string()));
}

#[test]
fn help_chat_quotes_current_overlap() {
    let handler = AskQuestionHandler::default();
    let mut transcript = Transcript::new();

    let reply = handler
        .handle(
            &mut transcript,
            AskQuestionCommand {
                question: "How does comorbidity work?".to_string(),
                assumptions: Assumptions::default().with_comorbidity_overlap(Percentage::new(20)),
            },
        )
        .unwrap();

    assert_eq!(reply.role, ChatRole::Assistant);
    assert!(reply.text.contains("At 20% overlap"));
    assert_eq!(transcript.messages()[0].role, ChatRole::User);
}
