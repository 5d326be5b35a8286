use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use serde_json::json;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*};

use workforce_roi::adapters::{StaticOrganizationDirectory, YamlOrganizationDirectory};
use workforce_roi::application::{
    CompareScenariosHandler, CompareScenariosQuery, ComputeMetricsHandler, ComputeMetricsQuery,
    InvestmentInput,
};
use workforce_roi::config::{AppConfig, LoggingConfig};
use workforce_roi::ports::OrganizationDirectory;

fn main() -> Result<(), Box<dyn Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load_validated(config_path.as_deref())?;

    init_tracing(&config.logging)?;

    let directory: Arc<dyn OrganizationDirectory> = match &config.directory.path {
        Some(path) => Arc::new(YamlOrganizationDirectory::load(path)?),
        None => Arc::new(StaticOrganizationDirectory::new()),
    };

    let assumptions = config.scenario.assumptions();
    let selection = config.scenario.selection()?;

    info!(
        organization = %config.scenario.organization,
        course_of_action = %selection.course_of_action,
        include_lead = selection.include_lead,
        "Evaluating scenario"
    );

    let metrics = ComputeMetricsHandler::new(directory.clone(), config.model).handle(
        ComputeMetricsQuery {
            organization_id: config.scenario.organization.clone(),
            assumptions: assumptions.clone(),
            investment: InvestmentInput::Selection(selection),
        },
    )?;

    let comparison = CompareScenariosHandler::new(directory, config.model).handle(
        CompareScenariosQuery {
            organization_id: config.scenario.organization.clone(),
            assumptions,
            selection,
        },
    )?;

    let report = json!({
        "metrics": metrics,
        "comparison": comparison.summaries,
        "best_course_of_action": comparison.best,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn Error>> {
    let filter = logging.env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout stays pure JSON.
    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }
    Ok(())
}
