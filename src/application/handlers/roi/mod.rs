//! ROI query handlers.

mod compare_scenarios;
mod compute_metrics;

pub use compare_scenarios::{
    CompareScenariosHandler, CompareScenariosQuery, CompareScenariosResult,
};
pub use compute_metrics::{
    ComputeMetricsHandler, ComputeMetricsQuery, ComputeMetricsResult, InvestmentInput,
};
