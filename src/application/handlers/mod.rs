//! Application handlers.
//!
//! Query and command handlers that resolve inputs through ports and
//! delegate to the pure domain services.

pub mod faq;
pub mod roi;

pub use faq::{AskQuestionCommand, AskQuestionHandler, AskQuestionResult};
pub use roi::{
    CompareScenariosHandler, CompareScenariosQuery, CompareScenariosResult,
    ComputeMetricsHandler, ComputeMetricsQuery, ComputeMetricsResult, InvestmentInput,
};
