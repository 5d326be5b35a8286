//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers are synchronous: the engine does no I/O and the organization
//! table is loaded before any handler runs.

pub mod handlers;

pub use handlers::{
    AskQuestionCommand, AskQuestionHandler, AskQuestionResult, CompareScenariosHandler,
    CompareScenariosQuery, CompareScenariosResult, ComputeMetricsHandler, ComputeMetricsQuery,
    ComputeMetricsResult, InvestmentInput,
};
