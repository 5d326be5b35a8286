//! Configuration error types

use thiserror::Error;

use crate::domain::foundation::ValidationError as FieldError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Unknown course of action: {0}")]
    UnknownCourseOfAction(String),

    #[error("Engagement must be at most 100%, got {0}")]
    InvalidEngagement(u8),

    #[error("Comorbidity overlap must be at most 50%, got {0}")]
    InvalidComorbidity(u8),

    #[error("Invalid log level directive: {0}")]
    InvalidLogLevel(String),

    #[error("Organization id must not be empty")]
    EmptyOrganization,

    #[error("Invalid model parameters: {0}")]
    InvalidModel(#[from] FieldError),
}
