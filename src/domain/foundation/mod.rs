//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the workforce ROI domain.

mod errors;
mod percentage;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use percentage::Percentage;
