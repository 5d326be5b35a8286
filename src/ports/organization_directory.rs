//! Organization Directory Port - Interface for the organization reference table.
//!
//! The table is read-only once loaded. Implementations may hold it in memory
//! or read it from a file at startup, but never mutate it afterwards.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::organization::OrganizationProfile;

/// Errors that can occur while reading the organization table
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Organization not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to parse organization table: {0}")]
    ParseFailed(String),

    #[error("Invalid organization '{id}': {source}")]
    InvalidProfile {
        id: String,
        #[source]
        source: ValidationError,
    },

    #[error("Duplicate organization id: {0}")]
    DuplicateId(String),
}

impl From<DirectoryError> for DomainError {
    fn from(err: DirectoryError) -> Self {
        match &err {
            DirectoryError::NotFound(id) => {
                DomainError::new(ErrorCode::OrganizationNotFound, err.to_string())
                    .with_detail("organization_id", id.clone())
            }
            DirectoryError::InvalidProfile { id, .. } | DirectoryError::DuplicateId(id) => {
                DomainError::new(ErrorCode::ValidationFailed, err.to_string())
                    .with_detail("organization_id", id.clone())
            }
            DirectoryError::IoError(_) | DirectoryError::ParseFailed(_) => {
                DomainError::new(ErrorCode::DirectoryUnavailable, err.to_string())
            }
        }
    }
}

/// Port for looking up organization profiles
pub trait OrganizationDirectory: Send + Sync {
    /// Fetch a single profile by id
    ///
    /// # Errors
    /// Returns `DirectoryError::NotFound` if no profile has this id
    fn get(&self, id: &str) -> Result<OrganizationProfile, DirectoryError>;

    /// All profiles in display order
    fn list(&self) -> Result<Vec<OrganizationProfile>, DirectoryError>;
}
