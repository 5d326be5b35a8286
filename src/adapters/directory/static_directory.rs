//! Directory backed by the built-in reference table.

use crate::domain::organization::{built_in_organizations, find_built_in, OrganizationProfile};
use crate::ports::{DirectoryError, OrganizationDirectory};

/// Serves the compiled-in department table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticOrganizationDirectory;

impl StaticOrganizationDirectory {
    pub fn new() -> Self {
        Self
    }
}

impl OrganizationDirectory for StaticOrganizationDirectory {
    fn get(&self, id: &str) -> Result<OrganizationProfile, DirectoryError> {
        find_built_in(id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<OrganizationProfile>, DirectoryError> {
        Ok(built_in_organizations().to_vec())
    }
}
