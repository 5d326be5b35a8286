//! YAML-file Organization Directory Adapter
//!
//! Reads an organization table from a YAML file once at startup:
//!
//! ```yaml
//! organizations:
//!   - id: div-77th
//!     name: 77th Street Division
//!     officers: 420
//!     kind: division
//!     tier: 1
//! ```

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::domain::organization::OrganizationProfile;
use crate::ports::{DirectoryError, OrganizationDirectory};

#[derive(Debug, Deserialize)]
struct OrganizationTable {
    organizations: Vec<OrganizationProfile>,
}

/// Organization table loaded from disk.
#[derive(Debug, Clone)]
pub struct YamlOrganizationDirectory {
    profiles: Vec<OrganizationProfile>,
}

impl YamlOrganizationDirectory {
    /// Load and validate the table at `path`.
    ///
    /// # Errors
    /// - `IoError` if the file cannot be read
    /// - `ParseFailed` if the YAML does not match the table shape
    /// - `InvalidProfile` / `DuplicateId` if any entry is unusable
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let yaml =
            fs::read_to_string(path).map_err(|e| DirectoryError::IoError(e.to_string()))?;
        let directory = Self::from_yaml(&yaml)?;

        tracing::info!(
            path = %path.display(),
            organizations = directory.profiles.len(),
            "Loaded organization directory"
        );
        Ok(directory)
    }

    /// Parse and validate a table from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, DirectoryError> {
        let table: OrganizationTable =
            serde_yaml::from_str(yaml).map_err(|e| DirectoryError::ParseFailed(e.to_string()))?;

        let mut seen = HashSet::new();
        for profile in &table.organizations {
            profile
                .validate()
                .map_err(|source| DirectoryError::InvalidProfile {
                    id: profile.id.clone(),
                    source,
                })?;
            if !seen.insert(profile.id.as_str()) {
                return Err(DirectoryError::DuplicateId(profile.id.clone()));
            }
        }

        Ok(Self {
            profiles: table.organizations,
        })
    }
}

impl OrganizationDirectory for YamlOrganizationDirectory {
    fn get(&self, id: &str) -> Result<OrganizationProfile, DirectoryError> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<OrganizationProfile>, DirectoryError> {
        Ok(self.profiles.clone())
    }
}
