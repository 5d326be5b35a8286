//! Organization profile value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Where a profile sits in the department hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationKind {
    /// The whole department.
    Enterprise,
    /// A geographic bureau made up of several divisions.
    Bureau,
    /// A single patrol division.
    Division,
    /// A specialized unit outside the patrol hierarchy.
    Specialized,
}

impl OrganizationKind {
    /// Returns the display label for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            OrganizationKind::Enterprise => "Enterprise",
            OrganizationKind::Bureau => "Bureau",
            OrganizationKind::Division => "Division",
            OrganizationKind::Specialized => "Specialized",
        }
    }
}

impl fmt::Display for OrganizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named organizational unit and its sworn headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationProfile {
    pub id: String,
    pub name: String,
    pub officers: u32,
    pub kind: OrganizationKind,
    /// Activity tier (1 = highest call volume); divisions only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<u8>,
    #[serde(default)]
    pub description: String,
}

impl OrganizationProfile {
    /// Creates a validated profile.
    ///
    /// # Errors
    /// - `EmptyField` when `id` or `name` is blank
    /// - `OutOfRange` when `officers` is zero
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        officers: u32,
        kind: OrganizationKind,
    ) -> Result<Self, ValidationError> {
        let profile = Self {
            id: id.into(),
            name: name.into(),
            officers,
            kind,
            tier: None,
            description: String::new(),
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Sets the division tier.
    pub fn with_tier(mut self, tier: u8) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Sets the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Checks the invariants a profile must satisfy before it can feed the engine.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::empty_field("id"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.officers == 0 {
            return Err(ValidationError::out_of_range(
                "officers",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        Ok(())
    }
}
