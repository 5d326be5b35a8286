//! Organization module - the headcount reference data that feeds the ROI model.
//!
//! Profiles are immutable once loaded. Selecting a different profile only
//! changes which headcount is handed to the engine.

mod catalog;
mod profile;

pub use catalog::{built_in_organizations, find_built_in, DEFAULT_ORGANIZATION_ID};
pub use profile::{OrganizationKind, OrganizationProfile};
