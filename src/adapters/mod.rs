//! Adapters - Implementations of port interfaces.
//!
//! - `directory` - Organization directories (built-in table, YAML file)

pub mod directory;

pub use directory::{StaticOrganizationDirectory, YamlOrganizationDirectory};
