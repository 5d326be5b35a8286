//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `OrganizationDirectory` - Read-only organization reference table

mod organization_directory;

pub use organization_directory::{DirectoryError, OrganizationDirectory};
