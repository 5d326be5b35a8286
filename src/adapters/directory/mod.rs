//! Organization directory adapters.

mod static_directory;
mod yaml_directory;

pub use static_directory::StaticOrganizationDirectory;
pub use yaml_directory::YamlOrganizationDirectory;
