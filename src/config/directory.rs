//! Organization directory configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Where the organization table comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryConfig {
    /// YAML file with an `organizations:` list; the built-in table is used when unset
    pub path: Option<PathBuf>,
}
