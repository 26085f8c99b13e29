//! Trait tables loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::tables::{ContentTables, TablesSpec};

/// Loader for trait → stat tables from TOML files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load tables from a TOML file in [`TablesSpec`] form.
    pub fn load(path: &Path) -> LoadResult<ContentTables> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ContentTables> {
        let spec: TablesSpec = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))?;

        if spec.primary.is_empty() {
            tracing::warn!("tables file defines no primary traits");
        }
        tracing::debug!(
            primaries = spec.primary.len(),
            groups = spec.secondary.len(),
            nurtures = spec.nurture.len(),
            "loaded trait tables"
        );

        Ok(ContentTables::from_spec(spec))
    }

    /// Serializes tables back to TOML.
    pub fn to_toml(tables: &ContentTables) -> LoadResult<String> {
        toml::to_string(&tables.to_spec())
            .map_err(|e| anyhow::anyhow!("Failed to serialize tables TOML: {}", e))
    }
}
