//! Nurture option pools loader.

use std::path::Path;

use game_core::NurturePool;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Nurture file structure for TOML files (`[[pool]]` entries).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NurtureFile {
    pub pool: Vec<NurturePool>,
}

/// Loader for nurture option pools from TOML files.
pub struct NurtureLoader;

impl NurtureLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<NurturePool>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<NurturePool>> {
        let file: NurtureFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse nurture TOML: {}", e))?;

        for pool in file.pool.iter().filter(|pool| pool.labels.is_empty()) {
            tracing::warn!(
                nurture = %pool.nurture,
                "nurture pool has no labels and is never offered"
            );
        }
        Ok(file.pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pools_in_order() {
        let pools = NurtureLoader::parse(
            r#"
            [[pool]]
            nurture = "Trained"
            labels = ["Wing drills"]

            [[pool]]
            nurture = "Feral"
            labels = ["Rain dance", "Night forage"]
            "#,
        )
        .unwrap();

        assert_eq!(pools.len(), 2);
        assert_eq!(pools[0].nurture.as_str(), "Trained");
        assert_eq!(pools[1].labels, vec!["Rain dance", "Night forage"]);
    }
}
