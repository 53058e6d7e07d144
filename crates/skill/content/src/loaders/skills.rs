//! Skill catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{SkillCatalog, SkillRecord};
use crate::loaders::{LoadResult, read_file};

/// Skill catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalogFile {
    pub skills: Vec<SkillRecord>,
}

/// Loader for skill records from RON files.
pub struct SkillLoader;

impl SkillLoader {
    /// Load raw skill records from a RON file.
    ///
    /// RON format: `(skills: [SkillRecord, ...])`
    pub fn load(path: &Path) -> LoadResult<Vec<SkillRecord>> {
        let content = read_file(path)?;
        let file: SkillCatalogFile = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!(
                "Failed to parse skill catalog RON {}: {}",
                path.display(),
                e
            )
        })?;

        tracing::debug!(
            "read {} skill records from {}",
            file.skills.len(),
            path.display()
        );
        Ok(file.skills)
    }

    /// Load every record in `path` into `catalog`.
    ///
    /// Fails on the first malformed or duplicate record.
    pub fn load_into(catalog: &mut SkillCatalog, path: &Path) -> LoadResult<()> {
        let records = Self::load(path)?;
        catalog
            .load_all(records)
            .map_err(|e| anyhow::anyhow!("Failed to load skills from {}: {}", path.display(), e))
    }
}
