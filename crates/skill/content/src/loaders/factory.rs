//! Content factory for building skill content from data files.

use std::path::{Path, PathBuf};

use skill_core::SkillConfig;

use crate::catalog::SkillCatalog;
use crate::loaders::{ConfigLoader, LoadResult, SkillLoader};

/// Content factory that loads all skill content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── skills.toml
/// ├── skills.ron
/// └── skills/
///     ├── crafting.ron
///     └── contextual.ron
/// ```
///
/// `skills.ron` is loaded first, then every `.ron` file under `skills/` in
/// file name order. The `skills/` directory is optional.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load skill tunables from `skills.toml`, or defaults if the file is absent.
    pub fn load_config(&self) -> LoadResult<SkillConfig> {
        let path = self.data_dir.join("skills.toml");
        if !path.exists() {
            tracing::info!("{} not found, using default skill config", path.display());
            return Ok(SkillConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Build a skill catalog from `skills.ron` and `skills/*.ron`.
    pub fn load_catalog(&self) -> LoadResult<SkillCatalog> {
        let mut catalog = SkillCatalog::new();
        SkillLoader::load_into(&mut catalog, &self.data_dir.join("skills.ron"))?;

        for path in self.extra_catalog_files()? {
            SkillLoader::load_into(&mut catalog, &path)?;
        }

        Ok(catalog)
    }

    fn extra_catalog_files(&self) -> LoadResult<Vec<PathBuf>> {
        let dir = self.data_dir.join("skills");
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?
        {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
