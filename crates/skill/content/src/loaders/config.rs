//! Skill configuration loader.

use std::path::Path;

use skill_core::SkillConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for skill tunables from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`SkillConfig::default`].
    pub fn load(path: &Path) -> LoadResult<SkillConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<SkillConfig> {
        let config: SkillConfig = toml::from_str(content)?;
        Ok(config)
    }
}
