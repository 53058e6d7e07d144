//! Data-driven skill content and loaders.
//!
//! This crate houses the skill catalog and loaders for RON/TOML data files:
//! - Skill catalogs (data-driven via RON)
//! - Skill tunables (data-driven via TOML)
//!
//! Definitions are static content; per-character progress lives in
//! `skill-core` and refers to definitions by identifier only.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{SkillCatalog, SkillRecord};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, SkillLoader};
