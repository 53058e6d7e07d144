//! Skill definitions and progression rules shared across clients.
//!
//! `skill-core` defines the canonical model: skill identifiers and definitions,
//! per-character [`SkillProgress`] with its leveling and decay rules, and the
//! tunables in [`SkillConfig`]. It performs no I/O; time, randomness, and
//! configuration are passed in by the caller. Content registries live in
//! `skill-content`.
pub mod config;
pub mod error;
pub mod rng;
pub mod skill;
pub mod time;

pub use config::{RustMode, SkillConfig};
pub use error::{ErrorSeverity, GameError};
pub use rng::{PcgRng, RngOracle};
pub use skill::{
    COMBAT_SKILL_TAG, CONTEXTUAL_SKILL_TAG, CatalogError, SkillDefinition, SkillId, SkillOracle,
    SkillProgress, SkillSet, price_adjustment,
};
pub use time::Turn;
