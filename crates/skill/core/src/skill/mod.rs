//! Skill identifiers, definitions, and per-character progression.
//!
//! Definitions are static content loaded once; progress records are mutable
//! save data that point at definitions by [`SkillId`].
mod definition;
mod error;
mod id;
mod progress;
mod set;

pub use definition::{COMBAT_SKILL_TAG, CONTEXTUAL_SKILL_TAG, SkillDefinition, SkillOracle};
pub use error::CatalogError;
pub use id::SkillId;
pub use progress::{SkillProgress, price_adjustment};
pub use set::SkillSet;
