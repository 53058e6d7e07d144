use std::fmt;

use super::CatalogError;

/// String key identifying a skill definition.
///
/// Progress records refer to definitions through this key, never by reference,
/// so a catalog can be rebuilt without invalidating save data.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillId(String);

impl SkillId {
    pub fn new(ident: impl Into<String>) -> Self {
        Self(ident.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Maps an integer id from old saves to its string identifier.
    ///
    /// Index 0 was the "no skill" placeholder and is rejected like any index
    /// outside the table.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidLegacyId`] for unknown indices.
    pub fn from_legacy_int(legacy_id: i64) -> Result<Self, CatalogError> {
        usize::try_from(legacy_id)
            .ok()
            .filter(|&index| index > 0)
            .and_then(|index| LEGACY_SKILL_IDS.get(index - 1))
            .map(|ident| Self::new(*ident))
            .ok_or(CatalogError::InvalidLegacyId(legacy_id))
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SkillId {
    fn from(ident: &str) -> Self {
        Self::new(ident)
    }
}

impl From<String> for SkillId {
    fn from(ident: String) -> Self {
        Self(ident)
    }
}

impl AsRef<str> for SkillId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Historical integer ids, starting at 1. Order is frozen: old saves depend on it.
const LEGACY_SKILL_IDS: [&str; 27] = [
    "dodge",
    "melee",
    "unarmed",
    "bashing",
    "cutting",
    "stabbing",
    "throw",
    "gun",
    "pistol",
    "shotgun",
    "smg",
    "rifle",
    "archery",
    "launcher",
    "mechanics",
    "electronics",
    "cooking",
    "tailor",
    "carpentry",
    "firstaid",
    "speech",
    "barter",
    "computer",
    "survival",
    "traps",
    "swimming",
    "driving",
];
