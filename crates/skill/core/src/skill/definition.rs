use std::collections::BTreeSet;

use super::{CatalogError, SkillId};

/// Tag marking skills used in combat calculations.
pub const COMBAT_SKILL_TAG: &str = "combat_skill";

/// Tag marking situational skills kept out of normal selection.
pub const CONTEXTUAL_SKILL_TAG: &str = "contextual_skill";

/// Read-only access to skill definitions.
///
/// Implemented by content registries so model code does not depend on how
/// definitions are stored or loaded.
pub trait SkillOracle {
    fn definition(&self, id: &SkillId) -> Option<SkillDefinition>;

    /// Returns all selectable (non-contextual) definitions.
    fn all_definitions(&self) -> Vec<SkillDefinition>;
}

/// Immutable description of a skill, created once at content load.
///
/// Tags are kept sorted so enumeration order does not depend on the
/// source file. Deserialization goes through [`SkillDefinition::try_new`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DefinitionRecord"))]
pub struct SkillDefinition {
    ident: SkillId,
    name: String,
    description: String,
    tags: BTreeSet<String>,
}

impl SkillDefinition {
    pub fn new(
        ident: SkillId,
        name: impl Into<String>,
        description: impl Into<String>,
        tags: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            ident,
            name: name.into(),
            description: description.into(),
            tags: tags.into_iter().collect(),
        }
    }

    /// Builds a definition from raw configuration fields.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] when the identifier or name is
    /// blank, or when a tag is blank.
    pub fn try_new(
        ident: &str,
        name: &str,
        description: &str,
        tags: impl IntoIterator<Item = String>,
    ) -> Result<Self, CatalogError> {
        let ident = ident.trim();
        if ident.is_empty() {
            return Err(CatalogError::malformed(ident, "identifier is empty"));
        }
        if ident.chars().any(char::is_whitespace) {
            return Err(CatalogError::malformed(
                ident,
                "identifier contains whitespace",
            ));
        }
        if name.trim().is_empty() {
            return Err(CatalogError::malformed(ident, "name is empty"));
        }

        let mut tag_set = BTreeSet::new();
        for tag in tags {
            let tag = tag.trim();
            if tag.is_empty() {
                return Err(CatalogError::malformed(ident, "tag is empty"));
            }
            tag_set.insert(tag.to_owned());
        }

        Ok(Self {
            ident: SkillId::new(ident),
            name: name.trim().to_owned(),
            description: description.to_owned(),
            tags: tag_set,
        })
    }

    pub fn ident(&self) -> &SkillId {
        &self.ident
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_combat_skill(&self) -> bool {
        self.has_tag(COMBAT_SKILL_TAG)
    }

    pub fn is_contextual_skill(&self) -> bool {
        self.has_tag(CONTEXTUAL_SKILL_TAG)
    }
}

/// Unvalidated wire shape of a [`SkillDefinition`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DefinitionRecord {
    ident: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<DefinitionRecord> for SkillDefinition {
    type Error = CatalogError;

    fn try_from(record: DefinitionRecord) -> Result<Self, Self::Error> {
        Self::try_new(&record.ident, &record.name, &record.description, record.tags)
    }
}
