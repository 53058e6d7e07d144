//! Skill catalog registry.
//!
//! Holds every skill definition loaded from content. Regular skills keep their
//! load order for listing and random selection; contextual skills live in a
//! separate map and are only reachable by identifier.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use skill_core::{CatalogError, RngOracle, SkillDefinition, SkillId, SkillOracle};

/// One skill entry as written in content files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub ident: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Registry of skill definitions.
///
/// Built once at startup and passed by reference. [`SkillCatalog::reset`]
/// takes `&mut self`, so no borrowed definition can outlive a reset.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: Vec<SkillDefinition>,
    index: HashMap<SkillId, usize>,
    contextual: BTreeMap<SkillId, SkillDefinition>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from records, stopping at the first invalid one.
    pub fn from_records(
        records: impl IntoIterator<Item = SkillRecord>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.load_all(records)?;
        Ok(catalog)
    }

    /// Validates and registers one record.
    ///
    /// Records tagged `contextual_skill` go to the contextual registry.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Malformed`] if a field fails validation
    /// - [`CatalogError::Conflict`] if the identifier is already registered
    pub fn load(&mut self, record: SkillRecord) -> Result<&SkillDefinition, CatalogError> {
        let definition = SkillDefinition::try_new(
            &record.ident,
            &record.name,
            &record.description,
            record.tags,
        )?;
        let ident = definition.ident().clone();

        if self.contains(&ident) {
            tracing::warn!("rejecting duplicate skill definition '{}'", ident);
            return Err(CatalogError::Conflict(ident));
        }

        if definition.is_contextual_skill() {
            tracing::debug!("registered contextual skill '{}'", ident);
            Ok(&*self.contextual.entry(ident).or_insert(definition))
        } else {
            tracing::debug!("registered skill '{}'", ident);
            let slot = self.skills.len();
            self.index.insert(ident, slot);
            self.skills.push(definition);
            Ok(&self.skills[slot])
        }
    }

    /// Loads records in order, aborting at the first error.
    ///
    /// Records loaded before the failing one stay registered.
    pub fn load_all(
        &mut self,
        records: impl IntoIterator<Item = SkillRecord>,
    ) -> Result<(), CatalogError> {
        for record in records {
            self.load(record)?;
        }
        tracing::info!(
            skills = self.count(),
            contextual = self.contextual_count(),
            "skill catalog loaded"
        );
        Ok(())
    }

    /// Looks up a definition, contextual skills first.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for unregistered identifiers.
    pub fn get(&self, id: &SkillId) -> Result<&SkillDefinition, CatalogError> {
        self.contextual
            .get(id)
            .or_else(|| self.index.get(id).map(|&slot| &self.skills[slot]))
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    pub fn contains(&self, id: &SkillId) -> bool {
        self.contextual.contains_key(id) || self.index.contains_key(id)
    }

    /// Number of regular (non-contextual) skills.
    pub fn count(&self) -> usize {
        self.skills.len()
    }

    pub fn contextual_count(&self) -> usize {
        self.contextual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.contextual.is_empty()
    }

    /// Clears every definition, regular and contextual.
    pub fn reset(&mut self) {
        tracing::debug!(
            skills = self.skills.len(),
            contextual = self.contextual.len(),
            "resetting skill catalog"
        );
        self.skills.clear();
        self.index.clear();
        self.contextual.clear();
    }

    /// Regular skills in load order.
    pub fn skills(&self) -> &[SkillDefinition] {
        &self.skills
    }

    /// Regular skills stably sorted by `compare`.
    pub fn all_sorted_by<F>(&self, mut compare: F) -> Vec<&SkillDefinition>
    where
        F: FnMut(&SkillDefinition, &SkillDefinition) -> Ordering,
    {
        let mut sorted: Vec<_> = self.skills.iter().collect();
        sorted.sort_by(|a, b| compare(a, b));
        sorted
    }

    /// Uniformly picks a regular skill.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] if no regular skills are loaded.
    pub fn random_skill(&self, rng: &mut impl RngOracle) -> Result<&SkillId, CatalogError> {
        if self.skills.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(self.skills[rng.index(self.skills.len())].ident())
    }

    /// Maps an integer id from old saves. See [`SkillId::from_legacy_int`].
    pub fn from_legacy_int(legacy_id: i64) -> Result<SkillId, CatalogError> {
        SkillId::from_legacy_int(legacy_id)
    }
}

impl SkillOracle for SkillCatalog {
    fn definition(&self, id: &SkillId) -> Option<SkillDefinition> {
        self.get(id).ok().cloned()
    }

    fn all_definitions(&self) -> Vec<SkillDefinition> {
        self.skills.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skill_core::PcgRng;

    fn record(ident: &str, tags: &[&str]) -> SkillRecord {
        SkillRecord {
            ident: ident.to_string(),
            name: ident.to_string(),
            description: format!("The {} skill.", ident),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn loaded_definition_is_retrievable() {
        let mut catalog = SkillCatalog::new();
        let loaded = catalog.load(record("melee", &["combat_skill"])).unwrap().clone();

        let fetched = catalog.get(loaded.ident()).unwrap();
        assert_eq!(fetched, &loaded);
        assert!(fetched.is_combat_skill());
        assert_eq!(catalog.count(), 1);
    }

    #[test]
    fn duplicate_identifier_conflicts() {
        let mut catalog = SkillCatalog::new();
        catalog.load(record("dodge", &[])).unwrap();

        let err = catalog.load(record("dodge", &["combat_skill"])).unwrap_err();
        assert_eq!(err, CatalogError::Conflict(SkillId::from("dodge")));
        assert_eq!(catalog.count(), 1);
    }

    #[test]
    fn duplicate_across_contextual_registry_conflicts() {
        let mut catalog = SkillCatalog::new();
        catalog.load(record("weapon", &["contextual_skill"])).unwrap();

        assert!(matches!(
            catalog.load(record("weapon", &[])),
            Err(CatalogError::Conflict(_))
        ));
    }

    #[test]
    fn unknown_identifier_is_not_found() {
        let catalog = SkillCatalog::new();
        assert_eq!(
            catalog.get(&SkillId::from("juggling")),
            Err(CatalogError::NotFound(SkillId::from("juggling")))
        );
    }

    #[test]
    fn reset_forgets_everything() {
        let mut catalog = SkillCatalog::from_records(vec![
            record("cooking", &[]),
            record("weapon", &["contextual_skill"]),
        ])
        .unwrap();

        catalog.reset();

        assert!(catalog.is_empty());
        assert!(matches!(
            catalog.get(&SkillId::from("cooking")),
            Err(CatalogError::NotFound(_))
        ));
        assert!(matches!(
            catalog.get(&SkillId::from("weapon")),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn contextual_skills_are_hidden_from_enumeration() {
        let catalog = SkillCatalog::from_records(vec![
            record("melee", &["combat_skill"]),
            record("weapon", &["contextual_skill"]),
        ])
        .unwrap();

        assert_eq!(catalog.count(), 1);
        assert_eq!(catalog.contextual_count(), 1);
        assert!(catalog.get(&SkillId::from("weapon")).unwrap().is_contextual_skill());
        assert!(catalog.skills().iter().all(|s| !s.is_contextual_skill()));
        assert_eq!(catalog.all_definitions().len(), 1);

        let mut rng = PcgRng::seeded(5);
        for _ in 0..20 {
            assert_eq!(catalog.random_skill(&mut rng).unwrap().as_str(), "melee");
        }
    }

    #[test]
    fn sorted_traversal_is_stable() {
        let catalog = SkillCatalog::from_records(vec![
            record("rifle", &["combat_skill"]),
            record("cooking", &[]),
            record("archery", &["combat_skill"]),
            record("barter", &[]),
        ])
        .unwrap();

        // Combat skills first; ties keep load order
        let sorted: Vec<_> = catalog
            .all_sorted_by(|a, b| b.is_combat_skill().cmp(&a.is_combat_skill()))
            .into_iter()
            .map(|s| s.ident().as_str())
            .collect();
        assert_eq!(sorted, ["rifle", "archery", "cooking", "barter"]);

        let by_name: Vec<_> = catalog
            .all_sorted_by(|a, b| a.name().cmp(b.name()))
            .into_iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(by_name, ["archery", "barter", "cooking", "rifle"]);
    }

    #[test]
    fn random_skill_on_empty_catalog_fails() {
        let catalog = SkillCatalog::new();
        let mut rng = PcgRng::seeded(0);
        assert_eq!(catalog.random_skill(&mut rng), Err(CatalogError::Empty));
    }

    #[test]
    fn random_skill_reaches_every_regular_skill() {
        let catalog = SkillCatalog::from_records(vec![
            record("dodge", &[]),
            record("melee", &[]),
            record("swimming", &[]),
        ])
        .unwrap();
        let mut rng = PcgRng::seeded(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(catalog.random_skill(&mut rng).unwrap().clone());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn malformed_record_aborts_load() {
        let result = SkillCatalog::from_records(vec![
            record("dodge", &[]),
            record("", &[]),
            record("melee", &[]),
        ]);
        assert!(matches!(result, Err(CatalogError::Malformed { .. })));
    }
}
