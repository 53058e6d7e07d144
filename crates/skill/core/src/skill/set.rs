use std::collections::BTreeMap;

use crate::config::SkillConfig;
use crate::time::Turn;

use super::{CatalogError, SkillId, SkillProgress};

/// A character's skills, keyed by identifier.
///
/// Iteration is in identifier order so saves and listings are stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillSet {
    skills: BTreeMap<SkillId, SkillProgress>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from an old save keyed by integer skill ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidLegacyId`] for the first unknown id.
    pub fn from_legacy(
        entries: impl IntoIterator<Item = (i64, SkillProgress)>,
    ) -> Result<Self, CatalogError> {
        let mut set = Self::new();
        for (legacy_id, progress) in entries {
            set.insert(SkillId::from_legacy_int(legacy_id)?, progress);
        }
        Ok(set)
    }

    pub fn get(&self, id: &SkillId) -> Option<&SkillProgress> {
        self.skills.get(id)
    }

    /// Level of `id`, or 0 for skills never touched.
    pub fn level(&self, id: &SkillId) -> u32 {
        self.get(id).map_or(0, SkillProgress::level)
    }

    /// Returns the record for `id`, creating a fresh one if absent.
    pub fn entry(&mut self, id: SkillId) -> &mut SkillProgress {
        self.skills.entry(id).or_default()
    }

    pub fn insert(&mut self, id: SkillId, progress: SkillProgress) -> Option<SkillProgress> {
        self.skills.insert(id, progress)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SkillId, &SkillProgress)> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Identifiers from most to least advanced; ties broken by identifier.
    pub fn sorted_by_progress(&self) -> Vec<&SkillId> {
        let mut entries: Vec<_> = self.skills.iter().collect();
        entries.sort_by(|(a_id, a), (b_id, b)| b.cmp_progress(a).then_with(|| a_id.cmp(b_id)));
        entries.into_iter().map(|(id, _)| id).collect()
    }

    /// Runs one rust check on every skill, returning the ones that decayed.
    pub fn rust_all(
        &mut self,
        now: Turn,
        charged_bio_mem: bool,
        config: &SkillConfig,
    ) -> Vec<SkillId> {
        self.skills
            .iter_mut()
            .filter_map(|(id, progress)| {
                progress
                    .rust(now, charged_bio_mem, config)
                    .then(|| id.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_skills_read_as_level_zero() {
        let mut set = SkillSet::new();
        assert_eq!(set.level(&SkillId::from("cooking")), 0);

        set.entry(SkillId::from("cooking")).set_level(3);
        assert_eq!(set.level(&SkillId::from("cooking")), 3);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn sorted_by_progress_descends() {
        let mut set = SkillSet::new();
        set.insert("melee".into(), SkillProgress::new(3, 2, true, Turn::ZERO, 3));
        set.insert("dodge".into(), SkillProgress::new(3, 5, true, Turn::ZERO, 3));
        set.insert("barter".into(), SkillProgress::new(1, 0, true, Turn::ZERO, 1));
        set.insert("archery".into(), SkillProgress::new(1, 0, true, Turn::ZERO, 1));

        let order: Vec<_> = set
            .sorted_by_progress()
            .into_iter()
            .map(SkillId::as_str)
            .collect();
        assert_eq!(order, ["dodge", "melee", "archery", "barter"]);
    }

    #[test]
    fn rust_all_reports_decayed_skills() {
        let config = SkillConfig::default();
        let mut set = SkillSet::new();
        set.insert("melee".into(), SkillProgress::new(1, 10, true, Turn::ZERO, 1));
        set.insert("dodge".into(), SkillProgress::new(1, 10, false, Turn::ZERO, 1));

        let decayed = set.rust_all(Turn(config.rust_rate(1)), false, &config);
        assert_eq!(decayed, vec![SkillId::from("melee")]);
        assert_eq!(set.get(&"melee".into()).unwrap().raw_exercise(), 9);
        assert_eq!(set.get(&"dodge".into()).unwrap().raw_exercise(), 10);
    }

    #[test]
    fn legacy_saves_map_to_string_ids() {
        let set = SkillSet::from_legacy([
            (2, SkillProgress::new(4, 0, true, Turn::ZERO, 4)),
            (22, SkillProgress::new(1, 0, true, Turn::ZERO, 1)),
        ])
        .unwrap();
        assert_eq!(set.level(&"melee".into()), 4);
        assert_eq!(set.level(&"barter".into()), 1);

        let err = SkillSet::from_legacy([(99, SkillProgress::default())]).unwrap_err();
        assert_eq!(err, CatalogError::InvalidLegacyId(99));
    }
}
