//! Per-character skill progression.
//!
//! A [`SkillProgress`] accumulates raw exercise points. Each level costs
//! quadratically more exercise than the last (see
//! [`SkillConfig::level_threshold`]), so the visible [`SkillProgress::exercise`]
//! value is the raw count divided by `(level + 1)^2`.
//!
//! All operations are total: gameplay inputs are clamped, never rejected.
//! `highest_level >= level` holds after every operation.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use crate::config::{RustMode, SkillConfig};
use crate::rng::RngOracle;
use crate::time::Turn;

/// Weight of a full level in [`SkillProgress::exercised_level`].
const EXERCISED_LEVEL_WEIGHT: u64 = 100;

/// Mutable progression state of one skill for one character.
///
/// Derived `PartialEq` compares the whole persisted record. Gameplay ordering
/// uses the named comparisons instead:
/// - [`SkillProgress::cmp_progress`] / [`SkillProgress::eq_progress`] order by
///   `(level, raw exercise)`;
/// - [`SkillProgress::cmp_level`] / [`SkillProgress::eq_level`] compare the
///   bare level against an integer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "ProgressRecord", into = "ProgressRecord")
)]
pub struct SkillProgress {
    level: u32,
    exercise: u32,
    is_training: bool,
    last_practiced: Turn,
    highest_level: u32,
}

impl Default for SkillProgress {
    fn default() -> Self {
        Self {
            level: 0,
            exercise: 0,
            is_training: true,
            last_practiced: Turn::ZERO,
            highest_level: 0,
        }
    }
}

impl SkillProgress {
    /// Creates a progress record. `highest_level` is raised to `level` if lower.
    pub fn new(
        level: u32,
        exercise: u32,
        is_training: bool,
        last_practiced: Turn,
        highest_level: u32,
    ) -> Self {
        Self {
            level,
            exercise,
            is_training,
            last_practiced,
            highest_level: highest_level.max(level),
        }
    }

    /// Creates a record with level and raw exercise drawn from inclusive ranges.
    ///
    /// Used when generating characters with randomized backgrounds.
    pub fn rolled(
        levels: RangeInclusive<u32>,
        exercise: RangeInclusive<u32>,
        is_training: bool,
        last_practiced: Turn,
        highest_level: u32,
        rng: &mut impl RngOracle,
    ) -> Self {
        let level = rng.range(*levels.start(), *levels.end());
        let exercise = rng.range(*exercise.start(), *exercise.end());
        Self::new(level, exercise, is_training, last_practiced, highest_level)
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Sets the level directly, raising the watermark when exceeded.
    pub fn set_level(&mut self, level: u32) -> u32 {
        self.level = level;
        self.highest_level = self.highest_level.max(level);
        level
    }

    pub fn highest_level(&self) -> u32 {
        self.highest_level
    }

    pub fn is_training(&self) -> bool {
        self.is_training
    }

    /// Flips the training flag and returns the new value.
    pub fn toggle_training(&mut self) -> bool {
        self.is_training = !self.is_training;
        self.is_training
    }

    pub fn last_practiced(&self) -> Turn {
        self.last_practiced
    }

    /// Exercise as displayed: raw points divided by `(level + 1)^2`.
    pub fn exercise(&self) -> u32 {
        let divisor = u64::from(self.level) + 1;
        (u64::from(self.exercise) / divisor.saturating_mul(divisor)) as u32
    }

    pub fn raw_exercise(&self) -> u32 {
        self.exercise
    }

    /// Composite ranking value combining level and partial progress.
    pub fn exercised_level(&self) -> u64 {
        let level = u64::from(self.level);
        level
            .saturating_mul(level)
            .saturating_mul(EXERCISED_LEVEL_WEIGHT)
            .saturating_add(u64::from(self.exercise()))
    }

    /// Adds exercise, leveling up as thresholds are crossed.
    ///
    /// Unless `skip_scaling` is set, `amount` is scaled by the configured
    /// training speed. Several levels may be gained in one call; leftover
    /// exercise carries over. At `config.max_level` exercise saturates just
    /// below the next threshold.
    ///
    /// Does not consult [`Self::is_training`]; callers gate on
    /// [`Self::can_train`].
    pub fn train(&mut self, amount: u32, skip_scaling: bool, config: &SkillConfig) {
        let gain = if skip_scaling {
            u64::from(amount)
        } else {
            config.scale_gain(amount)
        };
        self.advance(gain, config.max_level, config);
    }

    /// Records a practice event at `now`.
    ///
    /// Trained skills also gain `config.practice_exercise` unscaled points.
    pub fn practice(&mut self, now: Turn, config: &SkillConfig) {
        self.last_practiced = now;
        if self.is_training && config.practice_exercise > 0 {
            self.train(config.practice_exercise, true, config);
        }
    }

    /// Returns true if further training can have an effect.
    pub fn can_train(&self, config: &SkillConfig) -> bool {
        self.is_training && config.training_speed_percent > 0 && self.level < config.max_level
    }

    /// Returns true if the skill has gone unpracticed long enough to decay.
    ///
    /// Only trained skills above level 0 rust.
    pub fn is_rusting(&self, now: Turn, config: &SkillConfig) -> bool {
        config.rust_mode != RustMode::Off
            && self.level > 0
            && self.is_training
            && now.since(self.last_practiced) >= config.rust_rate(self.level)
    }

    /// Applies one decay step if one is due at `now`.
    ///
    /// Steps fall on exact multiples of the rust rate since the last practice.
    /// A charged bionic memory suppresses the step. Returns whether the skill
    /// decayed.
    pub fn rust(&mut self, now: Turn, charged_bio_mem: bool, config: &SkillConfig) -> bool {
        if !self.is_rusting(now, config) {
            return false;
        }
        if now.since(self.last_practiced) % config.rust_rate(self.level) != 0 {
            return false;
        }
        if charged_bio_mem {
            return false;
        }

        match self.exercise.checked_sub(self.level) {
            Some(remaining) => self.exercise = remaining,
            None => match config.rust_mode {
                RustMode::Vanilla => {
                    // highest_level is a watermark and stays put
                    self.level -= 1;
                    self.exercise = threshold_u32(config.level_threshold(self.level) - 1);
                }
                RustMode::Capped | RustMode::Off => self.exercise = 0,
            },
        }
        true
    }

    /// Studies a book granting `min_gain..=max_gain` (times `level + 1`) exercise.
    ///
    /// With `max_level` set the skill never levels past it; a reader already at
    /// that level still gains exercise up to the threshold, a reader above it
    /// learns nothing. The practice time is always recorded.
    pub fn read_book(
        &mut self,
        min_gain: u32,
        max_gain: u32,
        max_level: Option<u32>,
        now: Turn,
        rng: &mut impl RngOracle,
        config: &SkillConfig,
    ) {
        if max_level.is_none_or(|cap| self.level <= cap) {
            let cap = max_level.map_or(config.max_level, |cap| cap.min(config.max_level));
            let roll = rng.range(min_gain, max_gain);
            let amount = roll.saturating_mul(self.level.saturating_add(1));
            self.advance(config.scale_gain(amount), cap, config);
        }
        self.last_practiced = now;
    }

    /// Orders by level, then raw exercise.
    pub fn cmp_progress(&self, other: &Self) -> Ordering {
        self.level
            .cmp(&other.level)
            .then(self.exercise.cmp(&other.exercise))
    }

    /// Equal level and raw exercise.
    pub fn eq_progress(&self, other: &Self) -> bool {
        self.cmp_progress(other) == Ordering::Equal
    }

    /// Compares the bare level against `level`.
    pub fn cmp_level(&self, level: u32) -> Ordering {
        self.level.cmp(&level)
    }

    pub fn eq_level(&self, level: u32) -> bool {
        self.level == level
    }

    fn advance(&mut self, gain: u64, cap: u32, config: &SkillConfig) {
        if gain == 0 {
            return;
        }
        let start_level = self.level;
        let mut level = self.level;
        let mut exercise = u64::from(self.exercise).saturating_add(gain);

        loop {
            let threshold = config.level_threshold(level);
            if exercise < threshold {
                break;
            }
            if level >= cap {
                let ceiling = threshold - 1;
                exercise = if level == start_level {
                    ceiling.max(u64::from(self.exercise))
                } else {
                    ceiling
                };
                break;
            }
            exercise -= threshold;
            level += 1;
        }

        self.exercise = threshold_u32(exercise);
        self.set_level(level);
    }
}

fn threshold_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Persisted shape of a progress record.
///
/// Older saves may lack `highestlevel`; it is restored from `level`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ProgressRecord {
    level: u32,
    exercise: u32,
    istraining: bool,
    lastpracticed: Turn,
    #[serde(default)]
    highestlevel: u32,
}

#[cfg(feature = "serde")]
impl From<ProgressRecord> for SkillProgress {
    fn from(record: ProgressRecord) -> Self {
        Self::new(
            record.level,
            record.exercise,
            record.istraining,
            record.lastpracticed,
            record.highestlevel,
        )
    }
}

#[cfg(feature = "serde")]
impl From<SkillProgress> for ProgressRecord {
    fn from(progress: SkillProgress) -> Self {
        Self {
            level: progress.level,
            exercise: progress.exercise,
            istraining: progress.is_training,
            lastpracticed: progress.last_practiced,
            highestlevel: progress.highest_level,
        }
    }
}

/// Barter price multiplier for a skill level.
///
/// Unskilled traders pay a 25% markup; from level 6 on they get a 10% discount.
pub fn price_adjustment(level: u32) -> f64 {
    match level {
        0 => 1.25,
        1 => 1.15,
        2 => 1.1,
        3 => 1.05,
        4 => 1.0,
        5 => 0.95,
        _ => 0.9,
    }
}
