/// How skills decay when left unpracticed.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RustMode {
    /// Skills never decay.
    Off,
    /// Decay can cost whole levels.
    #[default]
    Vanilla,
    /// Decay drains exercise but never drops a level.
    Capped,
}

/// Tunable parameters for skill progression.
///
/// Every field has a default so partial TOML files are accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkillConfig {
    /// Percentage applied to scaled training gains. 0 disables training.
    pub training_speed_percent: u32,
    /// Raw exercise needed to leave level 0. Level `n` needs `this * (n+1)^2`.
    pub exercise_per_level: u32,
    /// Highest level reachable through training.
    pub max_level: u32,
    /// Raw exercise granted by a single practice event on a trained skill.
    pub practice_exercise: u32,
    pub rust_mode: RustMode,
    /// Turns between decay steps at level 0. Halves per level up to level 7.
    pub rust_base_period: u64,
}

impl SkillConfig {
    pub const DEFAULT_TRAINING_SPEED_PERCENT: u32 = 100;
    pub const DEFAULT_EXERCISE_PER_LEVEL: u32 = 100;
    pub const DEFAULT_MAX_LEVEL: u32 = 10;
    pub const DEFAULT_PRACTICE_EXERCISE: u32 = 1;
    pub const DEFAULT_RUST_BASE_PERIOD: u64 = 1 << 16;

    /// Level beyond which the rust period stops shrinking.
    pub const RUST_RATE_LEVEL_CAP: u32 = 7;

    pub fn new() -> Self {
        Self {
            training_speed_percent: Self::DEFAULT_TRAINING_SPEED_PERCENT,
            exercise_per_level: Self::DEFAULT_EXERCISE_PER_LEVEL,
            max_level: Self::DEFAULT_MAX_LEVEL,
            practice_exercise: Self::DEFAULT_PRACTICE_EXERCISE,
            rust_mode: RustMode::default(),
            rust_base_period: Self::DEFAULT_RUST_BASE_PERIOD,
        }
    }

    pub fn with_rust_mode(mut self, rust_mode: RustMode) -> Self {
        self.rust_mode = rust_mode;
        self
    }

    pub fn with_training_speed(mut self, percent: u32) -> Self {
        self.training_speed_percent = percent;
        self
    }

    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = max_level;
        self
    }

    /// Raw exercise needed to advance from `level` to `level + 1`.
    ///
    /// Saturates at `u64::MAX` for absurd levels.
    pub fn level_threshold(&self, level: u32) -> u64 {
        let next = u64::from(level) + 1;
        u64::from(self.exercise_per_level.max(1))
            .saturating_mul(next)
            .saturating_mul(next)
    }

    /// Turns between decay steps for a skill at `level`.
    pub fn rust_rate(&self, level: u32) -> u64 {
        let shift = level.min(Self::RUST_RATE_LEVEL_CAP);
        (self.rust_base_period >> shift).max(1)
    }

    /// Applies the training speed percentage to a raw gain.
    pub fn scale_gain(&self, amount: u32) -> u64 {
        u64::from(amount) * u64::from(self.training_speed_percent) / 100
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self::new()
    }
}
