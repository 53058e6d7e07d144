use std::fmt;

/// Discrete in-game time unit.
///
/// The calendar itself lives outside this crate; callers pass the current turn
/// into every time-dependent operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Turn(pub u64);

impl Turn {
    /// The first turn of the game.
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Turns elapsed since `earlier`, or zero if `earlier` is in the future.
    #[inline]
    pub fn since(self, earlier: Turn) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Turn {
    type Output = Turn;
    fn add(self, rhs: u64) -> Turn {
        Turn(self.0.saturating_add(rhs))
    }
}

impl std::ops::Sub<u64> for Turn {
    type Output = Turn;
    fn sub(self, rhs: u64) -> Turn {
        Turn(self.0.saturating_sub(rhs))
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
