use std::fmt;

/// Battle-clock timestamp or duration in seconds.
///
/// The core never reads a wall clock; every time-driven operation receives a
/// `Seconds` value from the external driver, which keeps the whole state
/// machine deterministic and testable with synthetic timestamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seconds(pub f64);

impl Seconds {
    pub const ZERO: Self = Self(0.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Builds a duration from a raw value, clamping negatives to zero.
    pub fn saturating(value: f64) -> Self {
        Self(value.max(0.0))
    }

    /// Clamps this value to at least `floor`.
    pub fn at_least(self, floor: f64) -> Self {
        Self(self.0.max(floor))
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl std::ops::Add for Seconds {
    type Output = Seconds;
    fn add(self, rhs: Seconds) -> Seconds {
        Seconds(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Seconds {
    type Output = Seconds;
    fn sub(self, rhs: Seconds) -> Seconds {
        Seconds(self.0 - rhs.0)
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}

/// Which participant of the battle an operation targets.
///
/// Only the player side owns the decision window; the opponent's actions are
/// resolved externally and arrive as status pushes.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    /// The locally controlled participant (the acting side).
    #[default]
    Player,
    /// The other side of the duel.
    Opponent,
}
