//! Battle, rhythm, and round-phase state enums.
//!
//! Three views of the same cycle at different granularities: `BattleState` is
//! the top-level lifecycle, `RhythmState` is the clock's own machine, and
//! `RoundPhase` is the fine-grained presentation-facing subdivision of one
//! rhythm cycle.

/// Top-level battle lifecycle state.
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
pub enum BattleState {
    /// No battle has been started yet.
    #[default]
    None,
    /// Battle setup is in progress.
    Preparing,
    /// The rhythm cycle is running (beats and loop delay).
    Rhythm,
    /// A decision window is scheduled or open.
    Decision,
    /// An external resolver is applying the round outcome.
    Resolve,
    /// The battle has ended.
    Finished,
}

/// Internal state of the rhythm clock.
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
pub enum RhythmState {
    /// Not beating; either stopped or waiting out the loop delay.
    #[default]
    Idle,
    /// Accumulating beats toward the next decision window.
    Beating,
    /// The decision window is scheduled or open.
    Decision,
}

/// Fine-grained subdivision of one rhythm cycle.
///
/// Invariant: `RoundPhase::Decision` holds exactly while the clock is in
/// `RhythmState::Decision` and the window is open or pending-open.
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
pub enum RoundPhase {
    /// No cycle is running.
    #[default]
    None,
    /// Beats are accumulating.
    Beat,
    /// The decision window is scheduled or open.
    Decision,
    /// The round outcome is being presented.
    Result,
    /// Waiting out the delay before the next cycle.
    LoopDelay,
}
