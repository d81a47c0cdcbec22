//! Rhythm cadence configuration.

use crate::state::Seconds;

/// Tunable parameters of the rhythm cycle.
///
/// Every parameter is clamped to a strictly positive minimum when set, so a
/// configuration can never produce a zero-or-negative period that would
/// starve the clock.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RhythmConfig {
    beats_before_decision: u32,
    beat_interval: Seconds,
    decision_window: Seconds,
    loop_delay: Seconds,
    dodge_regen_interval: Seconds,
}

impl RhythmConfig {
    // ===== clamping floors =====
    pub const MIN_BEATS_BEFORE_DECISION: u32 = 1;
    pub const MIN_BEAT_INTERVAL: f64 = 0.05;
    pub const MIN_DECISION_WINDOW: f64 = 0.1;
    pub const MIN_LOOP_DELAY: f64 = 0.05;
    pub const MIN_DODGE_REGEN_INTERVAL: f64 = 0.1;

    // ===== defaults =====
    pub const DEFAULT_BEATS_BEFORE_DECISION: u32 = 2;
    pub const DEFAULT_BEAT_INTERVAL: f64 = 0.5;
    pub const DEFAULT_DECISION_WINDOW: f64 = 0.5;
    pub const DEFAULT_LOOP_DELAY: f64 = 0.5;
    pub const DEFAULT_DODGE_REGEN_INTERVAL: f64 = 5.0;

    pub fn new() -> Self {
        Self {
            beats_before_decision: Self::DEFAULT_BEATS_BEFORE_DECISION,
            beat_interval: Seconds::new(Self::DEFAULT_BEAT_INTERVAL),
            decision_window: Seconds::new(Self::DEFAULT_DECISION_WINDOW),
            loop_delay: Seconds::new(Self::DEFAULT_LOOP_DELAY),
            dodge_regen_interval: Seconds::new(Self::DEFAULT_DODGE_REGEN_INTERVAL),
        }
    }

    // ===== builder-style setters (clamped) =====

    pub fn with_beats_before_decision(mut self, beats: u32) -> Self {
        self.set_beats_before_decision(beats);
        self
    }

    pub fn with_beat_interval(mut self, seconds: f64) -> Self {
        self.set_beat_interval(seconds);
        self
    }

    pub fn with_decision_window(mut self, seconds: f64) -> Self {
        self.set_decision_window(seconds);
        self
    }

    pub fn with_loop_delay(mut self, seconds: f64) -> Self {
        self.set_loop_delay(seconds);
        self
    }

    pub fn with_dodge_regen_interval(mut self, seconds: f64) -> Self {
        self.set_dodge_regen_interval(seconds);
        self
    }

    // ===== in-place setters (clamped) =====

    pub fn set_beats_before_decision(&mut self, beats: u32) {
        self.beats_before_decision = beats.max(Self::MIN_BEATS_BEFORE_DECISION);
    }

    pub fn set_beat_interval(&mut self, seconds: f64) {
        self.beat_interval = Seconds::new(seconds).at_least(Self::MIN_BEAT_INTERVAL);
    }

    pub fn set_decision_window(&mut self, seconds: f64) {
        self.decision_window = Seconds::new(seconds).at_least(Self::MIN_DECISION_WINDOW);
    }

    pub fn set_loop_delay(&mut self, seconds: f64) {
        self.loop_delay = Seconds::new(seconds).at_least(Self::MIN_LOOP_DELAY);
    }

    pub fn set_dodge_regen_interval(&mut self, seconds: f64) {
        self.dodge_regen_interval =
            Seconds::new(seconds).at_least(Self::MIN_DODGE_REGEN_INTERVAL);
    }

    // ===== accessors =====

    pub fn beats_before_decision(&self) -> u32 {
        self.beats_before_decision
    }

    pub fn beat_interval(&self) -> Seconds {
        self.beat_interval
    }

    pub fn decision_window(&self) -> Seconds {
        self.decision_window
    }

    pub fn loop_delay(&self) -> Seconds {
        self.loop_delay
    }

    pub fn dodge_regen_interval(&self) -> Seconds {
        self.dodge_regen_interval
    }
}

impl Default for RhythmConfig {
    fn default() -> Self {
        Self::new()
    }
}
