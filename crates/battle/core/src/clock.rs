//! Time-driven rhythm state machine.
//!
//! The clock is a pure reducer over explicitly supplied timestamps: a single
//! `tick(now, &config)` advances it and yields the transitions that occurred.
//! It never touches ledgers or the decision window; the engine maps its
//! transitions onto those collaborators, keeping the schedule itself fully
//! deterministic and testable in isolation.

use arrayvec::ArrayVec;

use crate::config::RhythmConfig;
use crate::state::{RhythmState, Seconds};

/// A transition produced by one clock tick, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClockTransition {
    /// Left idle and began a fresh beat cycle.
    StartedBeating,
    /// A beat elapsed; carries the 1-based beat counter.
    Beat(u32),
    /// Enough beats accumulated; the decision window is now scheduled.
    EnteredDecision,
    /// The scheduled window start was reached; the window opens now.
    DecisionOpened,
    /// The window end was reached; the cycle returns to idle for the loop
    /// delay.
    DecisionClosed,
}

/// Maximum transitions a single tick can produce (a beat that immediately
/// schedules the decision window).
pub const MAX_TRANSITIONS_PER_TICK: usize = 2;

pub type ClockTransitions = ArrayVec<ClockTransition, MAX_TRANSITIONS_PER_TICK>;

/// The beat/decision scheduler driving one battle.
///
/// State space: `Idle` (stopped, or waiting out the loop delay), `Beating`
/// (accumulating beats), `Decision` (window scheduled or open). A window,
/// once closed, can only reopen after a full beat cycle: `DecisionClosed`
/// always routes through `Idle` and `Beating` again.
#[derive(Clone, Debug)]
pub struct RhythmClock {
    state: RhythmState,
    beat_count: u32,
    /// Next scheduled beat, or `None` when nothing is scheduled (stopped,
    /// or inside the decision phase).
    next_beat: Option<Seconds>,
    decision_start: Seconds,
    decision_end: Seconds,
    decision_started: bool,
}

impl RhythmClock {
    pub fn new() -> Self {
        Self {
            state: RhythmState::Idle,
            beat_count: 0,
            next_beat: None,
            decision_start: Seconds::ZERO,
            decision_end: Seconds::ZERO,
            decision_started: false,
        }
    }

    /// Begins beating immediately, scheduling the first beat one interval
    /// from `now`. Always re-initializes relative to the supplied time.
    pub fn start(&mut self, now: Seconds, config: &RhythmConfig) {
        self.state = RhythmState::Beating;
        self.beat_count = 0;
        self.next_beat = Some(now + config.beat_interval());
        self.decision_started = false;
    }

    /// Stops the clock, dropping any scheduled beat or decision so nothing
    /// fires after cancellation.
    pub fn stop(&mut self) {
        self.state = RhythmState::Idle;
        self.beat_count = 0;
        self.next_beat = None;
        self.decision_started = false;
    }

    /// Advances the clock to `now` and returns the transitions that fired.
    ///
    /// One tick handles one state; entering the decision phase and opening
    /// the window are separate ticks, which gives the presentation layer one
    /// tick of lead time before input is admitted.
    pub fn tick(&mut self, now: Seconds, config: &RhythmConfig) -> ClockTransitions {
        let mut out = ClockTransitions::new();

        match self.state {
            RhythmState::Idle => {
                if self.next_beat.is_some_and(|next| now >= next) {
                    self.start(now, config);
                    out.push(ClockTransition::StartedBeating);
                }
            }
            RhythmState::Beating => {
                if self.next_beat.is_some_and(|next| now >= next) {
                    self.beat_count += 1;
                    out.push(ClockTransition::Beat(self.beat_count));

                    if self.beat_count >= config.beats_before_decision() {
                        self.state = RhythmState::Decision;
                        self.decision_started = false;
                        self.decision_start = now;
                        self.decision_end = now + config.decision_window();
                        self.next_beat = None;
                        out.push(ClockTransition::EnteredDecision);
                    } else {
                        self.next_beat = Some(now + config.beat_interval());
                    }
                }
            }
            RhythmState::Decision => {
                if !self.decision_started {
                    if now >= self.decision_start {
                        self.decision_started = true;
                        out.push(ClockTransition::DecisionOpened);
                    }
                } else if now >= self.decision_end {
                    self.decision_started = false;
                    self.state = RhythmState::Idle;
                    self.next_beat = Some(now + config.loop_delay());
                    out.push(ClockTransition::DecisionClosed);
                }
            }
        }

        out
    }

    // ===== queries =====

    pub fn state(&self) -> RhythmState {
        self.state
    }

    pub fn beat_count(&self) -> u32 {
        self.beat_count
    }

    /// Time until the next scheduled beat; zero when none is scheduled.
    pub fn time_to_next_beat(&self, now: Seconds) -> Seconds {
        match self.next_beat {
            Some(next) => Seconds::saturating((next - now).0),
            None => Seconds::ZERO,
        }
    }

    /// Time until the open or scheduled window closes; zero outside the
    /// decision phase.
    pub fn time_to_decision_end(&self, now: Seconds) -> Seconds {
        if self.state == RhythmState::Decision {
            Seconds::saturating((self.decision_end - now).0)
        } else {
            Seconds::ZERO
        }
    }
}

impl Default for RhythmClock {
    fn default() -> Self {
        Self::new()
    }
}
