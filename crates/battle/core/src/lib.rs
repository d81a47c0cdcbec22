//! Deterministic rhythm-battle logic shared across embedders.
//!
//! `battle-core` defines the canonical timing and resolution rules of the
//! beat-driven duel: the bounded resource ledgers, the single-admission
//! decision window, the rhythm clock, and the battle engine that sequences
//! them. All state mutation flows through [`engine::BattleEngine`], which is
//! advanced purely by externally supplied timestamps, so the whole core can
//! be driven by a frame loop in production and by synthetic clocks in tests.
pub mod clock;
pub mod config;
pub mod decision;
pub mod engine;
pub mod events;
pub mod ledger;
pub mod state;

pub use clock::{ClockTransition, ClockTransitions, RhythmClock};
pub use config::RhythmConfig;
pub use decision::{DEFAULT_ACTION_LABEL, DecisionWindow, SelectError, Selection};
pub use engine::BattleEngine;
pub use events::BattleEvent;
pub use ledger::ResourceLedger;
pub use state::{
    BattleState, Buff, Participant, RhythmState, Roster, RoundPhase, Seconds, Side, Skill,
    SkillKind,
};
