//! Core state types: time, sides, participants, and lifecycle enums.

mod common;
mod participant;
mod phase;

pub use common::{Seconds, Side};
pub use participant::{Buff, Participant, Roster, Skill, SkillKind};
pub use phase::{BattleState, RhythmState, RoundPhase};
