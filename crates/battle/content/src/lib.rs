//! Data-driven battle content: rosters, skills, and fixtures.
//!
//! This crate houses the participant definitions consumed at battle setup:
//! - Roster definitions (data-driven via RON)
//! - Programmatic fixture duelists for tests and demos
//!
//! Content is handed to the battle engine wholesale and never mutated here.
//!
//! Loaders deserialize into definition types and convert to battle-core
//! state, so data files never need to carry runtime-only fields such as the
//! dodge-regen deadline.

pub mod fixtures;

#[cfg(feature = "loaders")]
pub mod defs;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use fixtures::duel_roster;

#[cfg(feature = "loaders")]
pub use defs::{BuffDef, ParticipantDef, RosterDef, SkillDef};

#[cfg(feature = "loaders")]
pub use loaders::{load_duel_roster, roster_from_ron_str};
