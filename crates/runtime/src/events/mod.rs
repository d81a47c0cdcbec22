//! Topic-based event routing for battle notifications.
//!
//! The core engine hands the runtime a flat queue of [`battle_core::BattleEvent`]s;
//! this module sorts them onto per-topic broadcast channels so a HUD can
//! watch the decision window without also draining every beat.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{BattleStateEvent, DecisionEvent, RhythmEvent};
