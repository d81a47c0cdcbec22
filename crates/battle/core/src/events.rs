//! Typed battle notifications.
//!
//! The engine accumulates these in emission order inside each operation;
//! whoever embeds the engine drains the queue and fans the messages out
//! (event bus, UI redraw, or a plain collector in tests).

use crate::decision::SelectError;
use crate::state::{BattleState, RoundPhase};

/// A notification emitted by the battle engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// The top-level battle state changed (never re-emitted for the same
    /// state).
    BattleStateChanged(BattleState),
    /// The round phase changed (never re-emitted for the same phase).
    RoundPhaseChanged(RoundPhase),
    /// A beat elapsed; carries the 1-based beat counter.
    Beat(u32),
    /// The decision window opened.
    DecisionStarted,
    /// The decision window closed.
    DecisionEnded,
    /// An action was committed; carries the new pending-action label.
    ActionChanged { label: String },
    /// A selection attempt was refused.
    ActionRejected(SelectError),
    /// A ledger or roster mutation occurred; presentation should re-render.
    InfoChanged,
}
