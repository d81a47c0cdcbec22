//! Event types for different topics.

use battle_core::{BattleState, RoundPhase, SelectError};
use serde::{Deserialize, Serialize};

/// Events related to the overall battle (lifecycle state and roster data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleStateEvent {
    /// The top-level battle state changed
    StateChanged { state: BattleState },

    /// A ledger or roster mutation occurred; consumers should re-render
    InfoChanged,
}

/// Events related to the beat cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RhythmEvent {
    /// The round phase changed
    PhaseChanged { phase: RoundPhase },

    /// A beat elapsed (1-based counter within the current cycle)
    Beat { index: u32 },
}

/// Events related to the decision window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DecisionEvent {
    /// The window opened for input
    Started,

    /// The window closed
    Ended,

    /// An action was committed; carries the pending-action label
    ActionChanged { label: String },

    /// A selection attempt was refused
    Rejected { reason: SelectError },
}
