//! Single-admission decision window.
//!
//! Each rhythm cycle opens one window in which exactly one action may be
//! committed. A selection that fails its resource spend still locks the
//! window and counts as having acted: the participant attempted to act, so
//! the turn is consumed and the end-of-window spirit trickle is forfeited,
//! but nothing was spent.

use crate::ledger::ResourceLedger;
use crate::state::Skill;

/// Pending-action marker shown while nothing has been selected: the
/// participant is gathering spirit this round.
pub const DEFAULT_ACTION_LABEL: &str = "gather";

/// Reasons a skill selection is refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectError {
    /// No decision window is currently open.
    #[error("no decision window is open")]
    NotInDecision,

    /// An action was already committed in this window.
    #[error("an action was already committed this window")]
    AlreadySelected,

    /// Skill index out of range.
    #[error("skill index does not address a skill")]
    InvalidSkill,

    /// Not enough spirit for the skill's cost.
    #[error("not enough spirit")]
    SpiritNotEnough,

    /// No dodge charges remaining.
    #[error("no dodge charges remaining")]
    DodgeNotEnough,
}

/// Outcome of an accepted selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Display name of the committed skill, the new pending-action label.
    pub label: String,
    /// Whether the spend actually mutated the ledger (false for zero-cost
    /// spirit skills).
    pub spent: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WindowState {
    Closed,
    Open { locked: bool },
}

/// The action-selection gate for one side of the battle.
#[derive(Clone, Debug)]
pub struct DecisionWindow {
    state: WindowState,
    pending_label: String,
    acted: bool,
}

impl DecisionWindow {
    pub fn new() -> Self {
        Self {
            state: WindowState::Closed,
            pending_label: DEFAULT_ACTION_LABEL.to_string(),
            acted: false,
        }
    }

    /// Opens the window for a fresh cycle, resetting the pending label and
    /// the acted flag.
    pub fn open(&mut self) {
        self.state = WindowState::Open { locked: false };
        self.pending_label.clear();
        self.pending_label.push_str(DEFAULT_ACTION_LABEL);
        self.acted = false;
    }

    /// Closes the window and reports whether it was used this cycle, either
    /// by an accepted selection or by a rejected-but-locked attempt.
    pub fn close(&mut self) -> bool {
        self.state = WindowState::Closed;
        self.acted
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, WindowState::Open { .. })
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.state, WindowState::Open { locked: true })
    }

    /// Label of the committed action, or the default marker if none.
    pub fn pending_label(&self) -> &str {
        &self.pending_label
    }

    /// Attempts to commit the skill at `index`, spending from `ledger`.
    ///
    /// A failed dodge or spirit spend still locks the window and marks the
    /// participant as having acted; only the ledger stays untouched.
    pub fn try_select(
        &mut self,
        skills: &[Skill],
        ledger: &mut ResourceLedger,
        index: usize,
    ) -> Result<Selection, SelectError> {
        match self.state {
            WindowState::Closed => return Err(SelectError::NotInDecision),
            WindowState::Open { locked: true } => return Err(SelectError::AlreadySelected),
            WindowState::Open { locked: false } => {}
        }

        let skill = skills.get(index).ok_or(SelectError::InvalidSkill)?;

        let (spent, shortfall) = if skill.kind.is_dodge() {
            (ledger.spend_dodge_charge(), SelectError::DodgeNotEnough)
        } else {
            (ledger.spend_spirit(skill.cost), SelectError::SpiritNotEnough)
        };

        if !spent {
            // The attempt consumes the turn even though nothing was spent.
            self.state = WindowState::Open { locked: true };
            self.acted = true;
            return Err(shortfall);
        }

        self.pending_label.clear();
        self.pending_label.push_str(&skill.name);
        self.state = WindowState::Open { locked: true };
        self.acted = true;

        // A dodge always spends a charge; a spirit skill mutates the ledger
        // only when its cost is non-zero.
        Ok(Selection {
            label: skill.name.clone(),
            spent: skill.kind.is_dodge() || skill.cost > 0,
        })
    }
}

impl Default for DecisionWindow {
    fn default() -> Self {
        Self::new()
    }
}
