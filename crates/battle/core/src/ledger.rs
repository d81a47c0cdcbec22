//! Bounded resource counters for one participant.
//!
//! The ledger owns health, spirit, and dodge charges together with their
//! bounds and the dodge-regeneration deadline. All mutating operations report
//! whether a value actually changed so the engine can emit exactly one
//! info-changed notification per real mutation and stay silent on no-ops.

use crate::state::Seconds;

/// Health, spirit, and dodge-charge pools for one participant.
///
/// Invariants, held after every operation:
/// - `health_floor <= health <= health_ceiling`
/// - `0 <= spirit <= spirit_ceiling`
/// - `0 <= dodge_charges <= dodge_ceiling`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceLedger {
    health: i32,
    health_floor: i32,
    health_ceiling: i32,
    spirit: u32,
    spirit_ceiling: u32,
    dodge_charges: u32,
    dodge_ceiling: u32,
    next_dodge_regen: Seconds,
}

impl ResourceLedger {
    /// Creates a ledger at full health, full dodge charges, and zero spirit.
    pub fn new(
        health_floor: i32,
        health_ceiling: i32,
        spirit_ceiling: u32,
        dodge_ceiling: u32,
    ) -> Self {
        let health_ceiling = health_ceiling.max(health_floor);
        Self {
            health: health_ceiling,
            health_floor,
            health_ceiling,
            spirit: 0,
            spirit_ceiling,
            dodge_charges: dodge_ceiling,
            dodge_ceiling,
            next_dodge_regen: Seconds::ZERO,
        }
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health.clamp(self.health_floor, self.health_ceiling);
        self
    }

    pub fn with_spirit(mut self, spirit: u32) -> Self {
        self.spirit = spirit.min(self.spirit_ceiling);
        self
    }

    pub fn with_dodge_charges(mut self, charges: u32) -> Self {
        self.dodge_charges = charges.min(self.dodge_ceiling);
        self
    }

    // ===== accessors =====

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn health_floor(&self) -> i32 {
        self.health_floor
    }

    pub fn health_ceiling(&self) -> i32 {
        self.health_ceiling
    }

    pub fn spirit(&self) -> u32 {
        self.spirit
    }

    pub fn spirit_ceiling(&self) -> u32 {
        self.spirit_ceiling
    }

    pub fn dodge_charges(&self) -> u32 {
        self.dodge_charges
    }

    pub fn dodge_ceiling(&self) -> u32 {
        self.dodge_ceiling
    }

    // ===== spend / regen operations =====

    /// Spends `cost` spirit. Fails without mutation if the pool is short.
    ///
    /// A zero cost always succeeds and mutates nothing.
    pub fn spend_spirit(&mut self, cost: u32) -> bool {
        if cost == 0 {
            return true;
        }
        if cost > self.spirit {
            return false;
        }
        self.spirit -= cost;
        true
    }

    /// Spends one dodge charge. Fails without mutation at zero charges.
    pub fn spend_dodge_charge(&mut self) -> bool {
        if self.dodge_charges == 0 {
            return false;
        }
        self.dodge_charges -= 1;
        true
    }

    /// Schedules the next dodge regeneration at `now + interval`.
    ///
    /// Called when the battle starts so the first charge is not granted
    /// immediately on the first tick.
    pub fn arm_dodge_regen(&mut self, now: Seconds, interval: Seconds) {
        self.next_dodge_regen = now + interval;
    }

    /// Time-driven dodge regeneration; returns true if a charge was gained.
    ///
    /// While at ceiling the deadline keeps advancing, so skipped
    /// regenerations are never banked: dropping below ceiling always starts
    /// a full `interval` wait.
    pub fn regen_dodge(&mut self, now: Seconds, interval: Seconds) -> bool {
        if !interval.is_positive() || self.dodge_ceiling == 0 {
            return false;
        }
        if self.dodge_charges >= self.dodge_ceiling {
            self.next_dodge_regen = now + interval;
            return false;
        }
        if now < self.next_dodge_regen {
            return false;
        }
        self.dodge_charges += 1;
        self.next_dodge_regen = now + interval;
        true
    }

    /// Grants the end-of-window spirit trickle for an inactive participant.
    ///
    /// Returns true if spirit actually increased; at ceiling this is a no-op.
    pub fn passive_spirit_gain(&mut self) -> bool {
        if self.spirit >= self.spirit_ceiling {
            return false;
        }
        self.spirit += 1;
        true
    }

    /// Applies an externally resolved status push, clamping each counter into
    /// its bounds. Returns true if any counter changed.
    pub fn set_status(&mut self, health: i32, dodge: u32, spirit: u32) -> bool {
        let health = health.clamp(self.health_floor, self.health_ceiling);
        let dodge = dodge.min(self.dodge_ceiling);
        let spirit = spirit.min(self.spirit_ceiling);

        let changed =
            health != self.health || dodge != self.dodge_charges || spirit != self.spirit;
        self.health = health;
        self.dodge_charges = dodge;
        self.spirit = spirit;
        changed
    }
}
