//! Battle orchestration.
//!
//! [`BattleEngine`] is the single authority over battle state: it owns the
//! roster, the rhythm clock, and the player-side decision window, and every
//! mutation flows through it. An external driver advances it with `tick(now)`
//! and forwards input through `try_select_skill`; the engine republishes what
//! happened as a drained queue of [`BattleEvent`]s.

use crate::clock::{ClockTransition, RhythmClock};
use crate::config::RhythmConfig;
use crate::decision::{DecisionWindow, SelectError};
use crate::events::BattleEvent;
use crate::state::{BattleState, RhythmState, Roster, RoundPhase, Seconds, Side};

/// Top-level battle state machine and event source.
///
/// Single-threaded and tick-driven: all transitions happen synchronously
/// inside the operation that caused them, in a fixed order (dodge
/// regeneration before clock advancement, and a closing window fully
/// resolved, passive gain included, before the next cycle can begin).
pub struct BattleEngine {
    config: RhythmConfig,
    roster: Roster,
    clock: RhythmClock,
    window: DecisionWindow,
    battle_state: BattleState,
    round_phase: RoundPhase,
    events: Vec<BattleEvent>,
}

impl BattleEngine {
    pub fn new(config: RhythmConfig, roster: Roster) -> Self {
        Self {
            config,
            roster,
            clock: RhythmClock::new(),
            window: DecisionWindow::new(),
            battle_state: BattleState::None,
            round_phase: RoundPhase::None,
            events: Vec::new(),
        }
    }

    /// Emits the initial re-render notification once the embedder is ready
    /// to consume events.
    pub fn initialize(&mut self) {
        self.events.push(BattleEvent::InfoChanged);
    }

    // ===== lifecycle =====

    /// Starts the battle: `Preparing`, then immediately into the rhythm
    /// cycle, and arms dodge regeneration for the acting side.
    ///
    /// A second call while the battle is already running is a no-op, so
    /// repeated starts never duplicate state notifications.
    pub fn start_battle(&mut self, now: Seconds) {
        if matches!(
            self.battle_state,
            BattleState::Preparing | BattleState::Rhythm | BattleState::Decision
        ) {
            return;
        }

        self.set_battle_state(BattleState::Preparing);
        self.start_rhythm(now);
        self.roster
            .player
            .ledger
            .arm_dodge_regen(now, self.config.dodge_regen_interval());
    }

    /// Stops the rhythm and finishes the battle.
    pub fn end_battle(&mut self) {
        self.stop_rhythm();
        self.set_battle_state(BattleState::Finished);
    }

    /// (Re)starts the beat cycle relative to `now`.
    ///
    /// A window left open by a mid-decision restart is discarded, since the
    /// fresh cycle must earn its window through a full run of beats.
    pub fn start_rhythm(&mut self, now: Seconds) {
        if self.window.is_open() {
            let _ = self.window.close();
        }
        self.clock.start(now, &self.config);
        self.set_round_phase(RoundPhase::Beat);
        self.set_battle_state(BattleState::Rhythm);
    }

    /// Stops the beat cycle, cancelling any scheduled beat or decision.
    ///
    /// An open window is discarded without a decision-end notification and
    /// without the passive spirit trickle: the cycle was cancelled, not
    /// completed.
    pub fn stop_rhythm(&mut self) {
        self.clock.stop();
        if self.window.is_open() {
            let _ = self.window.close();
        }
        self.set_round_phase(RoundPhase::None);
    }

    // ===== tick =====

    /// Advances the battle to `now`: dodge regeneration for the acting side
    /// first, then the rhythm clock.
    pub fn tick(&mut self, now: Seconds) {
        self.tick_dodge_regen(now);

        let transitions = self.clock.tick(now, &self.config);
        for transition in transitions {
            self.apply_transition(transition);
        }
    }

    fn tick_dodge_regen(&mut self, now: Seconds) {
        if matches!(self.battle_state, BattleState::None | BattleState::Finished) {
            return;
        }
        let interval = self.config.dodge_regen_interval();
        if self.roster.player.ledger.regen_dodge(now, interval) {
            self.events.push(BattleEvent::InfoChanged);
        }
    }

    fn apply_transition(&mut self, transition: ClockTransition) {
        match transition {
            ClockTransition::StartedBeating => {
                self.set_round_phase(RoundPhase::Beat);
            }
            ClockTransition::Beat(index) => {
                self.events.push(BattleEvent::Beat(index));
            }
            ClockTransition::EnteredDecision => {
                self.set_battle_state(BattleState::Decision);
                self.set_round_phase(RoundPhase::Decision);
            }
            ClockTransition::DecisionOpened => {
                self.window.open();
                self.events.push(BattleEvent::DecisionStarted);
            }
            ClockTransition::DecisionClosed => {
                let acted = self.window.close();
                if !acted && self.roster.player.ledger.passive_spirit_gain() {
                    self.events.push(BattleEvent::InfoChanged);
                }
                self.set_round_phase(RoundPhase::Result);
                self.events.push(BattleEvent::DecisionEnded);
                self.set_battle_state(BattleState::Rhythm);
                self.set_round_phase(RoundPhase::LoopDelay);
            }
        }
    }

    // ===== input =====

    /// Attempts to commit the player skill at `index` during an open window.
    ///
    /// Outside a window this reports [`SelectError::NotInDecision`] and
    /// mutates nothing.
    pub fn try_select_skill(&mut self, index: usize) -> Result<(), SelectError> {
        let player = &mut self.roster.player;
        match self.window.try_select(&player.skills, &mut player.ledger, index) {
            Ok(selection) => {
                if selection.spent {
                    self.events.push(BattleEvent::InfoChanged);
                }
                self.events.push(BattleEvent::ActionChanged {
                    label: selection.label,
                });
                Ok(())
            }
            Err(reason) => {
                self.events.push(BattleEvent::ActionRejected(reason));
                Err(reason)
            }
        }
    }

    // ===== external mutation =====

    /// Applies an externally resolved status push for either side.
    pub fn update_status(&mut self, side: Side, health: i32, dodge: u32, spirit: u32) {
        if self
            .roster
            .side_mut(side)
            .ledger
            .set_status(health, dodge, spirit)
        {
            self.events.push(BattleEvent::InfoChanged);
        }
    }

    /// Replaces both participants wholesale.
    pub fn set_roster(&mut self, roster: Roster) {
        self.roster = roster;
        self.events.push(BattleEvent::InfoChanged);
    }

    /// Replaces the rhythm configuration (already clamped by
    /// [`RhythmConfig`] itself). Takes effect from the next scheduled
    /// deadline onward.
    pub fn set_config(&mut self, config: RhythmConfig) {
        self.config = config;
    }

    // ===== queries =====

    pub fn battle_state(&self) -> BattleState {
        self.battle_state
    }

    pub fn rhythm_state(&self) -> RhythmState {
        self.clock.state()
    }

    pub fn round_phase(&self) -> RoundPhase {
        self.round_phase
    }

    pub fn beat_count(&self) -> u32 {
        self.clock.beat_count()
    }

    pub fn time_to_next_beat(&self, now: Seconds) -> Seconds {
        self.clock.time_to_next_beat(now)
    }

    pub fn time_to_decision_end(&self, now: Seconds) -> Seconds {
        self.clock.time_to_decision_end(now)
    }

    /// True while the decision window is open for input.
    pub fn is_decision_window(&self) -> bool {
        self.window.is_open()
    }

    /// Label of the action committed this window, or the default marker.
    pub fn pending_action_label(&self) -> &str {
        self.window.pending_label()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn config(&self) -> &RhythmConfig {
        &self.config
    }

    /// Takes every notification emitted since the last drain, in emission
    /// order.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    // ===== guarded setters =====

    fn set_battle_state(&mut self, next: BattleState) {
        if self.battle_state == next {
            return;
        }
        self.battle_state = next;
        self.events.push(BattleEvent::BattleStateChanged(next));
    }

    fn set_round_phase(&mut self, next: RoundPhase) {
        if self.round_phase == next {
            return;
        }
        self.round_phase = next;
        self.events.push(BattleEvent::RoundPhaseChanged(next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ResourceLedger;
    use crate::state::{Participant, Skill, SkillKind};

    fn duelist(name: &str) -> Participant {
        Participant::new(name, ResourceLedger::new(0, 10, 10, 2)).with_skills(vec![
            Skill::new("Guard", 0, SkillKind::Dodge),
            Skill::new("Strike", 1, SkillKind::NormalAttack),
            Skill::new("Crescent Cut", 2, SkillKind::AttackSkill),
            Skill::new("Iron Veil", 2, SkillKind::DefenseSkill),
        ])
    }

    fn engine() -> BattleEngine {
        let config = RhythmConfig::new()
            .with_beats_before_decision(2)
            .with_beat_interval(0.5)
            .with_decision_window(0.5)
            .with_loop_delay(0.5);
        BattleEngine::new(config, Roster::new(duelist("Hero"), duelist("Rival")))
    }

    fn at(seconds: f64) -> Seconds {
        Seconds::new(seconds)
    }

    #[test]
    fn beats_then_decision_then_dodge_selection() {
        let mut engine = engine();
        engine.start_battle(at(0.0));
        engine.drain_events();

        engine.tick(at(0.0));
        assert!(engine.drain_events().is_empty());

        engine.tick(at(0.5));
        assert_eq!(engine.drain_events(), vec![BattleEvent::Beat(1)]);

        engine.tick(at(1.0));
        assert_eq!(
            engine.drain_events(),
            vec![
                BattleEvent::Beat(2),
                BattleEvent::BattleStateChanged(BattleState::Decision),
                BattleEvent::RoundPhaseChanged(RoundPhase::Decision),
            ]
        );
        assert!(!engine.is_decision_window());

        // Window opens on the following tick.
        engine.tick(at(1.05));
        assert_eq!(engine.drain_events(), vec![BattleEvent::DecisionStarted]);
        assert!(engine.is_decision_window());

        // Selecting the dodge spends a charge and locks the window.
        engine.try_select_skill(0).unwrap();
        assert_eq!(engine.roster().player.ledger.dodge_charges(), 1);
        assert_eq!(
            engine.drain_events(),
            vec![
                BattleEvent::InfoChanged,
                BattleEvent::ActionChanged {
                    label: "Guard".to_string()
                },
            ]
        );

        // Close of the window: an action occurred, so no passive gain.
        engine.tick(at(1.55));
        assert_eq!(
            engine.drain_events(),
            vec![
                BattleEvent::RoundPhaseChanged(RoundPhase::Result),
                BattleEvent::DecisionEnded,
                BattleEvent::BattleStateChanged(BattleState::Rhythm),
                BattleEvent::RoundPhaseChanged(RoundPhase::LoopDelay),
            ]
        );
        assert_eq!(engine.roster().player.ledger.spirit(), 0);
    }

    #[test]
    fn idle_window_grants_the_spirit_trickle() {
        let mut engine = engine();
        engine.start_battle(at(0.0));
        engine.tick(at(0.5));
        engine.tick(at(1.0));
        engine.tick(at(1.05));
        engine.drain_events();

        engine.tick(at(1.55));
        let events = engine.drain_events();
        assert_eq!(events[0], BattleEvent::InfoChanged);
        assert_eq!(engine.roster().player.ledger.spirit(), 1);
    }

    #[test]
    fn trickle_is_silent_at_spirit_ceiling() {
        let mut engine = engine();
        engine.update_status(Side::Player, 10, 2, 10);
        engine.start_battle(at(0.0));
        engine.tick(at(0.5));
        engine.tick(at(1.0));
        engine.tick(at(1.05));
        engine.drain_events();

        engine.tick(at(1.55));
        let events = engine.drain_events();
        assert!(!events.contains(&BattleEvent::InfoChanged));
        assert_eq!(engine.roster().player.ledger.spirit(), 10);
    }

    #[test]
    fn failed_dodge_locks_window_and_forfeits_trickle() {
        let mut engine = engine();
        engine.update_status(Side::Player, 10, 0, 0);
        engine.start_battle(at(0.0));
        engine.tick(at(0.5));
        engine.tick(at(1.0));
        engine.tick(at(1.05));
        engine.drain_events();

        assert_eq!(engine.try_select_skill(0), Err(SelectError::DodgeNotEnough));
        assert_eq!(engine.roster().player.ledger.dodge_charges(), 0);
        assert_eq!(
            engine.drain_events(),
            vec![BattleEvent::ActionRejected(SelectError::DodgeNotEnough)]
        );

        assert_eq!(engine.try_select_skill(1), Err(SelectError::AlreadySelected));
        engine.drain_events();

        // The failed attempt consumed the turn: no passive gain either.
        engine.tick(at(1.55));
        assert_eq!(engine.roster().player.ledger.spirit(), 0);
    }

    #[test]
    fn selection_outside_any_window_is_not_in_decision() {
        let mut engine = engine();
        engine.start_battle(at(0.0));
        engine.drain_events();

        assert_eq!(engine.try_select_skill(1), Err(SelectError::NotInDecision));
    }

    #[test]
    fn start_battle_twice_emits_no_duplicate_notifications() {
        let mut engine = engine();
        engine.start_battle(at(0.0));
        let first = engine.drain_events();
        assert_eq!(
            first,
            vec![
                BattleEvent::BattleStateChanged(BattleState::Preparing),
                BattleEvent::RoundPhaseChanged(RoundPhase::Beat),
                BattleEvent::BattleStateChanged(BattleState::Rhythm),
            ]
        );

        engine.start_battle(at(0.1));
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn end_battle_cancels_everything() {
        let mut engine = engine();
        engine.start_battle(at(0.0));
        engine.tick(at(0.5));
        engine.tick(at(1.0));
        engine.tick(at(1.05));
        engine.drain_events();
        assert!(engine.is_decision_window());

        engine.end_battle();
        assert_eq!(engine.battle_state(), BattleState::Finished);
        assert_eq!(engine.round_phase(), RoundPhase::None);
        assert!(!engine.is_decision_window());
        assert_eq!(
            engine.drain_events(),
            vec![
                BattleEvent::RoundPhaseChanged(RoundPhase::None),
                BattleEvent::BattleStateChanged(BattleState::Finished),
            ]
        );

        // No beat or window ever fires after cancellation.
        engine.tick(at(10.0));
        assert!(engine.drain_events().is_empty());

        // A fresh start re-initializes timers relative to the new now.
        engine.start_battle(at(20.0));
        engine.drain_events();
        engine.tick(at(20.5));
        assert_eq!(engine.drain_events(), vec![BattleEvent::Beat(1)]);
    }

    #[test]
    fn dodge_regen_ticks_before_the_clock() {
        let mut engine = engine();
        engine.update_status(Side::Player, 10, 0, 0);
        engine.start_battle(at(0.0));

        // Drive at 10 Hz up to (but not including) the 5.0s regen deadline.
        // Two idle windows close along the way (1.5s and 3.5s); the third
        // cycle's second beat lands exactly on the deadline.
        for tenth in 1..50u32 {
            engine.tick(at(f64::from(tenth) * 0.1));
        }
        assert_eq!(engine.roster().player.ledger.dodge_charges(), 0);
        engine.drain_events();

        engine.tick(at(5.0));
        assert_eq!(engine.roster().player.ledger.dodge_charges(), 1);
        // Within the same tick, regen resolves before the clock advances.
        assert_eq!(
            engine.drain_events(),
            vec![
                BattleEvent::InfoChanged,
                BattleEvent::Beat(2),
                BattleEvent::BattleStateChanged(BattleState::Decision),
                BattleEvent::RoundPhaseChanged(RoundPhase::Decision),
            ]
        );
    }

    #[test]
    fn status_pushes_emit_only_on_change() {
        let mut engine = engine();
        engine.update_status(Side::Opponent, 7, 2, 0);
        assert_eq!(engine.drain_events(), vec![BattleEvent::InfoChanged]);

        engine.update_status(Side::Opponent, 7, 2, 0);
        assert!(engine.drain_events().is_empty());

        assert_eq!(engine.roster().opponent.ledger.health(), 7);
        // The player's ledger is untouched by opponent pushes.
        assert_eq!(engine.roster().player.ledger.health(), 10);
    }

    #[test]
    fn set_roster_replaces_both_sides() {
        let mut engine = engine();
        engine.drain_events();

        engine.set_roster(Roster::new(duelist("Nomad"), duelist("Warden")));
        assert_eq!(engine.drain_events(), vec![BattleEvent::InfoChanged]);
        assert_eq!(engine.roster().player.name, "Nomad");
    }
}
