//! High-level battle runtime façade.
//!
//! [`BattleRuntime`] embeds the deterministic [`BattleEngine`], forwards
//! every operation to it, and fans the resulting notifications out on the
//! topic bus. It stays single-threaded and tick-driven: whatever loop owns
//! the runtime supplies timestamps and input, exactly as a frame loop or a
//! test driver would.

use battle_core::{
    BattleEngine, BattleState, RhythmConfig, RhythmState, Roster, RoundPhase, Seconds,
    SelectError, Side,
};
use tokio::sync::broadcast;

use crate::events::{Event, EventBus, Topic};

/// Runtime configuration shared by the façade and the event bus.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub rhythm: RhythmConfig,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            rhythm: RhythmConfig::default(),
            event_buffer_size: 100,
        }
    }
}

/// Embeddable battle runtime: engine plus event fan-out.
pub struct BattleRuntime {
    engine: BattleEngine,
    bus: EventBus,
}

impl BattleRuntime {
    /// Create a new runtime builder
    pub fn builder() -> BattleRuntimeBuilder {
        BattleRuntimeBuilder::new()
    }

    /// Access the underlying event bus (cloneable, shareable with consumers)
    pub fn event_bus(&self) -> &EventBus {
        &self.bus
    }

    /// Subscribe to a single topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    // ===== lifecycle =====

    pub fn start_battle(&mut self, now: Seconds) {
        tracing::debug!(%now, "starting battle");
        self.engine.start_battle(now);
        self.flush();
    }

    pub fn end_battle(&mut self) {
        tracing::debug!("ending battle");
        self.engine.end_battle();
        self.flush();
    }

    pub fn start_rhythm(&mut self, now: Seconds) {
        self.engine.start_rhythm(now);
        self.flush();
    }

    pub fn stop_rhythm(&mut self) {
        self.engine.stop_rhythm();
        self.flush();
    }

    /// Advances the battle to `now` and publishes whatever happened.
    pub fn tick(&mut self, now: Seconds) {
        self.engine.tick(now);
        self.flush();
    }

    // ===== input & external mutation =====

    /// Forwards a skill selection from the input layer.
    pub fn try_select_skill(&mut self, index: usize) -> Result<(), SelectError> {
        let result = self.engine.try_select_skill(index);
        match &result {
            Ok(()) => tracing::debug!(index, "skill selection accepted"),
            Err(reason) => tracing::debug!(index, %reason, "skill selection rejected"),
        }
        self.flush();
        result
    }

    /// Pushes an externally resolved status update for either side.
    pub fn update_status(&mut self, side: Side, health: i32, dodge: u32, spirit: u32) {
        self.engine.update_status(side, health, dodge, spirit);
        self.flush();
    }

    /// Replaces both participants wholesale.
    pub fn set_roster(&mut self, roster: Roster) {
        self.engine.set_roster(roster);
        self.flush();
    }

    /// Replaces the rhythm configuration.
    pub fn set_rhythm_config(&mut self, config: RhythmConfig) {
        self.engine.set_config(config);
    }

    // ===== queries =====

    pub fn battle_state(&self) -> BattleState {
        self.engine.battle_state()
    }

    pub fn rhythm_state(&self) -> RhythmState {
        self.engine.rhythm_state()
    }

    pub fn round_phase(&self) -> RoundPhase {
        self.engine.round_phase()
    }

    pub fn beat_count(&self) -> u32 {
        self.engine.beat_count()
    }

    pub fn time_to_next_beat(&self, now: Seconds) -> Seconds {
        self.engine.time_to_next_beat(now)
    }

    pub fn time_to_decision_end(&self, now: Seconds) -> Seconds {
        self.engine.time_to_decision_end(now)
    }

    pub fn is_decision_window(&self) -> bool {
        self.engine.is_decision_window()
    }

    pub fn pending_action_label(&self) -> &str {
        self.engine.pending_action_label()
    }

    pub fn roster(&self) -> &Roster {
        self.engine.roster()
    }

    /// Drains the engine queue onto the topic bus, preserving emission order.
    fn flush(&mut self) {
        for event in self.engine.drain_events() {
            tracing::trace!(?event, "publishing battle event");
            self.bus.publish(Event::from(event));
        }
    }
}

/// Builder for [`BattleRuntime`].
pub struct BattleRuntimeBuilder {
    config: RuntimeConfig,
    roster: Option<Roster>,
}

impl BattleRuntimeBuilder {
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            roster: None,
        }
    }

    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_rhythm_config(mut self, rhythm: RhythmConfig) -> Self {
        self.config.rhythm = rhythm;
        self
    }

    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = Some(roster);
        self
    }

    /// Builds the runtime, falling back to the fixture duel roster when none
    /// was supplied.
    pub fn build(self) -> BattleRuntime {
        let roster = self
            .roster
            .unwrap_or_else(battle_content::fixtures::duel_roster);

        let mut engine = BattleEngine::new(self.config.rhythm, roster);
        engine.initialize();

        let mut runtime = BattleRuntime {
            engine,
            bus: EventBus::with_capacity(self.config.event_buffer_size),
        };
        runtime.flush();
        runtime
    }
}

impl Default for BattleRuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
