//! Runtime orchestration for the deterministic rhythm battle.
//!
//! This crate wires the battle engine to a topic-based event bus and exposes
//! a builder-based façade for whatever loop owns the battle. Consumers embed
//! [`BattleRuntime`] to drive ticks, forward input, and subscribe to
//! notifications per topic.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the façade and builder
//! - [`events`] provides the topic-based event bus for flexible routing
pub mod events;
pub mod runtime;

pub use events::{BattleStateEvent, DecisionEvent, Event, EventBus, RhythmEvent, Topic};
pub use runtime::{BattleRuntime, BattleRuntimeBuilder, RuntimeConfig};
