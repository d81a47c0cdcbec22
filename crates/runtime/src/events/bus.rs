//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};

use battle_core::BattleEvent;

use super::types::{BattleStateEvent, DecisionEvent, RhythmEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Battle lifecycle and roster/ledger data changes
    Battle,
    /// Beat cycle progress (phases, beats)
    Rhythm,
    /// Decision window activity
    Decision,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Battle(BattleStateEvent),
    Rhythm(RhythmEvent),
    Decision(DecisionEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Battle(_) => Topic::Battle,
            Event::Rhythm(_) => Topic::Rhythm,
            Event::Decision(_) => Topic::Decision,
        }
    }
}

impl From<BattleEvent> for Event {
    fn from(event: BattleEvent) -> Self {
        match event {
            BattleEvent::BattleStateChanged(state) => {
                Event::Battle(BattleStateEvent::StateChanged { state })
            }
            BattleEvent::InfoChanged => Event::Battle(BattleStateEvent::InfoChanged),
            BattleEvent::RoundPhaseChanged(phase) => {
                Event::Rhythm(RhythmEvent::PhaseChanged { phase })
            }
            BattleEvent::Beat(index) => Event::Rhythm(RhythmEvent::Beat { index }),
            BattleEvent::DecisionStarted => Event::Decision(DecisionEvent::Started),
            BattleEvent::DecisionEnded => Event::Decision(DecisionEvent::Ended),
            BattleEvent::ActionChanged { label } => {
                Event::Decision(DecisionEvent::ActionChanged { label })
            }
            BattleEvent::ActionRejected(reason) => {
                Event::Decision(DecisionEvent::Rejected { reason })
            }
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about.
pub struct EventBus {
    channels: Arc<RwLock<HashMap<Topic, broadcast::Sender<Event>>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let mut channels = HashMap::new();

        // Pre-create channels for each topic
        channels.insert(Topic::Battle, broadcast::channel(capacity).0);
        channels.insert(Topic::Rhythm, broadcast::channel(capacity).0);
        channels.insert(Topic::Decision, broadcast::channel(capacity).0);

        Self {
            channels: Arc::new(RwLock::new(channels)),
        }
    }

    /// Publish an event to its corresponding topic
    ///
    /// Delivery is best-effort: an event published with no subscribers on
    /// its topic is simply dropped.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();

        // try_read so a publish can never block the tick that produced it
        match self.channels.try_read() {
            Ok(channels) => {
                if let Some(tx) = channels.get(&topic)
                    && tx.send(event).is_err()
                {
                    // No subscribers yet on this topic
                    tracing::trace!("No subscribers for topic {:?}", topic);
                }
            }
            Err(_) => {
                tracing::debug!("Failed to acquire event bus lock for topic {:?}", topic);
            }
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        let channels = self
            .channels
            .try_read()
            .expect("Failed to acquire read lock on event channels");
        channels
            .get(&topic)
            .expect("Topic channel not initialized")
            .subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        let channels = self
            .channels
            .try_read()
            .expect("Failed to acquire read lock on event channels");
        topics
            .iter()
            .map(|&topic| {
                let rx = channels
                    .get(&topic)
                    .expect("Topic channel not initialized")
                    .subscribe();
                (topic, rx)
            })
            .collect()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
