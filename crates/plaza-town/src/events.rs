//! Event fan-out: the listener capability and the subscriber list.
//!
//! Every mutating town operation ends by notifying subscribers. Dispatch
//! is deliberately primitive: synchronous iteration over a snapshot of
//! the subscriber list, in registration order. No queuing, batching,
//! retry, or delivery acknowledgment. A slow or failing subscriber is
//! the transport layer's problem; if it needs decoupling it can feed a
//! channel from its callback.

use std::sync::Arc;

use plaza_protocol::Player;

use crate::ConversationArea;

/// The capability a subscriber implements to observe town state changes.
///
/// Implemented by the transport layer, which renders these callbacks
/// back onto the wire. All methods default to no-ops so an implementor
/// only overrides the events it cares about.
///
/// Callbacks run synchronously inside the mutating operation, after the
/// mutation has settled. A callback must not call back into the town to
/// mutate the subscriber list; register and remove listeners only from
/// outside a dispatch.
pub trait TownListener: Send + Sync {
    /// A player was admitted to the town.
    fn on_player_joined(&self, _player: &Player) {}

    /// A player's location changed. Fired exactly once per movement
    /// update, after any area membership changes it triggered.
    fn on_player_moved(&self, _player: &Player) {}

    /// A player was evicted, after any cascading area events.
    fn on_player_disconnected(&self, _player: &Player) {}

    /// A conversation area was created or its occupant list changed.
    fn on_conversation_area_updated(&self, _area: &ConversationArea) {}

    /// A conversation area lost its last occupant and was dropped.
    fn on_conversation_area_destroyed(&self, _area: &ConversationArea) {}

    /// The whole town is shutting down. No payload; after this the
    /// subscriber should tear down its connection.
    fn on_town_destroyed(&self) {}
}

/// An ordered, duplicate-tolerant list of subscribers.
///
/// Identity is `Arc` pointer identity: subscribing the same `Arc` twice
/// delivers every event twice, and unsubscribing removes every entry
/// holding that pointer. Unsubscribing a listener that was never
/// registered is a no-op.
#[derive(Default)]
pub struct Subscribers {
    listeners: Vec<Arc<dyn TownListener>>,
}

impl Subscribers {
    /// Creates an empty subscriber list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener at the end of the dispatch order.
    pub fn subscribe(&mut self, listener: Arc<dyn TownListener>) {
        self.listeners.push(listener);
    }

    /// Removes every registration of `listener` (by pointer identity).
    pub fn unsubscribe(&mut self, listener: &Arc<dyn TownListener>) {
        self.listeners.retain(|l| !Arc::ptr_eq(l, listener));
    }

    /// Invokes `f` on every subscriber, in registration order.
    ///
    /// Iterates a snapshot taken at call time, so the live list could in
    /// principle change underneath without corrupting the iteration.
    pub fn notify(&self, f: impl Fn(&dyn TownListener)) {
        let snapshot: Vec<Arc<dyn TownListener>> = self.listeners.clone();
        for listener in &snapshot {
            f(listener.as_ref());
        }
    }

    /// Number of current registrations (counting duplicates).
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.listeners.len())
            .finish()
    }
}

// =========================================================================
// Tests
// =========================================================================
