// src/event_bus.rs - Synchronous publish/subscribe channel

use std::collections::HashMap;
use std::hash::Hash;

/// An event with a typed payload and a field-less kind used for routing.
pub trait Event {
    type Kind: Copy + Eq + Hash + std::fmt::Debug;

    fn kind(&self) -> Self::Kind;
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<E> = Box<dyn FnMut(&E)>;

/// Listener table keyed by event kind.
///
/// Listeners run synchronously on the publishing thread, in the order they
/// subscribed. A listener only receives `&E`, never the bus, so it cannot
/// publish again from inside its own handler.
pub struct EventBus<E: Event> {
    listeners: HashMap<E::Kind, Vec<(SubscriptionId, Listener<E>)>>,
    next_id: u64,
}

impl<E: Event> EventBus<E> {
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn subscribe<F>(&mut self, kind: E::Kind, callback: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(kind)
            .or_default()
            .push((id, Box::new(callback)));
        log::debug!("subscribed {:?} to {:?}", id, kind);
        id
    }

    /// Remove a listener. Returns false when the handle is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for listeners in self.listeners.values_mut() {
            if let Some(pos) = listeners.iter().position(|(sub, _)| *sub == id) {
                listeners.remove(pos);
                return true;
            }
        }
        false
    }

    pub fn publish(&mut self, event: &E) {
        if let Some(listeners) = self.listeners.get_mut(&event.kind()) {
            for (_, listener) in listeners.iter_mut() {
                listener(event);
            }
        }
    }

    pub fn listener_count(&self, kind: E::Kind) -> usize {
        self.listeners.get(&kind).map(Vec::len).unwrap_or(0)
    }
}

impl<E: Event> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}
