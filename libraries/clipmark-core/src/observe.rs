//! Explicit change notification
//!
//! The stores and the sequencer publish state changes through a plain
//! subscriber list instead of an implicit global store. Callbacks run
//! synchronously on the mutating call.

/// Subscriber callback for events of type `E`
pub type Observer<E> = Box<dyn Fn(&E) + Send + Sync>;

/// A list of subscribers notified on every event
pub struct Observers<E> {
    subscribers: Vec<Observer<E>>,
}

impl<E> Observers<E> {
    /// Create an empty subscriber list
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Register a subscriber
    pub fn subscribe(&mut self, observer: Observer<E>) {
        self.subscribers.push(observer);
    }

    /// Notify all subscribers
    pub fn notify(&self, event: &E) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }

    /// Number of registered subscribers
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// True when nobody is listening
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
