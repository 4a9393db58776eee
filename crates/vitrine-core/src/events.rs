//! Change notifications for the rendering collaborator
//!
//! The core never renders; it raises discrete events and lets the outer
//! layer decide what to redraw.

use tokio::sync::broadcast;

/// Discrete state-change notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// The featured set was replaced or a slot changed
    FeaturedChanged,
    /// A detail panel was opened or closed
    ExpansionChanged,
}

/// Broadcast fan-out for change events.
///
/// Emitting with no subscribers is fine; events are fire-and-forget.
#[derive(Debug)]
pub struct ChangeNotifier {
    tx: broadcast::Sender<ChangeEvent>,
}

impl ChangeNotifier {
    /// Notifier with the given channel capacity
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to future events
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all current subscribers
    pub fn emit(&self, event: ChangeEvent) {
        // send only fails with zero receivers, which is not an error here
        let _ = self.tx.send(event);
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new(32)
    }
}
