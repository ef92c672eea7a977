//! Event emitter for embedding callbacks in Props.

use flume::Sender;

use crate::Event;

/// Handle for pushing [`Event`]s into the runtime's queue.
///
/// Every callback in [`PhotoProps`](crate::PhotoProps) holds a clone, and
/// effects receive one to deliver their result. Events sent from any thread
/// are still applied one at a time, in arrival order, by the runtime.
#[derive(Clone)]
pub struct Emitter(Sender<Event>);

impl Emitter {
    pub(crate) fn new(sender: Sender<Event>) -> Self {
        Self(sender)
    }

    /// Queue an event for processing.
    ///
    /// Events emitted after the runtime has shut down are dropped.
    pub fn emit(&self, event: Event) {
        if self.0.send(event).is_err() {
            tracing::trace!("runtime is gone, dropping event");
        }
    }
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("queued", &self.0.len())
            .finish()
    }
}
