//! Owner of the single current [`Model`].

use crate::{update, Event, Model};

/// Holds exactly one [`Model`] and funnels every change through [`update`].
///
/// There is no mutable accessor; [`apply`](Self::apply) is the only way the
/// stored model changes.
#[derive(Debug, Default)]
pub struct Store {
    model: Model,
}

impl Store {
    /// A store in the initial loading state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Model {
        &self.model
    }

    /// Reduce `event` against the current model and replace it with the result.
    pub fn apply(&mut self, event: Event) {
        let target = event.photo_id();
        tracing::debug!(?event, "applying event");

        let next = update(event, &self.model);

        if next == self.model {
            if let Some(id) = target.filter(|id| self.model.photo(*id).is_none()) {
                tracing::debug!(%id, "event targets a photo that is not in the feed");
            }
        }

        self.model = next;
    }
}
