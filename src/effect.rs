//! Deferred work that resolves to events.

use core::future::Future;
use core::pin::Pin;

use crate::{Emitter, Event};

/// A boxed future handed to a [`Spawner`](crate::Spawner).
pub type EffectFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

type Work = Box<dyn FnOnce(Emitter) -> EffectFuture + Send + 'static>;

/// Description of asynchronous work whose outcome re-enters the runtime as an
/// [`Event`].
///
/// Effects are inert until the runtime hands them an [`Emitter`] and spawns
/// the resulting future. The result never touches the model directly; it is
/// queued like any user event and reduced in order.
///
/// # Example
///
/// ```rust
/// use picshare::{Effect, Event, FeedError};
///
/// let effect = Effect::perform(async {
///     Event::FeedLoaded(Err(FeedError::Transport("offline".to_string())))
/// });
/// assert!(!effect.is_none());
///
/// let nothing = Effect::none();
/// assert!(nothing.is_none());
/// ```
pub struct Effect(Option<Work>);

impl Effect {
    /// An effect that does nothing and is never spawned.
    pub fn none() -> Self {
        Self(None)
    }

    /// Emit `event` as soon as the effect is spawned.
    pub fn just(event: Event) -> Self {
        Self::perform(async move { event })
    }

    /// Run `future` and emit the event it resolves to.
    pub fn perform<F>(future: F) -> Self
    where
        F: Future<Output = Event> + Send + 'static,
    {
        Self(Some(Box::new(move |emitter: Emitter| {
            Box::pin(async move {
                emitter.emit(future.await);
            }) as EffectFuture
        })))
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Bind the effect to an emitter, producing the future to spawn.
    ///
    /// Returns `None` for [`Effect::none`].
    pub fn into_future(self, emitter: Emitter) -> Option<EffectFuture> {
        self.0.map(|work| work(emitter))
    }
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(_) => f.write_str("Effect(..)"),
            None => f.write_str("Effect::none"),
        }
    }
}
