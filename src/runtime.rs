//! The runtime that owns the [`Store`] and serializes events into it.

use std::sync::Arc;

use flume::Receiver;

use crate::{load_feed, view, Effect, EffectFuture, Emitter, Event, FeedSource, Model, Renderer, Store};

/// A spawner trait for executing futures on an async runtime.
///
/// This abstraction allows you to use whatever executor you want (tokio,
/// async-std, a thread pool, ...).
///
/// Function pointers and closures automatically implement this trait via the
/// blanket implementation.
pub trait Spawner {
    /// Spawn a future on the async runtime.
    fn spawn(&self, future: EffectFuture);
}

impl<F> Spawner for F
where
    F: Fn(EffectFuture),
{
    fn spawn(&self, future: EffectFuture) {
        self(future)
    }
}

/// Runs the application.
///
/// On [`run`](Self::run) the runtime:
/// 1. Renders the initial (loading) Props
/// 2. Spawns the feed fetch, exactly once
/// 3. Applies each queued [`Event`] to the [`Store`], in arrival order
/// 4. Renders fresh Props after every applied event
///
/// Events may be emitted from any thread through an [`Emitter`]; they are
/// applied one at a time on the task driving `run`, so no two updates ever
/// interleave. The fetch result arrives through the same queue.
///
/// For tests with manual control over the queue, use [`TestRuntime`].
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use picshare::{Config, EffectFuture, HttpFeedSource, Props, Renderer, Runtime};
///
/// struct ConsoleRenderer;
///
/// impl Renderer for ConsoleRenderer {
///     fn render(&mut self, props: Props) {
///         println!("{props:?}");
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let source = HttpFeedSource::from_config(&Config::default()).unwrap();
///     let runtime = Runtime::new(Arc::new(source), ConsoleRenderer, |future: EffectFuture| {
///         tokio::spawn(future);
///     });
///     runtime.run().await;
/// }
/// ```
pub struct Runtime<Render, Spawn>
where
    Render: Renderer,
    Spawn: Spawner,
{
    store: Store,
    source: Arc<dyn FeedSource>,
    renderer: Render,
    event_receiver: Receiver<Event>,
    emitter: Emitter,
    spawner: Spawn,
}

impl<Render, Spawn> Runtime<Render, Spawn>
where
    Render: Renderer,
    Spawn: Spawner,
{
    /// Create a new runtime. Nothing is fetched or rendered until
    /// [`run`](Self::run).
    ///
    /// # Arguments
    ///
    /// * `source` - Where the feed is loaded from
    /// * `renderer` - Receives Props after every state change
    /// * `spawner` - Executes the fetch on your chosen executor
    pub fn new(source: Arc<dyn FeedSource>, renderer: Render, spawner: Spawn) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();

        Runtime {
            store: Store::new(),
            source,
            renderer,
            event_receiver,
            emitter: Emitter::new(event_sender),
            spawner,
        }
    }

    /// A handle for emitting events from outside the rendered Props.
    pub fn emitter(&self) -> Emitter {
        self.emitter.clone()
    }

    pub fn model(&self) -> &Model {
        self.store.current()
    }

    /// Start the application and process events until the queue closes.
    ///
    /// Consumes the runtime, so the startup fetch can only ever be issued once.
    pub async fn run(mut self) {
        self.start();

        while let Ok(event) = self.event_receiver.recv_async().await {
            self.step(event);
        }
    }

    fn start(&mut self) {
        tracing::info!("starting runtime");
        self.render();
        self.spawn(load_feed(Arc::clone(&self.source)));
    }

    fn step(&mut self, event: Event) {
        self.store.apply(event);
        self.render();
    }

    fn render(&mut self) {
        let props = view(self.store.current(), &self.emitter);
        self.renderer.render(props);
    }

    fn spawn(&self, effect: Effect) {
        if let Some(future) = effect.into_future(self.emitter.clone()) {
            self.spawner.spawn(future);
        }
    }

    #[cfg(any(test, feature = "testing"))]
    fn process_queued_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.step(event);
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test spawner function that executes futures synchronously.
pub fn test_spawner_fn(future: EffectFuture) {
    futures::executor::block_on(future);
}

#[cfg(any(test, feature = "testing"))]
/// Creates a test spawner that executes futures synchronously.
///
/// The effect runs to completion inside `spawn`, so its event is already
/// queued when the spawn returns. Pass the result directly to
/// [`TestRuntime::new`] or [`Runtime::new`].
pub fn create_test_spawner() -> fn(EffectFuture) {
    test_spawner_fn
}

#[cfg(any(test, feature = "testing"))]
/// Test runtime with manual event processing.
///
/// Only available with the `testing` feature or during tests.
///
/// Unlike [`Runtime`], events are not processed as they are emitted. Tests
/// call [`process_events`](TestDriver::process_events) on the driver returned
/// by [`run`](Self::run) to drain the queue.
///
/// ```rust
/// use std::sync::Arc;
///
/// use picshare::{create_test_spawner, Feed, MockFeedSource, TestRenderer, TestRuntime};
///
/// let mut source = MockFeedSource::new();
/// source.expect_fetch_feed().return_once(|| Ok(Feed::default()));
///
/// let renderer = TestRenderer::new();
/// let mut driver =
///     TestRuntime::new(Arc::new(source), renderer.clone(), create_test_spawner()).run();
///
/// renderer.with_latest(|props| assert!(props.is_loading()));
///
/// driver.process_events();
/// assert_eq!(driver.model().feed, Some(Feed::default()));
/// ```
pub struct TestRuntime<Render, Spawn>
where
    Render: Renderer,
    Spawn: Spawner,
{
    runtime: Runtime<Render, Spawn>,
}

#[cfg(any(test, feature = "testing"))]
impl<Render, Spawn> TestRuntime<Render, Spawn>
where
    Render: Renderer,
    Spawn: Spawner,
{
    pub fn new(source: Arc<dyn FeedSource>, renderer: Render, spawner: Spawn) -> Self {
        TestRuntime {
            runtime: Runtime::new(source, renderer, spawner),
        }
    }

    /// Renders the initial Props, spawns the fetch, and hands back a driver.
    pub fn run(mut self) -> TestDriver<Render, Spawn> {
        self.runtime.start();
        TestDriver {
            runtime: self.runtime,
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Manual control over a started [`TestRuntime`].
pub struct TestDriver<Render, Spawn>
where
    Render: Renderer,
    Spawn: Spawner,
{
    runtime: Runtime<Render, Spawn>,
}

#[cfg(any(test, feature = "testing"))]
impl<Render, Spawn> TestDriver<Render, Spawn>
where
    Render: Renderer,
    Spawn: Spawner,
{
    /// Apply every queued event, rendering after each.
    pub fn process_events(&mut self) {
        self.runtime.process_queued_events();
    }

    pub fn model(&self) -> &Model {
        self.runtime.model()
    }

    pub fn emitter(&self) -> Emitter {
        self.runtime.emitter()
    }
}
