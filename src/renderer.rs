//! Renderer abstraction for rendering Props.

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

use crate::Props;

/// The display side of the application.
///
/// [`render`](Self::render) is called with fresh [`Props`] once at startup and
/// again after every applied event. Props carry the callbacks that feed user
/// input back into the runtime.
///
/// # Example
///
/// ```rust
/// use picshare::{Props, Renderer};
///
/// struct ConsoleRenderer;
///
/// impl Renderer for ConsoleRenderer {
///     fn render(&mut self, props: Props) {
///         match props {
///             Props::Loading => println!("Loading feed..."),
///             Props::Failed { message, .. } => println!("{message}"),
///             Props::Feed(photos) => {
///                 for photo in photos {
///                     println!("{} ({} comments)", photo.caption, photo.comments.len());
///                 }
///             }
///         }
///     }
/// }
/// ```
pub trait Renderer {
    fn render(&mut self, props: Props);
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures all rendered Props for assertions.
///
/// Only available with the `testing` feature. Clones share the same capture
/// buffer, so keep one clone and hand the other to the runtime.
///
/// ```rust
/// use picshare::{Props, Renderer, TestRenderer};
///
/// let renderer = TestRenderer::new();
/// let mut handle = renderer.clone();
/// handle.render(Props::Loading);
///
/// assert_eq!(renderer.count(), 1);
/// renderer.with_renders(|renders| assert!(renders[0].is_loading()));
/// ```
#[derive(Clone)]
pub struct TestRenderer {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl Default for TestRenderer {
    fn default() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl Renderer for TestRenderer {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl TestRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of renders that have occurred.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Access the captured renders with a closure.
    ///
    /// Use it to assert on Props or to invoke their callbacks.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Props>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }

    /// Run `f` against the most recent render.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been rendered yet.
    pub fn with_latest<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Props) -> R,
    {
        self.with_renders(|renders| f(renders.last().expect("no props rendered yet")))
    }
}
