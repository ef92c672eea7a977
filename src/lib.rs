//! Model-View-Update core for Picshare, a single-page photo feed.
//!
//! The crate holds everything about the application except drawing pixels:
//!
//! - [`decode_feed`] turns the JSON feed payload into a [`Feed`] of [`Photo`]s
//! - [`HttpFeedSource`] fetches that payload once at startup
//! - [`update`] is the pure reducer from ([`Event`], [`Model`]) to [`Model`]
//! - [`Store`] holds the single current model
//! - [`view`] projects the model into [`Props`] for a [`Renderer`]
//! - [`Runtime`] wires them together and serializes every event
//!
//! ## Example
//!
//! ```rust
//! use picshare::{decode_feed, update, Event, Model, PhotoId};
//!
//! let feed = decode_feed(
//!     br#"[{"id": 1, "url": "https://example.com/1.jpg", "caption": "Surfing",
//!           "liked": false, "comments": ["Cowabunga, dude!"]}]"#,
//! )
//! .unwrap();
//!
//! let model = update(Event::FeedLoaded(Ok(feed)), &Model::new());
//! let model = update(Event::ToggleLike(PhotoId(1)), &model);
//! let model = update(
//!     Event::DraftCommentChanged(PhotoId(1), " Nice wave! ".to_string()),
//!     &model,
//! );
//! let model = update(Event::SubmitComment(PhotoId(1)), &model);
//!
//! let photo = model.photo(PhotoId(1)).unwrap();
//! assert!(photo.liked);
//! assert_eq!(photo.comments, vec!["Cowabunga, dude!", "Nice wave!"]);
//! assert_eq!(photo.draft_comment, "");
//! ```

// Module declarations
mod config;
mod effect;
mod emitter;
mod error;
mod event;
mod fetch;
pub mod logging;
mod model;
mod photo;
mod renderer;
mod runtime;
mod store;
mod update;
mod view;

// Public re-exports
pub use config::{Config, DEFAULT_FEED_URL};
pub use effect::{Effect, EffectFuture};
pub use emitter::Emitter;
pub use error::{ConfigError, ErrorKind, FeedError};
pub use event::Event;
pub use fetch::{load_feed, FeedSource, HttpFeedSource};
pub use model::{Model, Status};
pub use photo::{decode_feed, decode_photo, Feed, Photo, PhotoId};
pub use renderer::Renderer;
pub use runtime::{Runtime, Spawner};
pub use store::Store;
pub use update::update;
pub use view::{view, PhotoProps, Props};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use fetch::MockFeedSource;
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{create_test_spawner, TestDriver, TestRuntime};
