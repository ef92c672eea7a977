//! Application state.

use crate::{Feed, FeedError, Photo, PhotoId};

/// The whole application state.
///
/// `feed` is absent until the first successful load. `last_error` records the
/// most recent failed load and is cleared by a successful one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    pub feed: Option<Feed>,
    pub last_error: Option<FeedError>,
}

/// Which of the three screens the model currently calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status<'a> {
    Loading,
    Failed(&'a FeedError),
    Loaded(&'a Feed),
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// An error takes precedence over a feed left over from an earlier load.
    pub fn status(&self) -> Status<'_> {
        match (&self.last_error, &self.feed) {
            (Some(error), _) => Status::Failed(error),
            (None, Some(feed)) => Status::Loaded(feed),
            (None, None) => Status::Loading,
        }
    }

    pub fn photo(&self, id: PhotoId) -> Option<&Photo> {
        self.feed.as_ref().and_then(|feed| feed.get(id))
    }

    /// Returns a model whose photo `id` has been replaced by `f(photo)`.
    ///
    /// Without a feed, or without a matching photo, the result equals `self`.
    pub fn with_photo<F>(&self, id: PhotoId, f: F) -> Model
    where
        F: FnOnce(&Photo) -> Photo,
    {
        Model {
            feed: self.feed.as_ref().map(|feed| feed.update_photo(id, f)),
            last_error: self.last_error.clone(),
        }
    }
}
