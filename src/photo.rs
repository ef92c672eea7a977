//! Photo records, the feed that holds them, and decoding from the JSON payload.

use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;

use crate::FeedError;

/// Identifier assigned to a photo by the feed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(pub i64);

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single photo in the feed.
///
/// Every field except `draft_comment` comes from the payload. The draft is
/// local input state: it is never read from JSON and always starts empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    #[serde(rename = "url")]
    pub image_url: String,
    pub caption: String,
    pub liked: bool,
    pub comments: Vec<String>,
    #[serde(skip)]
    pub draft_comment: String,
}

impl Photo {
    pub fn new(id: PhotoId, image_url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            id,
            image_url: image_url.into(),
            caption: caption.into(),
            liked: false,
            comments: Vec::new(),
            draft_comment: String::new(),
        }
    }

    /// The draft as it would be submitted, or `None` when there is nothing to submit.
    pub fn submittable_comment(&self) -> Option<&str> {
        let trimmed = self.draft_comment.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Photos in source order. No two entries share an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    photos: Vec<Photo>,
}

impl Feed {
    /// Build a feed, rejecting any id that appears twice.
    pub fn new(photos: Vec<Photo>) -> Result<Self, FeedError> {
        let mut seen = HashSet::with_capacity(photos.len());
        for photo in &photos {
            if !seen.insert(photo.id) {
                return Err(FeedError::DuplicatePhotoId(photo.id));
            }
        }
        Ok(Self { photos })
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Photo> {
        self.photos.iter()
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn get(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|photo| photo.id == id)
    }

    pub fn contains(&self, id: PhotoId) -> bool {
        self.get(id).is_some()
    }

    /// Returns a copy of the feed with the photo matching `id` replaced by `f(photo)`.
    ///
    /// An unknown id yields an identical feed. The replacement keeps the
    /// original id so the uniqueness invariant survives any `f`.
    pub fn update_photo<F>(&self, id: PhotoId, f: F) -> Feed
    where
        F: FnOnce(&Photo) -> Photo,
    {
        let mut photos = self.photos.clone();
        if let Some(slot) = photos.iter_mut().find(|photo| photo.id == id) {
            let replacement = f(slot);
            *slot = Photo { id, ..replacement };
        }
        Feed { photos }
    }
}

impl<'a> IntoIterator for &'a Feed {
    type Item = &'a Photo;
    type IntoIter = std::slice::Iter<'a, Photo>;

    fn into_iter(self) -> Self::IntoIter {
        self.photos.iter()
    }
}

impl TryFrom<Vec<Photo>> for Feed {
    type Error = FeedError;

    fn try_from(photos: Vec<Photo>) -> Result<Self, Self::Error> {
        Feed::new(photos)
    }
}

/// Decode a feed payload: a JSON array of photo objects.
///
/// All-or-nothing: any missing field, mistyped field or repeated id fails the
/// whole payload and no photos are returned.
pub fn decode_feed(payload: &[u8]) -> Result<Feed, FeedError> {
    let photos: Vec<Photo> = serde_json::from_slice(payload)?;
    Feed::new(photos)
}

/// Decode a single photo object.
pub fn decode_photo(payload: &[u8]) -> Result<Photo, FeedError> {
    Ok(serde_json::from_slice(payload)?)
}
