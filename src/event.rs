//! The complete inbound message surface of the application.

use crate::{Feed, FeedError, PhotoId};

/// Everything that can change the [`Model`](crate::Model).
///
/// User interaction produces the photo-level variants through the callbacks in
/// [`PhotoProps`](crate::PhotoProps). `FeedLoaded` is delivered once, when the
/// startup fetch resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FeedLoaded(Result<Feed, FeedError>),
    ToggleLike(PhotoId),
    DraftCommentChanged(PhotoId, String),
    SubmitComment(PhotoId),
}

impl Event {
    /// The photo this event targets, if any.
    pub fn photo_id(&self) -> Option<PhotoId> {
        match self {
            Event::FeedLoaded(_) => None,
            Event::ToggleLike(id) | Event::DraftCommentChanged(id, _) | Event::SubmitComment(id) => {
                Some(*id)
            }
        }
    }
}
