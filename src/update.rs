//! The reducer: the only place state transitions are defined.

use crate::{Event, Model, Photo};

/// Reduce an event and the current model to the next model.
///
/// Pure and total. Events naming a photo that is not in the feed, or arriving
/// before any feed exists, produce a model equal to the current one.
pub fn update(event: Event, model: &Model) -> Model {
    match event {
        Event::FeedLoaded(Ok(feed)) => Model {
            feed: Some(feed),
            last_error: None,
        },
        Event::FeedLoaded(Err(error)) => Model {
            feed: model.feed.clone(),
            last_error: Some(error),
        },
        Event::ToggleLike(id) => model.with_photo(id, toggle_like),
        Event::DraftCommentChanged(id, text) => model.with_photo(id, |photo| Photo {
            draft_comment: text,
            ..photo.clone()
        }),
        Event::SubmitComment(id) => model.with_photo(id, submit_comment),
    }
}

fn toggle_like(photo: &Photo) -> Photo {
    Photo {
        liked: !photo.liked,
        ..photo.clone()
    }
}

// Whitespace-only drafts are left in place untouched.
fn submit_comment(photo: &Photo) -> Photo {
    match photo.submittable_comment() {
        Some(comment) => {
            let mut comments = photo.comments.clone();
            comments.push(comment.to_string());
            Photo {
                comments,
                draft_comment: String::new(),
                ..photo.clone()
            }
        }
        None => photo.clone(),
    }
}
