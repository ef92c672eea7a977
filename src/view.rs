//! Projection of the [`Model`] into renderable Props.

use std::fmt;

use crate::{Emitter, ErrorKind, Event, Model, Photo, PhotoId, Status};

/// What the renderer should draw for the current model.
#[derive(Debug)]
pub enum Props {
    Loading,
    Failed {
        kind: ErrorKind,
        message: &'static str,
    },
    Feed(Vec<PhotoProps>),
}

impl Props {
    pub fn is_loading(&self) -> bool {
        matches!(self, Props::Loading)
    }

    /// The photo views, when the feed is being shown.
    pub fn photos(&self) -> Option<&[PhotoProps]> {
        match self {
            Props::Feed(photos) => Some(photos.as_slice()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Props::Failed { message, .. } => Some(*message),
            _ => None,
        }
    }
}

/// Detail view of one photo, with the callbacks its controls invoke.
pub struct PhotoProps {
    pub id: PhotoId,
    pub image_url: String,
    pub caption: String,
    pub liked: bool,
    pub comments: Vec<String>,
    /// Bound to the comment input.
    pub draft_comment: String,
    /// True exactly when the trimmed draft is empty.
    pub submit_disabled: bool,
    on_toggle_like: Box<dyn Fn() + Send>,
    on_draft_change: Box<dyn Fn(String) + Send>,
    on_submit: Box<dyn Fn() + Send>,
}

impl PhotoProps {
    fn new(photo: &Photo, emitter: &Emitter) -> Self {
        let id = photo.id;
        let like = emitter.clone();
        let draft = emitter.clone();
        let submit = emitter.clone();

        Self {
            id,
            image_url: photo.image_url.clone(),
            caption: photo.caption.clone(),
            liked: photo.liked,
            comments: photo.comments.clone(),
            draft_comment: photo.draft_comment.clone(),
            submit_disabled: photo.submittable_comment().is_none(),
            on_toggle_like: Box::new(move || like.emit(Event::ToggleLike(id))),
            on_draft_change: Box::new(move |text| draft.emit(Event::DraftCommentChanged(id, text))),
            on_submit: Box::new(move || submit.emit(Event::SubmitComment(id))),
        }
    }

    pub fn toggle_like(&self) {
        (self.on_toggle_like)()
    }

    pub fn change_draft(&self, text: impl Into<String>) {
        (self.on_draft_change)(text.into())
    }

    pub fn submit_comment(&self) {
        (self.on_submit)()
    }
}

impl fmt::Debug for PhotoProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoProps")
            .field("id", &self.id)
            .field("image_url", &self.image_url)
            .field("caption", &self.caption)
            .field("liked", &self.liked)
            .field("comments", &self.comments)
            .field("draft_comment", &self.draft_comment)
            .field("submit_disabled", &self.submit_disabled)
            .finish_non_exhaustive()
    }
}

/// Reduce the model to Props. Photo views follow feed order.
pub fn view(model: &Model, emitter: &Emitter) -> Props {
    match model.status() {
        Status::Loading => Props::Loading,
        Status::Failed(error) => {
            let kind = error.kind();
            Props::Failed {
                kind,
                message: kind.user_message(),
            }
        }
        Status::Loaded(feed) => Props::Feed(
            feed.iter()
                .map(|photo| PhotoProps::new(photo, emitter))
                .collect(),
        ),
    }
}
