use super::{given_feed_payload, with_latest_photos, IntegrationTest, TWO_PHOTO_FEED};
use picshare::{Event, PhotoId};

fn loaded() -> IntegrationTest {
    let mut test = given_feed_payload(TWO_PHOTO_FEED);
    test.driver.process_events();
    test
}

#[test]
fn given_a_loaded_feed_when_like_clicked_should_flip_only_that_photo() {
    let mut test = loaded();

    with_latest_photos(&test, |photos| photos[0].toggle_like());
    test.driver.process_events();

    with_latest_photos(&test, |photos| {
        assert!(photos[0].liked);
        assert!(photos[1].liked);
    });
}

#[test]
fn given_a_liked_photo_when_like_clicked_twice_should_restore_the_model() {
    let mut test = loaded();
    let before = test.driver.model().clone();

    with_latest_photos(&test, |photos| photos[1].toggle_like());
    test.driver.process_events();
    with_latest_photos(&test, |photos| photos[1].toggle_like());
    test.driver.process_events();

    assert_eq!(test.driver.model(), &before);
}

#[test]
fn given_typed_draft_should_enable_submit() {
    let mut test = loaded();

    with_latest_photos(&test, |photos| photos[0].change_draft(" hello "));
    test.driver.process_events();

    with_latest_photos(&test, |photos| {
        assert_eq!(photos[0].draft_comment, " hello ");
        assert!(!photos[0].submit_disabled);
        assert!(photos[1].submit_disabled);
    });
}

#[test]
fn given_a_draft_when_submitted_should_append_trimmed_comment_and_reset_input() {
    let mut test = loaded();

    with_latest_photos(&test, |photos| photos[0].change_draft(" hello "));
    test.driver.process_events();
    with_latest_photos(&test, |photos| photos[0].submit_comment());
    test.driver.process_events();

    with_latest_photos(&test, |photos| {
        assert_eq!(
            photos[0].comments,
            vec!["Cowabunga, dude!".to_string(), "hello".to_string()]
        );
        assert_eq!(photos[0].draft_comment, "");
        assert!(photos[0].submit_disabled);
    });
}

#[test]
fn given_whitespace_draft_when_submitted_should_change_nothing() {
    let mut test = loaded();

    with_latest_photos(&test, |photos| photos[1].change_draft("   "));
    test.driver.process_events();
    let before = test.driver.model().clone();

    with_latest_photos(&test, |photos| photos[1].submit_comment());
    test.driver.process_events();

    assert_eq!(test.driver.model(), &before);
    with_latest_photos(&test, |photos| {
        assert!(photos[1].comments.is_empty());
        assert_eq!(photos[1].draft_comment, "   ");
        assert!(photos[1].submit_disabled);
    });
}

#[test]
fn given_an_unknown_photo_id_should_leave_the_model_unchanged() {
    let mut test = loaded();
    let before = test.driver.model().clone();
    let emitter = test.driver.emitter();

    emitter.emit(Event::ToggleLike(PhotoId(404)));
    emitter.emit(Event::DraftCommentChanged(PhotoId(404), "ghost".into()));
    emitter.emit(Event::SubmitComment(PhotoId(404)));
    test.driver.process_events();

    assert_eq!(test.driver.model(), &before);
    // Each event still produces a render.
    assert_eq!(test.renders.count(), 5);
}

#[test]
fn given_events_emitted_together_should_apply_in_order() {
    let mut test = loaded();
    let emitter = test.driver.emitter();

    emitter.emit(Event::DraftCommentChanged(PhotoId(2), "first".into()));
    emitter.emit(Event::SubmitComment(PhotoId(2)));
    emitter.emit(Event::DraftCommentChanged(PhotoId(2), "second".into()));
    emitter.emit(Event::SubmitComment(PhotoId(2)));
    test.driver.process_events();

    let photo = test.driver.model().photo(PhotoId(2)).unwrap();
    assert_eq!(photo.comments, vec!["first".to_string(), "second".to_string()]);
    assert_eq!(photo.draft_comment, "");
}
