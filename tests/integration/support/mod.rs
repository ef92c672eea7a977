use std::sync::Arc;

use picshare::{
    create_test_spawner, decode_feed, EffectFuture, Feed, FeedError, MockFeedSource, TestDriver,
    TestRenderer, TestRuntime,
};

pub(crate) const TWO_PHOTO_FEED: &str = r#"[
    {"id": 1, "url": "https://programming-elm.surge.sh/1.jpg", "caption": "Surfing", "liked": false, "comments": ["Cowabunga, dude!"]},
    {"id": 2, "url": "https://programming-elm.surge.sh/2.jpg", "caption": "The Fox", "liked": true, "comments": []}
]"#;

pub(crate) struct IntegrationTest {
    pub(crate) driver: TestDriver<TestRenderer, fn(EffectFuture)>,
    pub(crate) renders: TestRenderer,
}

pub(crate) fn given_feed_payload(payload: &str) -> IntegrationTest {
    given_fetch_result(decode_feed(payload.as_bytes()))
}

pub(crate) fn given_feed_error(error: FeedError) -> IntegrationTest {
    given_fetch_result(Err(error))
}

// The mock panics on drop unless the runtime fetched exactly once.
fn given_fetch_result(result: Result<Feed, FeedError>) -> IntegrationTest {
    let mut source = MockFeedSource::new();
    source
        .expect_fetch_feed()
        .times(1)
        .return_once(move || result);

    let renders = TestRenderer::new();
    let driver = TestRuntime::new(Arc::new(source), renders.clone(), create_test_spawner()).run();

    IntegrationTest { driver, renders }
}

/// Given a started test whose feed has loaded, the photo views of the latest render.
pub(crate) fn with_latest_photos<F, R>(test: &IntegrationTest, f: F) -> R
where
    F: FnOnce(&[picshare::PhotoProps]) -> R,
{
    test.renders.with_latest(|props| {
        let photos = props.photos().expect("latest render should show the feed");
        f(photos)
    })
}
