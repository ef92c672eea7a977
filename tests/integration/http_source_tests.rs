use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use super::TWO_PHOTO_FEED;
use picshare::{
    Config, EffectFuture, ErrorKind, FeedError, FeedSource, HttpFeedSource, PhotoId, Runtime,
    TestRenderer,
};

async fn serve(status: StatusCode, body: &'static str) -> SocketAddr {
    let app = Router::new().route("/feed", get(move || async move { (status, body) }));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn source_for(addr: SocketAddr) -> HttpFeedSource {
    HttpFeedSource::new(format!("http://{addr}/feed"))
}

#[tokio::test]
async fn given_a_valid_feed_should_decode_it() {
    let addr = serve(StatusCode::OK, TWO_PHOTO_FEED).await;

    let feed = source_for(addr).fetch_feed().await.unwrap();

    assert_eq!(feed.len(), 2);
    assert_eq!(feed.get(PhotoId(2)).unwrap().caption, "The Fox");
    assert!(feed.iter().all(|photo| photo.draft_comment.is_empty()));
}

#[tokio::test]
async fn given_a_server_error_should_report_bad_status() {
    let addr = serve(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;

    let result = source_for(addr).fetch_feed().await;

    assert_eq!(result, Err(FeedError::BadStatus(500)));
}

#[tokio::test]
async fn given_a_missing_resource_should_report_a_transport_failure() {
    let addr = serve(StatusCode::NOT_FOUND, "").await;

    let err = source_for(addr).fetch_feed().await.unwrap_err();

    assert_eq!(err, FeedError::BadStatus(404));
    assert_eq!(err.kind(), ErrorKind::TransportFailure);
}

#[tokio::test]
async fn given_a_schema_mismatch_should_report_malformed_payload() {
    let addr = serve(StatusCode::OK, r#"[{"id": "one"}]"#).await;

    let result = source_for(addr).fetch_feed().await;

    assert!(matches!(result, Err(FeedError::MalformedPayload(_))));
}

#[tokio::test]
async fn given_nothing_listening_should_report_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = source_for(addr).fetch_feed().await;

    assert!(matches!(result, Err(FeedError::Transport(_))));
}

#[tokio::test]
async fn given_a_configured_source_should_fetch_from_the_configured_url() {
    let addr = serve(StatusCode::OK, "[]").await;
    let config = Config {
        feed_url: format!("http://{addr}/feed"),
        request_timeout_secs: Some(5),
    };

    let feed = HttpFeedSource::from_config(&config)
        .unwrap()
        .fetch_feed()
        .await
        .unwrap();

    assert!(feed.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn given_a_running_runtime_should_render_the_fetched_feed() {
    let addr = serve(StatusCode::OK, TWO_PHOTO_FEED).await;
    let renders = TestRenderer::new();
    let runtime = Runtime::new(
        Arc::new(source_for(addr)),
        renders.clone(),
        |future: EffectFuture| {
            tokio::spawn(future);
        },
    );

    let task = tokio::spawn(runtime.run());

    let mut waited = Duration::ZERO;
    while renders.count() < 2 && waited < Duration::from_secs(5) {
        tokio::time::sleep(Duration::from_millis(10)).await;
        waited += Duration::from_millis(10);
    }
    task.abort();

    assert_eq!(renders.count(), 2);
    renders.with_renders(|renders| {
        assert!(renders[0].is_loading());
        let photos = renders[1].photos().unwrap();
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].id, PhotoId(1));
    });
}
