//! Loading the feed from its external source.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{decode_feed, Config, Effect, Event, Feed, FeedError};

/// Where the feed comes from.
///
/// The runtime calls [`fetch_feed`](Self::fetch_feed) exactly once, at
/// startup. Implementations report every failure as a [`FeedError`] value.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_feed(&self) -> Result<Feed, FeedError>;
}

/// Fetches the feed with a single HTTP `GET`.
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: Client,
    url: String,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Build a source for the configured feed URL, applying the optional
    /// request timeout.
    pub fn from_config(config: &Config) -> Result<Self, FeedError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|err| FeedError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            url: config.feed_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_feed(&self) -> Result<Feed, FeedError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| FeedError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::BadStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FeedError::Transport(err.to_string()))?;

        decode_feed(&body)
    }
}

/// The startup effect: fetch once and deliver the outcome as
/// [`Event::FeedLoaded`].
pub fn load_feed(source: Arc<dyn FeedSource>) -> Effect {
    Effect::perform(async move {
        tracing::info!("loading feed");
        let result = source.fetch_feed().await;
        match &result {
            Ok(feed) => tracing::info!(photos = feed.len(), "feed loaded"),
            Err(err) => tracing::warn!(error = %err, kind = ?err.kind(), "feed failed to load"),
        }
        Event::FeedLoaded(result)
    })
}
