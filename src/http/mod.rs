pub mod error;
pub mod model;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::debug;

pub use error::FetchError;
pub use model::{RecommendResponse, RecommendationItem};

pub const RECOMMEND_PATH: &str = "recommend";
pub const STATUS_FALLBACK: &str = "Failed to fetch recommendations";
pub const EMPTY_FALLBACK: &str = "No recommendations found.";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn recommend(&self, title: &str) -> Result<Vec<RecommendationItem>, FetchError>;
}

pub struct ApiService {
    client: reqwest::Client,
    endpoint: Url,
}

impl ApiService {
    pub fn new(base_url: &Url) -> color_eyre::Result<Self> {
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join(RECOMMEND_PATH)?;
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// `title` is percent-encoded the way `encodeURIComponent` does, so
    /// spaces become `%20` rather than `+`.
    pub fn request_url(&self, title: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.set_query(Some(&format!("title={}", urlencoding::encode(title))));
        url
    }
}

#[async_trait]
impl RecommendationSource for ApiService {
    async fn recommend(&self, title: &str) -> Result<Vec<RecommendationItem>, FetchError> {
        let url = self.request_url(title);
        debug!(%url, "requesting recommendations");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "recommendation response");

        interpret(status, &body)
    }
}

/// Turns a completed response into items or the message to show instead.
///
/// The body is parsed before the status is looked at, so an unreadable
/// body reports the parse failure even on error statuses.
pub fn interpret(status: StatusCode, body: &[u8]) -> Result<Vec<RecommendationItem>, FetchError> {
    let parsed: RecommendResponse = serde_json::from_slice(body)?;

    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            message: parsed.detail_text().unwrap_or(STATUS_FALLBACK).to_string(),
        });
    }

    let message = parsed.message_text().unwrap_or(EMPTY_FALLBACK).to_string();
    match parsed.data {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(FetchError::Empty(message)),
    }
}
