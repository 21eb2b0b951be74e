//! Mock post source for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::CarouselPost;
use crate::source::{PostSource, SourceError};

/// A recorded fetch_posts call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Username that was requested.
    pub username: String,
    /// Cap that was requested.
    pub max_posts: Option<usize>,
}

/// Mock implementation of the PostSource trait.
///
/// Returns the configured posts (honouring the cap), can be told to fail
/// once, and records every request. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    /// Posts to return.
    posts: Arc<RwLock<Vec<CarouselPost>>>,
    /// If set, the next request fails with this message.
    next_error: Arc<RwLock<Option<String>>>,
    /// Recorded requests.
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl MockSource {
    /// Create a new mock source with no posts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the posts to return.
    pub async fn set_posts(&self, posts: Vec<CarouselPost>) {
        *self.posts.write().await = posts;
    }

    /// Make the next request fail.
    pub async fn set_next_error(&self, message: impl Into<String>) {
        *self.next_error.write().await = Some(message.into());
    }

    /// Get all recorded requests.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl PostSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_posts(
        &self,
        username: &str,
        max_posts: Option<usize>,
    ) -> Result<Vec<CarouselPost>, SourceError> {
        self.requests.write().await.push(RecordedRequest {
            username: username.to_string(),
            max_posts,
        });

        if let Some(message) = self.next_error.write().await.take() {
            return Err(SourceError::Unavailable(message));
        }

        let posts = self.posts.read().await;
        let limit = max_posts.unwrap_or(posts.len());
        Ok(posts.iter().take(limit).cloned().collect())
    }
}
