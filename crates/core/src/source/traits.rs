//! Trait definitions for the source module.

use async_trait::async_trait;

use crate::model::CarouselPost;

use super::error::SourceError;

/// Supplies the carousel posts of a profile.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Returns the name of this source implementation.
    fn name(&self) -> &str;

    /// Returns the profile's carousel posts in display order.
    ///
    /// When `max_posts` is set, at most that many posts are returned. Every
    /// returned post has a non-empty id and densely numbered images.
    async fn fetch_posts(
        &self,
        username: &str,
        max_posts: Option<usize>,
    ) -> Result<Vec<CarouselPost>, SourceError>;
}
