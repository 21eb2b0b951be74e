//! Post source backed by a JSON manifest file.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::model::CarouselPost;

use super::error::SourceError;
use super::traits::PostSource;

/// Reads posts from a JSON file.
///
/// The file holds either an array of posts or an object with a `posts`
/// array. Each post has an optional `id`, an optional `caption` (`desc` and
/// `title` are accepted too) and `images`, a list of URL strings or objects
/// with a `url` field:
///
/// ```json
/// {"posts": [{"id": "7301", "caption": "Day one", "images": ["https://cdn/a.jpg", {"url": "https://cdn/b"}]}]}
/// ```
pub struct ManifestSource {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestDocument {
    Posts(Vec<ManifestPost>),
    Wrapped { posts: Vec<ManifestPost> },
}

#[derive(Debug, Deserialize)]
struct ManifestPost {
    #[serde(default, alias = "aweme_id")]
    id: Option<String>,
    #[serde(default, alias = "desc", alias = "title")]
    caption: Option<String>,
    #[serde(default)]
    images: Vec<ManifestImage>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestImage {
    Url(String),
    Object {
        #[serde(default)]
        url: Option<String>,
    },
}

impl ManifestImage {
    fn url(&self) -> Option<&str> {
        let url = match self {
            Self::Url(url) => url.as_str(),
            Self::Object { url } => url.as_deref()?,
        };
        let url = url.trim();
        (!url.is_empty()).then_some(url)
    }
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decodes manifest JSON into post skeletons.
    ///
    /// Posts without a usable image URL are dropped, blank URLs are skipped
    /// and the remaining images are numbered from 1. Posts without an id get
    /// `<username>_<n>`, `n` counting kept posts.
    pub fn parse(
        json: &str,
        username: &str,
        max_posts: Option<usize>,
    ) -> Result<Vec<CarouselPost>, SourceError> {
        let document: ManifestDocument =
            serde_json::from_str(json).map_err(|e| SourceError::Parse {
                reason: e.to_string(),
            })?;

        let raw_posts = match document {
            ManifestDocument::Posts(posts) | ManifestDocument::Wrapped { posts } => posts,
        };

        let limit = max_posts.unwrap_or(usize::MAX);
        let mut posts = Vec::new();

        for raw in raw_posts {
            if posts.len() >= limit {
                break;
            }

            let urls: Vec<&str> = raw.images.iter().filter_map(ManifestImage::url).collect();
            if urls.is_empty() {
                debug!(id = ?raw.id, "Skipping post without images");
                continue;
            }

            let id = raw
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| CarouselPost::fallback_id(username, posts.len() + 1));

            posts.push(CarouselPost::new(id, raw.caption.unwrap_or_default(), urls));
        }

        Ok(posts)
    }
}

#[async_trait]
impl PostSource for ManifestSource {
    fn name(&self) -> &str {
        "manifest"
    }

    async fn fetch_posts(
        &self,
        username: &str,
        max_posts: Option<usize>,
    ) -> Result<Vec<CarouselPost>, SourceError> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SourceError::ManifestNotFound {
                    path: self.path.clone(),
                })
            }
            Err(e) => return Err(SourceError::Io(e)),
        };

        let posts = Self::parse(&json, username, max_posts)?;
        info!(
            manifest = %self.path.display(),
            posts = posts.len(),
            "Loaded posts from manifest"
        );
        Ok(posts)
    }
}
