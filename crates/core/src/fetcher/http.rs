//! HTTP image fetcher.

use futures::future::join_all;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use crate::metrics::{DOWNLOADS_COMPLETED, DOWNLOADS_FAILED, DOWNLOADS_STARTED, DOWNLOAD_DURATION};
use crate::model::{CarouselImage, CarouselPost};

use super::config::FetcherConfig;
use super::error::FetchError;
use super::extension::resolve_extension;
use super::limiter::ConcurrencyLimiter;

/// Counts for one fetch phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FetchSummary {
    /// Images scheduled for download.
    pub attempted: usize,
    /// Images written to disk.
    pub downloaded: usize,
    /// Images left without a local path.
    pub failed: usize,
}

/// Directory holding the images of the post at `position` (1-based).
pub fn carousel_dir(destination_root: &Path, username: &str, position: usize) -> PathBuf {
    destination_root
        .join(username)
        .join(format!("carousel_{}", position))
}

/// File name for an image; `extension` includes the leading dot.
pub fn image_file_name(index: u32, extension: &str) -> String {
    format!("image_{}{}", index, extension)
}

/// Downloads carousel images over HTTP with a global concurrency ceiling.
pub struct ImageFetcher {
    client: Client,
    config: FetcherConfig,
    limiter: ConcurrencyLimiter,
}

impl ImageFetcher {
    /// Creates a fetcher with its own HTTP client.
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(FetchError::ClientBuild)?;

        let limiter = ConcurrencyLimiter::new(config.concurrency);
        Ok(Self {
            client,
            config,
            limiter,
        })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// The limiter shared by all downloads of this fetcher.
    pub fn limiter(&self) -> &ConcurrencyLimiter {
        &self.limiter
    }

    /// Downloads every image of every post.
    ///
    /// Returns once all downloads have finished. Per-image failures are
    /// logged and counted; only failing to create the download directories
    /// is reported as an error.
    pub async fn fetch(
        &self,
        posts: &mut [CarouselPost],
        destination_root: &Path,
        username: &str,
    ) -> Result<FetchSummary, FetchError> {
        create_dir(&destination_root.join(username)).await?;

        let mut jobs: Vec<(PathBuf, &mut CarouselImage)> = Vec::new();
        for (position, post) in posts.iter_mut().enumerate() {
            let dir = carousel_dir(destination_root, username, position + 1);
            create_dir(&dir).await?;
            for image in post.images_mut().iter_mut() {
                jobs.push((dir.clone(), image));
            }
        }

        let attempted = jobs.len();
        info!(
            images = attempted,
            concurrency = self.limiter.limit(),
            "Downloading carousel images"
        );

        let outcomes = join_all(
            jobs.into_iter()
                .map(|(dir, image)| self.fetch_into(image, dir)),
        )
        .await;

        let downloaded = outcomes.into_iter().filter(|ok| *ok).count();
        let summary = FetchSummary {
            attempted,
            downloaded,
            failed: attempted - downloaded,
        };

        info!(
            downloaded = summary.downloaded,
            failed = summary.failed,
            peak_in_flight = self.limiter.peak_in_flight(),
            "Download phase finished"
        );

        Ok(summary)
    }

    /// Downloads one image and records its path. Returns whether it succeeded.
    async fn fetch_into(&self, image: &mut CarouselImage, dir: PathBuf) -> bool {
        DOWNLOADS_STARTED.inc();
        let start = Instant::now();

        match self.download(image.source_url(), image.index(), &dir).await {
            Ok(path) => {
                debug!(url = image.source_url(), path = %path.display(), "Downloaded image");
                image.record_download(path);
                DOWNLOADS_COMPLETED.inc();
                DOWNLOAD_DURATION
                    .with_label_values(&["success"])
                    .observe(start.elapsed().as_secs_f64());
                true
            }
            Err(e) => {
                if e.is_per_image() {
                    warn!(url = image.source_url(), error = %e, "Failed to download image");
                } else {
                    error!(url = image.source_url(), error = %e, "Download aborted");
                }
                DOWNLOADS_FAILED.inc();
                DOWNLOAD_DURATION
                    .with_label_values(&["failed"])
                    .observe(start.elapsed().as_secs_f64());
                false
            }
        }
    }

    async fn download(&self, url: &str, index: u32, dir: &Path) -> Result<PathBuf, FetchError> {
        let _permit = self.limiter.acquire().await?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        if body.is_empty() {
            return Err(FetchError::EmptyBody {
                url: url.to_string(),
            });
        }

        let extension = resolve_extension(url, content_type.as_deref());
        let path = dir.join(image_file_name(index, &extension));
        tokio::fs::write(&path, &body)
            .await
            .map_err(|source| FetchError::WriteFailed {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }
}

async fn create_dir(path: &Path) -> Result<(), FetchError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| FetchError::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_image(server: &MockServer, route: &str, body: &[u8], content_type: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Content-Type", content_type)
                    .set_body_bytes(body.to_vec()),
            )
            .mount(server)
            .await;
    }

    #[test]
    fn test_layout_helpers() {
        let dir = carousel_dir(Path::new("data"), "alice", 2);
        assert_eq!(dir, PathBuf::from("data/alice/carousel_2"));
        assert_eq!(image_file_name(3, ".png"), "image_3.png");
    }

    #[tokio::test]
    async fn test_fetch_writes_files_and_records_paths() {
        let server = MockServer::start().await;
        mount_image(&server, "/a.png", b"png-bytes", "image/png").await;
        mount_image(&server, "/b", b"webp-bytes", "image/webp").await;
        mount_image(&server, "/c", b"jpeg-bytes", "image/jpeg").await;

        let temp = TempDir::new().unwrap();
        let mut posts = vec![
            CarouselPost::new(
                "p1",
                "first",
                [format!("{}/a.png", server.uri()), format!("{}/b", server.uri())],
            ),
            CarouselPost::new("p2", "second", [format!("{}/c", server.uri())]),
        ];

        let fetcher = ImageFetcher::new(FetcherConfig::default()).unwrap();
        let summary = fetcher.fetch(&mut posts, temp.path(), "alice").await.unwrap();

        assert_eq!(
            summary,
            FetchSummary {
                attempted: 3,
                downloaded: 3,
                failed: 0
            }
        );

        let first = temp.path().join("alice/carousel_1/image_1.png");
        let second = temp.path().join("alice/carousel_1/image_2.webp");
        let third = temp.path().join("alice/carousel_2/image_1.jpg");
        assert_eq!(posts[0].images()[0].local_path(), Some(first.as_path()));
        assert_eq!(posts[0].images()[1].local_path(), Some(second.as_path()));
        assert_eq!(posts[1].images()[0].local_path(), Some(third.as_path()));
        assert_eq!(std::fs::read(&first).unwrap(), b"png-bytes");
        assert_eq!(std::fs::read(&third).unwrap(), b"jpeg-bytes");
    }

    #[tokio::test]
    async fn test_failures_do_not_abort_siblings() {
        let server = MockServer::start().await;
        mount_image(&server, "/ok.jpg", b"ok", "image/jpeg").await;
        Mock::given(method("GET"))
            .and(path("/missing.jpg"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/empty.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(Vec::<u8>::new()))
            .mount(&server)
            .await;

        let temp = TempDir::new().unwrap();
        let mut posts = vec![CarouselPost::new(
            "p1",
            "",
            [
                format!("{}/missing.jpg", server.uri()),
                format!("{}/ok.jpg", server.uri()),
                format!("{}/empty.jpg", server.uri()),
                "not a url".to_string(),
            ],
        )];

        let fetcher = ImageFetcher::new(FetcherConfig::default()).unwrap();
        let summary = fetcher.fetch(&mut posts, temp.path(), "bob").await.unwrap();

        assert_eq!(summary.attempted, 4);
        assert_eq!(summary.downloaded, 1);
        assert_eq!(summary.failed, 3);

        let images = posts[0].images();
        assert!(!images[0].is_downloaded());
        assert!(images[1].is_downloaded());
        assert!(!images[2].is_downloaded());
        assert!(!images[3].is_downloaded());
        assert!(!temp.path().join("bob/carousel_1/image_3.jpg").exists());
    }

    #[tokio::test]
    async fn test_concurrency_ceiling_is_respected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Content-Type", "image/jpeg")
                    .set_body_bytes(b"x".to_vec())
                    .set_delay(Duration::from_millis(50)),
            )
            .mount(&server)
            .await;

        let temp = TempDir::new().unwrap();
        let mut posts: Vec<CarouselPost> = (0..4)
            .map(|p| {
                CarouselPost::new(
                    format!("p{}", p),
                    "",
                    (0..4).map(|i| format!("{}/img/{}/{}", server.uri(), p, i)),
                )
            })
            .collect();

        let fetcher = ImageFetcher::new(FetcherConfig::default().with_concurrency(3)).unwrap();
        let summary = fetcher.fetch(&mut posts, temp.path(), "carol").await.unwrap();

        assert_eq!(summary.downloaded, 16);
        assert_eq!(fetcher.limiter().peak_in_flight(), 3);
        assert_eq!(fetcher.limiter().in_flight(), 0);
    }

    #[tokio::test]
    async fn test_timeout_marks_image_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow.jpg"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(b"late".to_vec())
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;
        mount_image(&server, "/fast.jpg", b"fast", "image/jpeg").await;

        let temp = TempDir::new().unwrap();
        let mut posts = vec![CarouselPost::new(
            "p1",
            "",
            [
                format!("{}/slow.jpg", server.uri()),
                format!("{}/fast.jpg", server.uri()),
            ],
        )];

        let fetcher = ImageFetcher::new(FetcherConfig::default().with_timeout_secs(1)).unwrap();
        let summary = fetcher.fetch(&mut posts, temp.path(), "dave").await.unwrap();

        assert_eq!(summary.downloaded, 1);
        assert!(!posts[0].images()[0].is_downloaded());
        assert!(posts[0].images()[1].is_downloaded());
    }

    #[tokio::test]
    async fn test_refetch_overwrites_files() {
        let server = MockServer::start().await;
        mount_image(&server, "/a.jpg", b"same-bytes", "image/jpeg").await;

        let temp = TempDir::new().unwrap();
        let fetcher = ImageFetcher::new(FetcherConfig::default()).unwrap();

        for _ in 0..2 {
            let mut posts = vec![CarouselPost::new("p1", "", [format!("{}/a.jpg", server.uri())])];
            fetcher.fetch(&mut posts, temp.path(), "erin").await.unwrap();
        }

        let entries: Vec<_> = std::fs::read_dir(temp.path().join("erin/carousel_1"))
            .unwrap()
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            std::fs::read(temp.path().join("erin/carousel_1/image_1.jpg")).unwrap(),
            b"same-bytes"
        );
    }

    #[tokio::test]
    async fn test_no_posts_creates_user_dir_only() {
        let temp = TempDir::new().unwrap();
        let fetcher = ImageFetcher::new(FetcherConfig::default()).unwrap();
        let mut posts: Vec<CarouselPost> = Vec::new();

        let summary = fetcher.fetch(&mut posts, temp.path(), "frank").await.unwrap();

        assert_eq!(summary, FetchSummary::default());
        assert!(temp.path().join("frank").is_dir());
    }

    #[tokio::test]
    async fn test_unwritable_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        std::fs::write(&blocker, b"not a dir").unwrap();

        let fetcher = ImageFetcher::new(FetcherConfig::default()).unwrap();
        let mut posts = vec![CarouselPost::new("p1", "", ["http://127.0.0.1:9/a.jpg"])];
        let result = fetcher.fetch(&mut posts, &blocker, "gina").await;

        assert!(matches!(
            result,
            Err(FetchError::DirectoryCreationFailed { .. })
        ));
    }
}
