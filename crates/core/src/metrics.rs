//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Downloads (started, completed, failed, duration)
//! - Text recognition (results per outcome)
//! - Reports written

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Download Metrics
// =============================================================================

/// Downloads started total.
pub static DOWNLOADS_STARTED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("carousel_downloads_started_total", "Total image downloads started").unwrap()
});

/// Downloads completed total.
pub static DOWNLOADS_COMPLETED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "carousel_downloads_completed_total",
        "Total image downloads completed successfully",
    )
    .unwrap()
});

/// Downloads failed total.
pub static DOWNLOADS_FAILED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "carousel_downloads_failed_total",
        "Total image downloads that failed",
    )
    .unwrap()
});

/// Download duration in seconds.
pub static DOWNLOAD_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "carousel_download_duration_seconds",
            "Duration of image downloads",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["result"], // "success", "failed"
    )
    .unwrap()
});

// =============================================================================
// Recognition Metrics
// =============================================================================

/// Recognition attempts by result.
pub static RECOGNITIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("carousel_recognitions_total", "Total text recognition attempts"),
        &["result"], // "success", "failed", "skipped"
    )
    .unwrap()
});

// =============================================================================
// Report Metrics
// =============================================================================

/// Reports written total.
pub static REPORTS_WRITTEN: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("carousel_reports_written_total", "Total reports written").unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        // Downloads
        Box::new(DOWNLOADS_STARTED.clone()),
        Box::new(DOWNLOADS_COMPLETED.clone()),
        Box::new(DOWNLOADS_FAILED.clone()),
        Box::new(DOWNLOAD_DURATION.clone()),
        // Recognition
        Box::new(RECOGNITIONS_TOTAL.clone()),
        // Reports
        Box::new(REPORTS_WRITTEN.clone()),
    ]
}
