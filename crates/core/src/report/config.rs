//! Configuration for the report module.

use serde::{Deserialize, Serialize};

/// Naming of the generated report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Slug used in the file name (`<platform>_<username>_carousels.md`).
    #[serde(default = "default_platform")]
    pub platform: String,

    /// Display name used in the title line.
    #[serde(default = "default_platform_name")]
    pub platform_name: String,
}

fn default_platform() -> String {
    "tiktok".to_string()
}

fn default_platform_name() -> String {
    "TikTok".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            platform_name: default_platform_name(),
        }
    }
}

impl ReportConfig {
    /// File name of the report for `username`.
    pub fn file_name(&self, username: &str) -> String {
        format!("{}_{}_carousels.md", self.platform, username)
    }
}
