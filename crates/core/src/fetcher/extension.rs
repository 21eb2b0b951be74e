//! File extension resolution for downloaded images.

/// Extension used when neither the URL nor the content type gives one.
pub const DEFAULT_EXTENSION: &str = ".jpg";

/// MIME type to extension table.
const MIME_EXTENSIONS: &[(&str, &str)] = &[
    ("image/jpeg", ".jpg"),
    ("image/jpg", ".jpg"),
    ("image/pjpeg", ".jpg"),
    ("image/png", ".png"),
    ("image/gif", ".gif"),
    ("image/webp", ".webp"),
    ("image/avif", ".avif"),
    ("image/heic", ".heic"),
    ("image/heif", ".heif"),
    ("image/bmp", ".bmp"),
    ("image/x-ms-bmp", ".bmp"),
    ("image/tiff", ".tiff"),
    ("image/svg+xml", ".svg"),
    ("image/x-icon", ".ico"),
    ("image/vnd.microsoft.icon", ".ico"),
];

/// Picks the extension for a downloaded image.
///
/// The URL path suffix wins, then the declared content type, then
/// [`DEFAULT_EXTENSION`]. The returned value always starts with a dot.
pub fn resolve_extension(url: &str, content_type: Option<&str>) -> String {
    url_suffix(url)
        .or_else(|| content_type.and_then(extension_for_content_type).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

/// Looks up an extension for a `Content-Type` header value.
///
/// Parameters such as `; charset=binary` are ignored and matching is
/// case-insensitive.
pub fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    let essence = content_type.split(';').next()?.trim().to_ascii_lowercase();
    MIME_EXTENSIONS
        .iter()
        .find(|(mime, _)| *mime == essence)
        .map(|(_, ext)| *ext)
}

/// Suffix of the last path segment, query string and fragment excluded.
fn url_suffix(url: &str) -> Option<String> {
    let path = match reqwest::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
    };

    let file_name = path.rsplit('/').next()?;
    let (stem, suffix) = file_name.rsplit_once('.')?;
    if stem.is_empty() || suffix.is_empty() || suffix.len() > 10 {
        return None;
    }
    if !suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    Some(format!(".{}", suffix))
}
