use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::error::PipelineError;

static HANDLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@?([A-Za-z0-9._]+)").expect("handle pattern is valid"));

/// Extracts a username from a profile URL or handle.
///
/// Accepts `alice`, `@alice`, and URL-like references such as
/// `https://www.tiktok.com/@alice/video/123?lang=en` or `tiktok.com/@alice`.
/// For URLs the query string, fragment, trailing slash, scheme and host are
/// ignored; the first `@` segment holding a handle is used, falling back to the
/// first segment that holds one.
pub fn resolve_username(reference: &str) -> Result<String, PipelineError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(PipelineError::Resolution(
            "a profile URL or username must be provided".to_string(),
        ));
    }

    let handle = if reference.contains('/') {
        handle_from_url(reference)
    } else {
        bare_handle(reference)
    };

    handle
        .filter(|handle| !handle.chars().all(|c| c == '.'))
        .map(str::to_string)
        .ok_or_else(|| {
            PipelineError::Resolution(format!("unable to extract username from '{}'", reference))
        })
}

fn bare_handle(reference: &str) -> Option<&str> {
    let handle = reference.trim_start_matches('@');
    let matched = HANDLE_PATTERN.captures(handle)?.get(1)?;
    (matched.as_str().len() == handle.len()).then_some(handle)
}

fn handle_from_url(reference: &str) -> Option<&str> {
    let without_query = reference
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');

    let (has_scheme, rest) = match without_query.split_once("://") {
        Some((_, rest)) => (true, rest),
        None => (false, without_query),
    };

    let mut segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
    let first_is_host = match segments.first() {
        Some(first) => has_scheme || looks_like_host(first, &segments[1..]),
        None => false,
    };
    if first_is_host {
        segments.remove(0);
    }

    segments
        .iter()
        .copied()
        .filter(|s| s.starts_with('@'))
        .find_map(handle_in)
        .or_else(|| segments.iter().copied().find_map(handle_in))
}

fn handle_in(segment: &str) -> Option<&str> {
    HANDLE_PATTERN
        .captures(segment)?
        .get(1)
        .map(|m| m.as_str())
}

/// Without a scheme a dotted first segment is only a host when the reference
/// carries an `@handle` after it or it starts with `www.`. Otherwise it is a
/// dotted handle such as `alice.b`.
fn looks_like_host(first: &str, rest: &[&str]) -> bool {
    !first.starts_with('@')
        && first.contains('.')
        && (first.starts_with("www.") || rest.iter().any(|s| s.starts_with('@')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_with_query() {
        assert_eq!(
            resolve_username("https://example.com/@alice/video/123?x=1").unwrap(),
            "alice"
        );
    }

    #[test]
    fn test_handles() {
        assert_eq!(resolve_username("@alice").unwrap(), "alice");
        assert_eq!(resolve_username("alice").unwrap(), "alice");
        assert_eq!(resolve_username("  @bob.smith_1  ").unwrap(), "bob.smith_1");
    }

    #[test]
    fn test_profile_urls() {
        assert_eq!(
            resolve_username("https://www.tiktok.com/@alice/").unwrap(),
            "alice"
        );
        assert_eq!(resolve_username("tiktok.com/@carol").unwrap(), "carol");
        assert_eq!(resolve_username("@dave/photo/99").unwrap(), "dave");
        assert_eq!(
            resolve_username("https://example.com/erin#section").unwrap(),
            "erin"
        );
        assert_eq!(resolve_username("www.tiktok.com/frank").unwrap(), "frank");
    }

    #[test]
    fn test_dotted_handle_without_scheme() {
        assert_eq!(resolve_username("alice.b/photo/1").unwrap(), "alice.b");
        assert_eq!(resolve_username("alice.b/@carol").unwrap(), "carol");
    }

    #[test]
    fn test_segments_without_handle_are_skipped() {
        assert_eq!(resolve_username("https://x.com/@/alice").unwrap(), "alice");
        assert_eq!(resolve_username("https://x.com/@/@bob/video").unwrap(), "bob");
        assert_eq!(resolve_username("https://example.com/%%%/x").unwrap(), "x");
    }

    #[test]
    fn test_unresolvable_references() {
        for reference in [
            "",
            "   ",
            "https://example.com/",
            "https://example.com/?user=alice",
            "https://example.com/%%%",
            "https://example.com/@/%%%",
            "bad handle!",
            "@",
            "..",
        ] {
            let result = resolve_username(reference);
            assert!(
                matches!(result, Err(PipelineError::Resolution(_))),
                "expected resolution error for {:?}, got {:?}",
                reference,
                result
            );
        }
    }
}
