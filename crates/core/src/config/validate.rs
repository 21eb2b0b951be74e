use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Profile reference is not blank
/// - Download concurrency and timeouts are at least 1
/// - OCR language is not blank
/// - `max_posts`, when set, is at least 1
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.profile.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "profile cannot be empty".to_string(),
        ));
    }

    if config.download.concurrency == 0 {
        return Err(ConfigError::ValidationError(
            "download.concurrency must be at least 1".to_string(),
        ));
    }

    if config.download.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "download.timeout_secs must be at least 1".to_string(),
        ));
    }

    if config.ocr.language.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "ocr.language cannot be empty".to_string(),
        ));
    }

    if config.ocr.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "ocr.timeout_secs must be at least 1".to_string(),
        ));
    }

    if config.max_posts == Some(0) {
        return Err(ConfigError::ValidationError(
            "max_posts must be at least 1 when set".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from_str;

    fn base_config() -> Config {
        load_config_from_str("profile = \"@alice\"\n").unwrap()
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&base_config()).is_ok());
    }

    #[test]
    fn test_validate_blank_profile_fails() {
        let mut config = base_config();
        config.profile = "   ".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_zero_concurrency_fails() {
        let mut config = base_config();
        config.download.concurrency = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("download.concurrency"));
    }

    #[test]
    fn test_validate_zero_timeout_fails() {
        let mut config = base_config();
        config.download.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_blank_language_fails() {
        let mut config = base_config();
        config.ocr.language = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_max_posts_fails() {
        let mut config = base_config();
        config.max_posts = Some(0);
        assert!(validate_config(&config).is_err());

        config.max_posts = Some(1);
        assert!(validate_config(&config).is_ok());
    }
}
