//! Input validation utilities

use crate::error::ConfigError;

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> Result<(), ConfigError> {
    if url.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "url".to_string(),
            value: url.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    // Basic URL validation - must start with http:// or https://
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::InvalidValue {
            field: "url".to_string(),
            value: url.to_string(),
            reason: "URL must start with http:// or https://".to_string(),
        });
    }

    Ok(())
}

/// Validate a request timeout in seconds
pub fn validate_timeout_seconds(seconds: u64) -> Result<(), ConfigError> {
    if seconds == 0 {
        return Err(ConfigError::InvalidValue {
            field: "timeout_seconds".to_string(),
            value: seconds.to_string(),
            reason: "timeout must be at least one second".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_valid_urls() {
        assert!(validate_url("http://localhost:8080/v1").is_ok());
        assert!(validate_url("https://api.staging-form3.tech/v1").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_invalid_urls() {
        assert!(validate_url("").is_err());
        assert!(validate_url("  ").is_err());
        assert!(validate_url("localhost:8080").is_err());
        assert!(validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_timeout_seconds() {
        assert!(validate_timeout_seconds(30).is_ok());
        assert!(matches!(
            validate_timeout_seconds(0),
            Err(ConfigError::InvalidValue { field, .. }) if field == "timeout_seconds"
        ));
    }
}
