use crate::error::{OsuApiError, Result};

pub const ENDPOINT_PLACEHOLDER: &str = "{endpoint}";
pub const KEY_PLACEHOLDER: &str = "{key}";

/// Checks for client construction inputs.
pub struct ConfigValidator;

impl ConfigValidator {
    /// API keys are opaque, but never empty and never contain whitespace.
    pub fn validate_api_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(OsuApiError::Config("API key must not be empty".to_string()));
        }

        if key.chars().any(char::is_whitespace) {
            return Err(OsuApiError::Config(
                "API key must not contain whitespace".to_string(),
            ));
        }

        Ok(())
    }

    pub fn validate_base_url(template: &str) -> Result<()> {
        if !template.starts_with("http://") && !template.starts_with("https://") {
            return Err(OsuApiError::Config(format!(
                "base URL `{template}` must start with http:// or https://"
            )));
        }

        for placeholder in [ENDPOINT_PLACEHOLDER, KEY_PLACEHOLDER] {
            if !template.contains(placeholder) {
                return Err(OsuApiError::Config(format!(
                    "base URL `{template}` is missing the `{placeholder}` placeholder"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_key() {
        assert!(ConfigValidator::validate_api_key("").is_err());
        assert!(ConfigValidator::validate_api_key("abc def").is_err());
        assert!(ConfigValidator::validate_api_key("0123456789abcdef").is_ok());
    }

    #[test]
    fn test_validate_base_url() {
        assert!(ConfigValidator::validate_base_url("osu.ppy.sh/api/{endpoint}?k={key}").is_err());
        assert!(ConfigValidator::validate_base_url("https://osu.ppy.sh/api/{endpoint}").is_err());
        assert!(ConfigValidator::validate_base_url("https://osu.ppy.sh/api/get_scores?k={key}").is_err());
        assert!(ConfigValidator::validate_base_url("https://osu.ppy.sh/api/{endpoint}?k={key}").is_ok());
        assert!(ConfigValidator::validate_base_url("http://localhost:8080/{endpoint}?k={key}").is_ok());
    }
}
