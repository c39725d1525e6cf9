use crate::utils::error::{LookupError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LookupError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_http_and_https() {
        assert!(validate_url("base_url", "https://www.carqueryapi.com/api/0.3/?callback=?").is_ok());
        assert!(validate_url("base_url", "http://localhost:8080/api").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_other_schemes() {
        let err = validate_url("base_url", "ftp://example.com").unwrap_err();
        assert!(matches!(
            err,
            LookupError::InvalidConfigValueError { ref field, .. } if field == "base_url"
        ));
    }

    #[test]
    fn test_validate_url_rejects_garbage() {
        assert!(validate_url("base_url", "not a url").is_err());
        assert!(validate_url("base_url", "").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("user_agent", "PostmanRuntime/7.39.0").is_ok());
        assert!(validate_non_empty_string("user_agent", "   ").is_err());
    }
}
