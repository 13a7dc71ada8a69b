use crate::utils::error::{HiringError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(HiringError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(HiringError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(HiringError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(HiringError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(HiringError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_validate_url() {
        assert_ok!(validate_url("source.endpoint", "https://example.com/hiring.json"));
        assert_ok!(validate_url("source.endpoint", "http://localhost:8080"));
        assert_err!(validate_url("source.endpoint", ""));
        assert_err!(validate_url("source.endpoint", "invalid-url"));
        assert_err!(validate_url("source.endpoint", "ftp://example.com"));
    }

    #[test]
    fn test_validate_positive_number() {
        assert_ok!(validate_positive_number("source.timeout_seconds", 30, 1));
        assert_err!(validate_positive_number("source.timeout_seconds", 0, 1));
    }

    #[test]
    fn test_validate_range() {
        assert_ok!(validate_range("attempts", 1u32, 1, 10));
        assert_ok!(validate_range("attempts", 10u32, 1, 10));
        let err = validate_range("attempts", 11u32, 1, 10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value '11' for 'attempts': Value must be between 1 and 10"
        );
    }
}
