use crate::utils::error::{PalindromeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PalindromeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PalindromeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Rejects setting both of two mutually exclusive options.
pub fn validate_exclusive(first: &str, first_set: bool, second: &str, second_set: bool) -> Result<()> {
    if first_set && second_set {
        return Err(PalindromeError::ConfigError {
            message: format!("'{}' and '{}' cannot be used together", first, second),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("file", "inputs.txt").is_ok());
        assert!(validate_path("file", "").is_err());
        assert!(validate_path("file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_exclusive() {
        assert!(validate_exclusive("text", true, "--file", false).is_ok());
        assert!(validate_exclusive("text", false, "--file", false).is_ok());
        assert!(validate_exclusive("text", true, "--file", true).is_err());
    }
}
