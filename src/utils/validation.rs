use crate::utils::error::{LookupError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
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

pub fn validate_keys<'a, I>(field_name: &str, keys: I) -> Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    for key in keys {
        if key.trim().is_empty() {
            return Err(LookupError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: key.clone(),
                reason: "Keys cannot be empty or whitespace-only".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("store", "./store.toml").is_ok());
        assert!(validate_path("store", "").is_err());
        assert!(validate_path("store", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("store.name", "users").is_ok());
        assert!(validate_non_empty_string("store.name", "   ").is_err());
    }

    #[test]
    fn test_validate_keys() {
        let good = vec!["Tom".to_string(), "Jerry".to_string()];
        assert!(validate_keys("values", &good).is_ok());

        let bad = vec!["Tom".to_string(), " ".to_string()];
        assert!(validate_keys("values", &bad).is_err());
    }
}
