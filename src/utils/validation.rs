use crate::utils::error::{MatrixError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MatrixError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
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
        return Err(MatrixError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Tolerances are relative to the largest entry; anything at or above 1 rejects every matrix.
pub fn validate_tolerance(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..1.0).contains(&value) {
        return Err(MatrixError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Tolerance must be a finite value in [0, 1)".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(MatrixError::InvalidConfigValue {
                field: field_name.to_string(),
                value: name.to_string(),
                reason: "Duplicate name".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("precision", 4usize, 1, 17).is_ok());
        assert!(validate_range("precision", 0usize, 1, 17).is_err());
        assert!(validate_range("precision", 18usize, 1, 17).is_err());
    }

    #[test]
    fn test_validate_tolerance() {
        assert!(validate_tolerance("singular_tolerance", 1e-12).is_ok());
        assert!(validate_tolerance("singular_tolerance", 0.0).is_ok());
        assert!(validate_tolerance("singular_tolerance", 1.0).is_err());
        assert!(validate_tolerance("singular_tolerance", -1e-3).is_err());
        assert!(validate_tolerance("singular_tolerance", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_unique_names() {
        assert!(validate_unique_names("requests.name", ["a", "b"]).is_ok());
        assert!(validate_unique_names("requests.name", ["a", "b", "a"]).is_err());
        assert!(validate_non_empty_string("requests.name", "  ").is_err());
    }
}
