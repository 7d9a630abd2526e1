use crate::utils::error::{Result, StampError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(StampError::InvalidComponent {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(StampError::ConfigValidationError {
        field: field_name.to_string(),
        message: format!(
            "Unsupported value '{}'. Valid values: {}",
            value,
            allowed.join(", ")
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("month", 1u32, 1, 12).is_ok());
        assert!(validate_range("month", 12u32, 1, 12).is_ok());
        assert!(validate_range("month", 0u32, 1, 12).is_err());
        assert!(validate_range("month", 13u32, 1, 12).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.level", "info", &["info", "debug"]).is_ok());
        assert!(validate_one_of("logging.level", "loud", &["info", "debug"]).is_err());
    }
}
