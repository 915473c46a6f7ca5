use crate::domain::model::MIN_LIMIT;
use crate::utils::error::{BenchError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses the positional `<limit>` argument.
pub fn parse_limit(raw: Option<&str>) -> Result<i64> {
    let raw = raw.ok_or(BenchError::MissingLimit)?;

    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|e| BenchError::InvalidLimit {
            value: raw.to_string(),
            reason: format!("not an integer ({})", e),
        })?;

    validate_limit(value)?;
    Ok(value)
}

pub fn validate_limit(value: i64) -> Result<()> {
    if value < MIN_LIMIT {
        return Err(BenchError::InvalidLimit {
            value: value.to_string(),
            reason: format!("must be at least {}", MIN_LIMIT),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(BenchError::ConfigError {
            message: format!("{} must be at least {} (got {})", field_name, min_value, value),
        });
    }
    Ok(())
}

pub fn validate_non_empty<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(BenchError::ConfigError {
            message: format!("{} cannot be empty", field_name),
        });
    }
    Ok(())
}
