use crate::utils::error::{Result, StatsError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Durations are signed so that bad input reaches us instead of wrapping.
pub fn validate_non_negative_nanos(field_name: &str, nanoseconds: i64) -> Result<()> {
    if nanoseconds < 0 {
        return Err(StatsError::InvalidArgument {
            message: format!("{} must be non-negative, got {} ns", field_name, nanoseconds),
        });
    }
    Ok(())
}

pub fn validate_index(field_name: &str, index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(StatsError::InvalidArgument {
            message: format!("{} {} is out of range (len {})", field_name, index, len),
        });
    }
    Ok(())
}
