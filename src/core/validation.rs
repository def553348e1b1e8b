use chrono::{DateTime, SubsecRound, Utc};

use crate::core::{AppError, Result};

const MAX_NAME_LENGTH: usize = 255;

/// Trim and validate a required name field
pub fn required_name(name: Option<&str>, resource: &str) -> Result<String> {
    let trimmed = name.map(str::trim).unwrap_or_default();

    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{} name is required", resource)));
    }

    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "{} name cannot exceed {} characters",
            resource, MAX_NAME_LENGTH
        )));
    }

    Ok(trimmed.to_string())
}

/// Current time at the precision the store persists (microseconds)
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
