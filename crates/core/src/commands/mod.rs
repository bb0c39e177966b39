pub mod action;
pub mod info;
pub mod instances;
pub mod regions;

#[cfg(test)]
pub(crate) mod mock;

use crate::error::{ConfigurationError, Result};

/// Empty and whitespace-only values count as missing; the guard runs before
/// any provider call is attempted.
pub(crate) fn require_parameter<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigurationError::MissingParameter {
            name: name.to_string(),
        }
        .into());
    }
    Ok(value)
}
