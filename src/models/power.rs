use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minimum accepted length for a power description, in characters.
pub const MIN_DESCRIPTION_LEN: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Power {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Power {
    /// Rejects a description that is empty or shorter than
    /// [`MIN_DESCRIPTION_LEN`] characters. Runs on every assignment of the
    /// column, before the value reaches the database.
    pub fn validate_description(value: &str) -> Result<()> {
        if value.is_empty() || value.chars().count() < MIN_DESCRIPTION_LEN {
            return Err(Error::InvalidDescription);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePowerInput {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePowerInput {
    pub name: Option<String>,
    pub description: Option<String>,
}
