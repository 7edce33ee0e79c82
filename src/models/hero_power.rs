use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The association between one hero and one power, carrying the strength of
/// that pairing. Deleting either parent deletes the association.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroPower {
    pub id: i64,
    pub strength: Strength,
    pub hero_id: i64,
    pub power_id: i64,
}

/// How strongly a hero wields a power. Stored and serialized as its exact
/// spelling ("Strong", "Weak", "Average").
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::Average => "Average",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Strong" => Some(Self::Strong),
            "Weak" => Some(Self::Weak),
            "Average" => Some(Self::Average),
            _ => None,
        }
    }

    /// Validates a raw strength value on assignment. Anything other than the
    /// three exact spellings is rejected.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or(Error::InvalidStrength)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHeroPowerInput {
    /// Raw strength value; validated against [`Strength`] before the write.
    pub strength: String,
    pub hero_id: i64,
    pub power_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateHeroPowerInput {
    pub strength: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_accepts_only_the_three_exact_values() {
        assert_eq!(Strength::parse("Strong").unwrap(), Strength::Strong);
        assert_eq!(Strength::parse("Weak").unwrap(), Strength::Weak);
        assert_eq!(Strength::parse("Average").unwrap(), Strength::Average);
        assert!(Strength::parse("Mighty").is_err());
        assert!(Strength::parse("strong").is_err());
        assert!(Strength::parse("").is_err());
    }

    #[test]
    fn strength_round_trips_through_text() {
        for s in [Strength::Strong, Strength::Weak, Strength::Average] {
            assert_eq!(Strength::from_str(s.as_str()), Some(s));
        }
    }
}
