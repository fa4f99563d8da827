//! Quantity level vocabulary.
//!
//! The record's `quantity` field is free text, but the client's filter and
//! sort controls work with a three-value stock vocabulary. Classification
//! is case-insensitive equality against that vocabulary; any other text
//! (numeric amounts, units, missing) falls outside it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The stock levels the quantity filter and sort understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityLevel {
    /// Stock is running low.
    Low,
    /// Stock is adequate.
    Fair,
    /// Stock is plentiful.
    Good,
}

impl QuantityLevel {
    /// Classifies a free-text quantity, matching the vocabulary
    /// case-insensitively; anything else is `None`.
    pub fn of(quantity: &str) -> Option<QuantityLevel> {
        match quantity.trim().to_ascii_lowercase().as_str() {
            "low" => Some(QuantityLevel::Low),
            "fair" => Some(QuantityLevel::Fair),
            "good" => Some(QuantityLevel::Good),
            _ => None,
        }
    }

    /// Returns true if `quantity` classifies as this level.
    pub fn matches(&self, quantity: &str) -> bool {
        QuantityLevel::of(quantity) == Some(*self)
    }

    /// Sort priority with `Low` first.
    pub fn priority(&self) -> u8 {
        match self {
            QuantityLevel::Low => 1,
            QuantityLevel::Fair => 2,
            QuantityLevel::Good => 3,
        }
    }
}

impl fmt::Display for QuantityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuantityLevel::Low => "Low",
            QuantityLevel::Fair => "Fair",
            QuantityLevel::Good => "Good",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for QuantityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(QuantityLevel::Low),
            "Fair" => Ok(QuantityLevel::Fair),
            "Good" => Ok(QuantityLevel::Good),
            _ => Err(format!("unknown quantity level: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(QuantityLevel::of("LOW"), Some(QuantityLevel::Low));
        assert_eq!(QuantityLevel::of(" fair "), Some(QuantityLevel::Fair));
        assert_eq!(QuantityLevel::of("Good"), Some(QuantityLevel::Good));
        assert_eq!(QuantityLevel::of("2 L"), None);
        assert_eq!(QuantityLevel::of(""), None);
    }

    #[test]
    fn test_matches_follows_classification() {
        assert!(QuantityLevel::Low.matches("low"));
        assert!(!QuantityLevel::Low.matches("lower"));
        assert!(!QuantityLevel::Good.matches("500 mL"));
    }

    #[test]
    fn test_priorities_put_low_first() {
        assert!(QuantityLevel::Low.priority() < QuantityLevel::Fair.priority());
        assert!(QuantityLevel::Fair.priority() < QuantityLevel::Good.priority());
    }

    #[test]
    fn test_labels_round_trip() {
        for label in ["Low", "Fair", "Good"] {
            let level: QuantityLevel = label.parse().unwrap();
            assert_eq!(level.to_string(), label);
        }
        assert!("Plenty".parse::<QuantityLevel>().is_err());
    }
}
