//! Opportunity status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use skillbridge_core::AppError;

/// Whether an opportunity is accepting applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityStatus {
    /// Accepting applications.
    Open,
    /// No longer accepting applications.
    Closed,
}

impl OpportunityStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for OpportunityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OpportunityStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(AppError::validation(format!(
                "Invalid opportunity status: '{s}'. Expected one of: open, closed"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("OPEN".parse::<OpportunityStatus>().unwrap(), OpportunityStatus::Open);
        assert_eq!("closed".parse::<OpportunityStatus>().unwrap(), OpportunityStatus::Closed);
        assert!("archived".parse::<OpportunityStatus>().is_err());
    }
}
