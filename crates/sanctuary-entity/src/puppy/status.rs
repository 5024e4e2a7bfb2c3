//! Puppy status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Availability status of a puppy in the catalog.
///
/// A puppy becomes `Adopted` if and only if some adoption request for it
/// reaches the approved status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "puppy_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PuppyStatus {
    /// Listed and open for applications.
    Available,
    /// Has at least one application under review; still open for more.
    Pending,
    /// Adopted. No further applications are accepted.
    Adopted,
}

impl PuppyStatus {
    /// Check if new applications may be submitted for this puppy.
    pub fn accepts_applications(&self) -> bool {
        !matches!(self, Self::Adopted)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Adopted => "adopted",
        }
    }
}

impl fmt::Display for PuppyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PuppyStatus {
    type Err = sanctuary_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "pending" => Ok(Self::Pending),
            "adopted" => Ok(Self::Adopted),
            _ => Err(sanctuary_core::AppError::validation(format!(
                "Invalid puppy status: '{s}'. Expected one of: available, pending, adopted"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_applications() {
        assert!(PuppyStatus::Available.accepts_applications());
        assert!(PuppyStatus::Pending.accepts_applications());
        assert!(!PuppyStatus::Adopted.accepts_applications());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "adopted".parse::<PuppyStatus>().unwrap(),
            PuppyStatus::Adopted
        );
        assert!("sold".parse::<PuppyStatus>().is_err());
    }
}
