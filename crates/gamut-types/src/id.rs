// Stable space handle

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Space identifier
///
/// The stable type tag used as a type handle everywhere: descriptor store
/// keys, graph nodes, path steps, and cache keys. Explicit first-class
/// handles replace any reflection over constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpaceId(pub String);

impl SpaceId {
    /// Create a new SpaceId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SpaceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SpaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl FromStr for SpaceId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("space id must be non-empty".to_string());
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trip() {
        let id = SpaceId::new("rgb");
        assert_eq!(id.to_string(), "rgb");
        assert_eq!(id.as_str(), "rgb");
    }

    #[test]
    fn from_str_rejects_blank() {
        assert!("  ".parse::<SpaceId>().is_err());
        assert!("hsl".parse::<SpaceId>().is_ok());
    }
}
