//! Stable identifier newtype for launch records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Launch identifier, a decimal string assigned by the store.
///
/// Serializes transparently as a JSON string (`"1"`), never as an object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaunchId(pub String);

impl LaunchId {
    /// Builds the id for the `n`-th allocation of a store.
    pub fn from_seq(n: u64) -> Self {
        LaunchId(n.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` until a store has assigned this id.
    pub fn is_unassigned(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LaunchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for LaunchId {
    fn from(s: String) -> Self {
        LaunchId(s)
    }
}

impl From<&str> for LaunchId {
    fn from(s: &str) -> Self {
        LaunchId(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_string() {
        let id = LaunchId::from_seq(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn default_is_unassigned() {
        assert!(LaunchId::default().is_unassigned());
        assert!(!LaunchId::from("7").is_unassigned());
    }
}
