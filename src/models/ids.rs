//! Strongly-typed expense identifier
//!
//! Identifiers are random UUIDs so that two expenses added in quick
//! succession can never collide. Snapshots written by older versions used
//! integer millisecond timestamps; those are still accepted on load and
//! mapped onto the UUID space.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix used when showing an id to the user
const DISPLAY_PREFIX: &str = "exp-";

/// Length of the short hex form shown in lists
const SHORT_LEN: usize = 8;

/// Identifier of an expense within the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ID from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Map a legacy integer id onto the UUID space
    pub fn from_legacy(value: u64) -> Self {
        Self(Uuid::from_u128(u128::from(value)))
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// The 8-character hex form shown in lists
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..SHORT_LEN].to_string()
    }

    /// Check whether user input refers to this id
    ///
    /// Accepts the full UUID, the short form, or either with the `exp-`
    /// prefix. Matching is case-insensitive.
    pub fn matches(&self, input: &str) -> bool {
        let input = input.trim().to_ascii_lowercase();
        let input = input.strip_prefix(DISPLAY_PREFIX).unwrap_or(&input);

        if let Ok(uuid) = Uuid::parse_str(input) {
            return uuid == self.0;
        }
        input.len() == SHORT_LEN && self.short() == input
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, self.short())
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawExpenseId {
    Text(String),
    Legacy(u64),
}

impl<'de> Deserialize<'de> for ExpenseId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawExpenseId::deserialize(deserializer)? {
            RawExpenseId::Text(text) => Uuid::parse_str(&text)
                .map(Self)
                .map_err(serde::de::Error::custom),
            RawExpenseId::Legacy(value) => Ok(Self::from_legacy(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ExpenseId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: std::collections::HashSet<_> = (0..1000).map(|_| ExpenseId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_id_display() {
        let id = ExpenseId::new();
        let display = id.to_string();
        assert!(display.starts_with("exp-"));
        assert_eq!(display.len(), 12); // "exp-" + 8 chars
    }

    #[test]
    fn test_matches_short_and_full_forms() {
        let id = ExpenseId::new();
        assert!(id.matches(&id.to_string()));
        assert!(id.matches(&id.short()));
        assert!(id.matches(&id.as_uuid().to_string()));
        assert!(id.matches(&id.to_string().to_uppercase()));
        assert!(!id.matches("exp-"));
        assert!(!id.matches(&id.short()[..4]));
    }

    #[test]
    fn test_id_serialization() {
        let id = ExpenseId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_legacy_numeric_id() {
        let id: ExpenseId = serde_json::from_str("1718000000000").unwrap();
        assert_eq!(id, ExpenseId::from_legacy(1_718_000_000_000));
    }

    #[test]
    fn test_from_str() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: ExpenseId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
        assert_eq!(id.to_string(), "exp-550e8400");
    }
}
