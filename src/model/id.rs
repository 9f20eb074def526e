use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier of a category or assignment.
///
/// Rendered in canonical form as a lowercase hyphenated UUID. Ordering of ids
/// matches the lexicographic ordering of their canonical strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Generate a new random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Check whether the canonical string of this id starts with `prefix`
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        self.to_string().starts_with(prefix)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for EntityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Resolve a user-supplied prefix to a single id in `entries`.
///
/// Returns the first matching id in map order, which is the match with the
/// lexicographically smallest canonical string. An empty prefix matches
/// every entry.
pub fn resolve_prefix<V>(entries: &BTreeMap<EntityId, V>, prefix: &str) -> Option<EntityId> {
    let mut matches = entries.keys().filter(|id| id.matches_prefix(prefix));
    let first = *matches.next()?;

    let others = matches.count();
    if others > 0 {
        tracing::warn!(
            "prefix '{}' matches {} ids, using {}",
            prefix,
            others + 1,
            first
        );
    }

    Some(first)
}
