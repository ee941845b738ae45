//! Mention directory value object
//!
//! Read-only Discord user id to display name table, built once at startup and
//! passed explicitly into the mention resolver.

use std::collections::HashMap;

/// Static user id -> display name lookup table
#[derive(Debug, Clone, Default)]
pub struct MentionDirectory {
    names: HashMap<String, String>,
}

impl MentionDirectory {
    /// Create an empty directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from (user id, display name) pairs
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        }
    }

    /// Add or replace an entry
    pub fn insert(&mut self, user_id: impl Into<String>, display_name: impl Into<String>) {
        self.names.insert(user_id.into(), display_name.into());
    }

    /// Look up the display name for a user id
    #[must_use]
    pub fn display_name(&self, user_id: &str) -> Option<&str> {
        self.names.get(user_id).map(String::as_str)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the directory has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let directory = MentionDirectory::from_pairs([("643480211421265930", "Rex")]);
        assert_eq!(directory.display_name("643480211421265930"), Some("Rex"));
        assert_eq!(directory.display_name("999"), None);
    }

    #[test]
    fn test_insert_replaces() {
        let mut directory = MentionDirectory::new();
        assert!(directory.is_empty());
        directory.insert("123", "Bob");
        directory.insert("123", "Bobby");
        assert_eq!(directory.display_name("123"), Some("Bobby"));
        assert_eq!(directory.len(), 1);
    }
}
