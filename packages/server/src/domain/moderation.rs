//! Room name moderation.
//!
//! Names are split into words on any non-alphanumeric character and each
//! word is compared case-insensitively against a block list, so a blocked
//! word embedded inside a longer word is not flagged.

use super::{error::ValueObjectError, value_object::RoomName};

/// Words rejected in room names unless a custom list is configured
pub const DEFAULT_BLOCKED_WORDS: &[&str] = &["fuck", "shit", "bitch", "cunt", "asshole", "bastard"];

/// Rejects room names that contain a blocked word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    blocked: Vec<String>,
}

impl NameFilter {
    /// Build a filter from `words`. Blank entries are ignored, so an empty
    /// list disables moderation.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut blocked: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        blocked.sort();
        blocked.dedup();
        Self { blocked }
    }

    /// Check `name` against the block list.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::RoomNameInappropriate`] if any word of the
    /// name is blocked.
    pub fn check(&self, name: &RoomName) -> Result<(), ValueObjectError> {
        let flagged = name
            .as_str()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .any(|word| self.blocked.contains(&word.to_lowercase()));
        if flagged {
            return Err(ValueObjectError::RoomNameInappropriate);
        }
        Ok(())
    }
}

impl Default for NameFilter {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCKED_WORDS)
    }
}
