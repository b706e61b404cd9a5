//! Email text submitted for classification

use serde::{Deserialize, Serialize};

/// User-supplied email content.
///
/// The only validation is "non-empty after trimming"; the text itself is sent
/// to the classifier exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailText(String);

impl EmailText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the text is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn push(&mut self, c: char) {
        self.0.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.0.push_str(s);
    }

    /// Remove the last character, if any
    pub fn pop(&mut self) -> Option<char> {
        self.0.pop()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of characters (not bytes)
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for EmailText {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EmailText {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for EmailText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
