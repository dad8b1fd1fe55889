//! Feedback pattern for a whole row
//!
//! A pattern is the five tags of one guess, in column order. It is the
//! textual way to describe a row's statuses (`GY-GY`, `🟩🟨⬜🟩🟨`) for the
//! line-mode front ends.

use super::Tag;
use std::fmt;

/// Five per-letter statuses of one guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pattern([Tag; 5]);

impl Pattern {
    /// Create a pattern from five tags
    #[inline]
    #[must_use]
    pub const fn new(tags: [Tag; 5]) -> Self {
        Self(tags)
    }

    /// The tags in column order
    #[inline]
    #[must_use]
    pub const fn tags(self) -> [Tag; 5] {
        self.0
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/'.'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut tags = [Tag::Absent; 5];
        let mut count = 0;

        for ch in s.chars() {
            if count == 5 {
                return None;
            }
            tags[count] = Tag::from_symbol(ch)?;
            count += 1;
        }

        (count == 5).then_some(Self(tags))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|t| t.emoji()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
