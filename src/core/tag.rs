//! Per-letter match status
//!
//! A tag records how a guessed letter relates to the secret word:
//! - `Absent` (gray): letter not in the word
//! - `Present` (yellow): letter in the word, wrong position
//! - `Correct` (green): letter in the correct position

use serde::{Deserialize, Serialize};
use std::fmt;

/// Match status of a single cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    #[default]
    Absent,
    Present,
    Correct,
}

impl Tag {
    /// Next tag in the cycle `absent → present → correct → absent`
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Absent => Self::Present,
            Self::Present => Self::Correct,
            Self::Correct => Self::Absent,
        }
    }

    /// Number of cycle steps needed to go from `self` to `target`
    #[must_use]
    pub const fn steps_to(self, target: Self) -> usize {
        (target as usize + 3 - self as usize) % 3
    }

    /// Contract name (`absent`, `present`, `correct`)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        }
    }

    /// Color name (`gray`, `yellow`, `green`)
    #[must_use]
    pub const fn color_name(self) -> &'static str {
        match self {
            Self::Absent => "gray",
            Self::Present => "yellow",
            Self::Correct => "green",
        }
    }

    /// Emoji square for this tag
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/'.'/⬜.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
