//! Core domain types for the assistant
//!
//! Pure value types with no I/O: the per-letter `Tag`, the five-tag `Pattern`
//! and the validated `Word`.

mod pattern;
mod tag;
mod word;

pub use pattern::Pattern;
pub use tag::Tag;
pub use word::{Word, WordError};
