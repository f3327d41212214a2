//! Core data models for the prep-bank repository.
//!
//! A [`RawEntry`] is the record shape read from a load source, before any
//! validation. A [`Entry`] is the validated, immutable unit the repository
//! hands out. The split keeps the validation boundary explicit: nothing
//! downstream of [`Repository::load`](crate::repository::Repository::load)
//! ever sees an unvalidated record.

use serde::{Deserialize, Serialize};

/// Raw record produced by a load source before validation.
///
/// Field order and record order in the source are meaningful: the order of
/// records determines per-category listing order and the first-seen order
/// of categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    /// Globally unique, stable identifier. Used as an external reference
    /// key, so it must never be reassigned to a different entry.
    pub id: u32,
    /// Grouping label. Free-form, open set; never empty.
    pub category: String,
    /// Short question text; never empty.
    pub question: String,
    /// Long-form markdown answer. Opaque to the repository: may embed
    /// fenced code blocks and tables, and is never parsed or validated.
    pub answer: String,
}

/// Validated question/answer entry held by the repository.
///
/// Immutable after load: the repository exposes shared references only,
/// and "updating" content means loading a fresh repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: u32,
    pub category: String,
    pub question: String,
    pub answer: String,
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        Self {
            id: raw.id,
            category: raw.category,
            question: raw.question,
            answer: raw.answer,
        }
    }
}
