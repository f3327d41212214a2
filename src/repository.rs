//! In-memory content repository with lookup indices.
//!
//! [`Repository::load`] consumes an ordered sequence of raw records,
//! validates integrity, and builds three indices over the same entries:
//!
//! | Index | Structure | Serves |
//! |-------|-----------|--------|
//! | `by_id` | id → slot | [`get`](Repository::get), O(1) |
//! | `by_category` | category → ordered slots | [`entries_in`](Repository::entries_in) |
//! | token index | lowercased token → slots | [`search`](Repository::search) |
//!
//! Construction is all-or-nothing: an integrity violation aborts the load
//! and no partially valid repository is ever observable.
//!
//! After construction the repository is immutable. Every query is pure,
//! synchronous, and lock-free, so a `Repository` behind an `Arc` is safe
//! for unsynchronized concurrent readers. A content update is a new
//! `load` plus an atomic swap of the shared reference; indices are never
//! mutated in place.

use std::collections::HashMap;

use crate::error::Error;
use crate::models::{Entry, RawEntry};
use crate::search::{self, SearchIndex};

/// Load-once, read-only collection of entries plus its query surface.
#[derive(Debug)]
pub struct Repository {
    /// Entries in source order. Slots index into this vector.
    entries: Vec<Entry>,
    by_id: HashMap<u32, usize>,
    by_category: HashMap<String, Vec<usize>>,
    /// Categories in first-seen order, for deterministic display.
    category_order: Vec<String>,
    index: SearchIndex,
}

impl Repository {
    /// Build a repository from an ordered sequence of raw records.
    ///
    /// Validates every record before any index is exposed: ids must be
    /// unique across the whole collection, and category and question must
    /// be non-blank. The first violation aborts the load.
    pub fn load(records: impl IntoIterator<Item = RawEntry>) -> Result<Self, Error> {
        let mut entries: Vec<Entry> = Vec::new();
        let mut by_id: HashMap<u32, usize> = HashMap::new();
        let mut by_category: HashMap<String, Vec<usize>> = HashMap::new();
        let mut category_order: Vec<String> = Vec::new();

        for raw in records {
            if raw.category.trim().is_empty() {
                return Err(Error::EmptyCategory { id: raw.id });
            }
            if raw.question.trim().is_empty() {
                return Err(Error::EmptyQuestion { id: raw.id });
            }

            let slot = entries.len();
            if by_id.insert(raw.id, slot).is_some() {
                return Err(Error::DuplicateId { id: raw.id });
            }

            if !by_category.contains_key(&raw.category) {
                category_order.push(raw.category.clone());
            }
            by_category
                .entry(raw.category.clone())
                .or_default()
                .push(slot);

            entries.push(Entry::from(raw));
        }

        let index = SearchIndex::build(&entries);

        Ok(Self {
            entries,
            by_id,
            by_category,
            category_order,
            index,
        })
    }

    /// Point lookup by id.
    ///
    /// O(1). An unknown id is caller misuse of a direct-reference key and
    /// fails with [`Error::NotFound`], unlike the filter queries below.
    pub fn get(&self, id: u32) -> Result<&Entry, Error> {
        self.by_id
            .get(&id)
            .map(|&slot| &self.entries[slot])
            .ok_or(Error::NotFound { id })
    }

    /// Entries in one category, in source order.
    ///
    /// Category matching is case-sensitive and exact: categories are fixed
    /// labels, and folding case would silently merge distinct ones. An
    /// unknown category yields an empty iterator, not an error. The
    /// iterator is restartable since the underlying collection never
    /// changes.
    pub fn entries_in<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&slot| &self.entries[slot])
    }

    /// Distinct categories present, in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.category_order.iter().map(String::as_str)
    }

    /// Keyword search over question and answer text.
    ///
    /// The query is split on whitespace into case-insensitive tokens, with
    /// AND semantics: every token must occur as a substring of the entry's
    /// question or answer (substring, not whole-word, so "dock" matches
    /// "Docker"). Entries with a question hit rank before answer-only
    /// matches; ties break by ascending id. A blank query is "no filter"
    /// and returns the full collection in ascending id order.
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        let tokens = search::tokenize(query);
        if tokens.is_empty() {
            let mut all: Vec<&Entry> = self.entries.iter().collect();
            all.sort_by_key(|e| e.id);
            return all;
        }

        let Some(hits) = self.index.matches(&tokens) else {
            return Vec::new();
        };

        let mut results: Vec<(u8, &Entry)> = hits
            .slots
            .iter()
            .map(|&slot| {
                let rank = if hits.question_hits.contains(&slot) { 0 } else { 1 };
                (rank, &self.entries[slot])
            })
            .collect();
        results.sort_by_key(|(rank, e)| (*rank, e.id));
        results.into_iter().map(|(_, e)| e).collect()
    }

    /// All entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Number of loaded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the repository holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, category: &str, question: &str, answer: &str) -> RawEntry {
        RawEntry {
            id,
            category: category.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    fn sample() -> Repository {
        Repository::load(vec![
            record(
                1,
                "Docker",
                "What is Docker and why is it used?",
                "Docker packages applications into containers that share the host kernel.",
            ),
            record(
                2,
                "Docker",
                "What is the difference between an image and a container?",
                "An image is a layered, read-only template; a container is a running instance of it.",
            ),
            record(
                3,
                "Kubernetes",
                "What is a pod?",
                "The smallest deployable unit; its containers share a network namespace.",
            ),
            record(
                4,
                "SQL",
                "What does a JOIN do?",
                "Combines rows from two tables on a related column.",
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_round_trip() {
        let repo = sample();
        let entries: Vec<Entry> = repo.iter().cloned().collect();
        for e in &entries {
            assert_eq!(repo.get(e.id).unwrap(), e);
        }
    }

    #[test]
    fn test_get_unknown_id() {
        let repo = sample();
        assert_eq!(repo.get(99), Err(Error::NotFound { id: 99 }));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Repository::load(vec![
            record(7, "Docker", "First question?", "First answer."),
            record(7, "SQL", "Second question?", "Second answer."),
        ]);
        assert_eq!(result.err(), Some(Error::DuplicateId { id: 7 }));
    }

    #[test]
    fn test_empty_category_rejected() {
        let result = Repository::load(vec![record(1, "   ", "A question?", "An answer.")]);
        assert_eq!(result.err(), Some(Error::EmptyCategory { id: 1 }));
    }

    #[test]
    fn test_empty_question_rejected() {
        let result = Repository::load(vec![record(1, "Docker", "", "An answer.")]);
        assert_eq!(result.err(), Some(Error::EmptyQuestion { id: 1 }));
    }

    #[test]
    fn test_category_filter_exact_and_ordered() {
        let repo = sample();
        let ids: Vec<u32> = repo.entries_in("Docker").map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
        for e in repo.entries_in("Docker") {
            assert_eq!(e.category, "Docker");
        }
    }

    #[test]
    fn test_category_filter_case_sensitive() {
        let repo = sample();
        assert_eq!(repo.entries_in("docker").count(), 0);
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let repo = sample();
        assert_eq!(repo.entries_in("NonexistentCategory").count(), 0);
    }

    #[test]
    fn test_category_iterator_restartable() {
        let repo = sample();
        let first: Vec<u32> = repo.entries_in("Docker").map(|e| e.id).collect();
        let second: Vec<u32> = repo.entries_in("Docker").map(|e| e.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let repo = sample();
        let cats: Vec<&str> = repo.categories().collect();
        assert_eq!(cats, vec!["Docker", "Kubernetes", "SQL"]);
    }

    #[test]
    fn test_empty_source_loads() {
        let repo = Repository::load(Vec::new()).unwrap();
        assert!(repo.is_empty());
        assert_eq!(repo.categories().count(), 0);
        assert!(repo.search("anything").is_empty());
    }

    #[test]
    fn test_queries_idempotent() {
        let repo = sample();
        assert_eq!(repo.search("docker"), repo.search("docker"));
        let a: Vec<u32> = repo.entries_in("SQL").map(|e| e.id).collect();
        let b: Vec<u32> = repo.entries_in("SQL").map(|e| e.id).collect();
        assert_eq!(a, b);
        assert_eq!(repo.get(3), repo.get(3));
    }
}
