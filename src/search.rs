//! Keyword search: tokenization and the inverted token index.
//!
//! The index maps every lowercased whitespace-delimited word of every
//! question and answer to the set of entry slots containing it, built once
//! at load time. A query token matches an entry when it occurs as a
//! substring of one of the entry's indexed words. Query tokens carry no
//! whitespace, so any substring occurrence in the raw text falls inside a
//! single word, and scanning index keys is equivalent to scanning the text
//! without re-lowercasing it per query.
//!
//! Question hits are tracked separately from answer hits so results can
//! rank question matches first.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;

use crate::models::Entry;
use crate::repository::Repository;

/// Split text into lowercased whitespace-delimited tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(|w| w.to_lowercase()).collect()
}

/// Entry slots satisfying a query, with the subset that hit in a question.
#[derive(Debug)]
pub(crate) struct MatchSet {
    /// Slots where every query token matched question or answer text.
    pub slots: BTreeSet<usize>,
    /// Slots where at least one query token matched inside the question.
    pub question_hits: BTreeSet<usize>,
}

/// Inverted token index over question and answer text.
///
/// `BTreeMap` keeps key iteration deterministic; slot sets are ordered so
/// downstream sorting is reproducible.
#[derive(Debug, Default)]
pub(crate) struct SearchIndex {
    question_tokens: BTreeMap<String, BTreeSet<usize>>,
    answer_tokens: BTreeMap<String, BTreeSet<usize>>,
}

impl SearchIndex {
    /// Index every entry's question and answer words by slot.
    pub(crate) fn build(entries: &[Entry]) -> Self {
        let mut index = Self::default();
        for (slot, entry) in entries.iter().enumerate() {
            for token in tokenize(&entry.question) {
                index.question_tokens.entry(token).or_default().insert(slot);
            }
            for token in tokenize(&entry.answer) {
                index.answer_tokens.entry(token).or_default().insert(slot);
            }
        }
        index
    }

    /// Slots where all query tokens match, AND semantics across tokens.
    ///
    /// Returns `None` when nothing matches. Tokens must already be
    /// lowercased (see [`tokenize`]).
    pub(crate) fn matches(&self, tokens: &[String]) -> Option<MatchSet> {
        let mut matched: Option<BTreeSet<usize>> = None;
        let mut question_hits: BTreeSet<usize> = BTreeSet::new();

        for token in tokens {
            let (slots, in_question) = self.lookup(token);
            question_hits.extend(in_question);
            let next = match matched {
                Some(prev) => prev.intersection(&slots).copied().collect(),
                None => slots,
            };
            if next.is_empty() {
                return None;
            }
            matched = Some(next);
        }

        matched.map(|slots| MatchSet {
            slots,
            question_hits,
        })
    }

    /// All slots containing `token` as a substring of an indexed word, and
    /// the subset where the containing word came from the question.
    fn lookup(&self, token: &str) -> (BTreeSet<usize>, BTreeSet<usize>) {
        let mut slots = BTreeSet::new();
        let mut in_question = BTreeSet::new();
        for (word, entry_slots) in &self.question_tokens {
            if word.contains(token) {
                slots.extend(entry_slots.iter().copied());
                in_question.extend(entry_slots.iter().copied());
            }
        }
        for (word, entry_slots) in &self.answer_tokens {
            if word.contains(token) {
                slots.extend(entry_slots.iter().copied());
            }
        }
        (slots, in_question)
    }
}

/// CLI entry point — runs a search and prints ranked results.
pub fn run_search(repo: &Repository, query: &str, limit: usize, json: bool) -> Result<()> {
    let results: Vec<&Entry> = repo.search(query).into_iter().take(limit).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for entry in &results {
        println!("[{}] ({}) {}", entry.id, entry.category, entry.question);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawEntry;

    fn record(id: u32, category: &str, question: &str, answer: &str) -> RawEntry {
        RawEntry {
            id,
            category: category.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    fn repo() -> Repository {
        Repository::load(vec![
            record(
                3,
                "Kubernetes",
                "What is a pod?",
                "The smallest deployable unit; its containers share a network namespace.",
            ),
            record(
                1,
                "Docker",
                "What is Docker and why is it used?",
                "A container platform for packaging applications with their dependencies.",
            ),
            record(
                9,
                "Docker",
                "How does Docker networking work?",
                "Bridge networks connect containers on a single host.",
            ),
            record(
                5,
                "DevOps",
                "What is continuous integration?",
                "Merging changes frequently, with docker-based build agents running the tests.",
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(tokenize("  Docker  SWARM mode "), vec!["docker", "swarm", "mode"]);
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_empty_query_returns_all_ascending() {
        let ids: Vec<u32> = repo().search("").iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_blank_query_equals_empty() {
        let repo = repo();
        assert_eq!(repo.search("   "), repo.search(""));
    }

    #[test]
    fn test_substring_match_tolerates_partial_terms() {
        let ids: Vec<u32> = repo().search("dock").iter().map(|e| e.id).collect();
        assert!(ids.contains(&1));
        assert!(ids.contains(&9));
    }

    #[test]
    fn test_and_semantics_across_fields() {
        let repo = repo();
        // "docker" alone matches several entries...
        assert!(!repo.search("docker").is_empty());
        // ...but adding a token absent everywhere excludes them all.
        assert!(repo.search("docker swarm").is_empty());
        // Tokens may be satisfied by different fields of the same entry.
        let ids: Vec<u32> = repo.search("docker platform").iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_case_insensitive_same_results_and_order() {
        let repo = repo();
        assert_eq!(repo.search("DOCKER"), repo.search("docker"));
        assert_eq!(repo.search("Docker Networking"), repo.search("docker networking"));
    }

    #[test]
    fn test_question_match_ranks_before_answer_match() {
        // 1 and 9 have "docker" in the question; 5 only in the answer.
        let ids: Vec<u32> = repo().search("docker").iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 9, 5]);
    }

    #[test]
    fn test_ties_break_by_ascending_id() {
        // "is" hits the questions of 3, 1, and 5; equal rank sorts by id.
        let ids: Vec<u32> = repo().search("is").iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_match_in_answer_code_block() {
        let repo = Repository::load(vec![record(
            2,
            "SQL",
            "How do you select every row?",
            "Use a bare select:\n\n```sql\nSELECT * FROM users;\n```\n",
        )])
        .unwrap();
        let ids: Vec<u32> = repo.search("from").iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
