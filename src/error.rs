//! Error types for repository construction and lookup.
//!
//! Two failure categories exist in the whole crate: integrity violations
//! detected while loading a source (`DuplicateId`, `EmptyCategory`,
//! `EmptyQuestion`), and `NotFound` from a direct id lookup. Filter and
//! search queries never error; "no matches" is a normal outcome and is
//! reported as an empty result set.

use thiserror::Error;

/// Repository error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two records in the load source share an id. Raised only by `load`;
    /// the repository is not constructed.
    #[error("duplicate entry id {id}")]
    DuplicateId { id: u32 },

    /// A record has a blank category. Raised only by `load`.
    #[error("entry {id} has an empty category")]
    EmptyCategory { id: u32 },

    /// A record has a blank question. Raised only by `load`.
    #[error("entry {id} has an empty question")]
    EmptyQuestion { id: u32 },

    /// No entry with the given id exists. Raised only by `get`: a direct
    /// reference by id that misses indicates caller misuse of the key.
    #[error("no entry with id {id}")]
    NotFound { id: u32 },
}
