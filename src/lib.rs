//! # Prep Bank
//!
//! An in-memory repository and retrieval layer for interview-prep Q&A
//! content.
//!
//! Prep Bank loads a fixed collection of question/answer entries once,
//! validates its integrity (unique ids, non-blank categories and
//! questions), builds lookup indices, and answers queries by id, by
//! category, and by keyword without touching the raw source again. The
//! collection is read-only at runtime: a content update is a fresh load
//! and an atomic swap of the repository reference.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────────────┐
//! │ JSON records │──▶│ Repository (load once)    │
//! │  (sources)   │   │ by_id / by_category /     │
//! └──────────────┘   │ inverted token index      │
//!                    └─────────────┬────────────┘
//!                                  │
//!                          ┌───────┴───────┐
//!                          ▼               ▼
//!                    ┌──────────┐    ┌──────────┐
//!                    │   CLI    │    │ library  │
//!                    │  (prep)  │    │ callers  │
//!                    └──────────┘    └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use prep_bank::models::RawEntry;
//! use prep_bank::repository::Repository;
//!
//! let records = vec![RawEntry {
//!     id: 1,
//!     category: "Docker".to_string(),
//!     question: "What is Docker and why is it used?".to_string(),
//!     answer: "A platform for packaging applications into containers.".to_string(),
//! }];
//!
//! let repo = Repository::load(records).unwrap();
//! assert_eq!(repo.get(1).unwrap().category, "Docker");
//! assert_eq!(repo.search("docker").len(), 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Raw and validated entry types |
//! | [`error`] | Integrity and lookup errors |
//! | [`repository`] | Load, indices, and the query surface |
//! | [`search`] | Tokenization and the inverted token index |
//! | [`sources`] | JSON content-file reading and validation |

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod search;
pub mod sources;
