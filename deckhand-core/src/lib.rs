//! Deckhand Core
//!
//! This crate provides the engine behind the `deckhand` CLI: it keeps a
//! presentation's slide manifest (`slides.md`) and the per-slide backing
//! files under `slides/` consistent with each other and with git's index.
//!
//! # Modules
//!
//! - [`types`] - Slide records and the filename convention
//! - [`manifest`] - Manifest parsing and rewriting
//! - [`slug`] - Title-to-slug conversion
//! - [`gaps`] - Numbering gap detection
//! - [`git`] - Git-aware file moves and removals
//! - [`transaction`] - Snapshot/undo-log transaction controller
//! - [`ops`] - The user-facing deck operations (add, delete, renumber)
//! - [`error`] - Error types
//!
//! # Transaction Semantics
//!
//! Every mutating operation runs as one transaction: preconditions are
//! checked, the manifest is snapshotted, mutations are applied while an
//! undo log records each file move and creation, the rewritten manifest is
//! re-parsed and verified, and only then is the snapshot discarded. Any
//! failure after the snapshot triggers a full rollback that restores the
//! manifest and un-does every logged mutation in reverse order.
//!
//! A single invocation is assumed to be the only writer; no file locking
//! is performed.

pub mod error;
pub mod gaps;
pub mod git;
pub mod manifest;
pub mod ops;
pub mod slug;
pub mod transaction;
pub mod types;

// Re-export commonly used items
pub use error::{Error, Result};
pub use gaps::find_gaps;
pub use manifest::Deck;
pub use ops::{add_slide, delete_slide, renumber_deck, AddReport, DeleteReport, RenumberReport};
pub use slug::slugify;
pub use transaction::{GapPolicy, Transaction};
pub use types::{SlideRecord, MAX_SLIDES};
