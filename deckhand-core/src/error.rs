//! Error types for the core crate.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for deck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while operating on a deck.
#[derive(Debug, Error)]
pub enum Error {
    /// The manifest file does not exist.
    #[error("manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    /// The slide directory does not exist.
    #[error("slide directory not found: {0}")]
    SlideDirNotFound(PathBuf),

    /// The manifest exists but is not writable.
    #[error("no write permission for manifest: {0}")]
    ManifestReadOnly(PathBuf),

    /// The manifest parsed to an empty slide sequence.
    #[error("no slides found in {0}")]
    EmptyDeck(PathBuf),

    /// A 1-based position was outside the valid range for the operation.
    #[error("position must be between 1 and {max}, got {position}")]
    PositionOutOfRange {
        /// The position that was requested.
        position: usize,
        /// The largest valid position.
        max: usize,
    },

    /// The deck already holds the maximum number of slides.
    #[error("maximum of 99 slides supported; consider splitting the presentation")]
    DeckFull,

    /// A backing path did not match the `slides/NN-slug.md` convention.
    #[error("invalid slide filename format: {0}")]
    MalformedSrc(String),

    /// A move or creation would overwrite an existing file.
    #[error("refusing to overwrite existing file: {0}")]
    FileExists(PathBuf),

    /// Two manifest entries reference the same backing file.
    #[error("duplicate backing file reference: {0}")]
    DuplicateBackingFile(String),

    /// A git subcommand exited with a failure status.
    #[error("{command} failed: {stderr}")]
    Git {
        /// The git invocation that failed, e.g. `git mv`.
        command: String,
        /// Captured stderr from the subprocess.
        stderr: String,
    },

    /// Post-operation verification found the wrong number of entries.
    #[error("slide count mismatch: expected {expected}, got {found}")]
    CountMismatch {
        /// The count the operation should have produced.
        expected: usize,
        /// The count actually parsed back from disk.
        found: usize,
    },

    /// Post-operation verification found a number out of sequence.
    #[error("numbering gap at position {position}: expected {expected}, got {found}")]
    OutOfSequence {
        /// 1-based position of the offending record.
        position: usize,
        /// The number required at that position.
        expected: u32,
        /// The number actually present.
        found: u32,
    },

    /// Post-operation verification found gaps that should have been closed.
    #[error("numbering gaps remain after renumbering: {0:?}")]
    GapsRemain(Vec<u32>),

    /// Post-operation verification found a referenced file missing.
    #[error("missing slide file: {0}")]
    MissingBackingFile(PathBuf),

    /// The operation failed and all mutations were rolled back.
    #[error("operation rolled back: {source}")]
    RolledBack {
        /// The error that triggered the rollback.
        #[source]
        source: Box<Error>,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if this failure was detected before any mutation.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::ManifestNotFound(_)
                | Self::SlideDirNotFound(_)
                | Self::ManifestReadOnly(_)
                | Self::EmptyDeck(_)
                | Self::PositionOutOfRange { .. }
                | Self::DeckFull
        )
    }

    /// Returns `true` if this is a "not found" type error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ManifestNotFound(_) | Self::SlideDirNotFound(_) | Self::EmptyDeck(_)
        )
    }
}
