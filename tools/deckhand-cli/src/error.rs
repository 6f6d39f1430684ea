//! Error types and the exit-code contract for the CLI.

use thiserror::Error;

/// CLI-specific result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Exit codes, the observable contract of the tool.
///
/// clap reports argument-parse failures with code 2 on its own, which is
/// the same code used for out-of-range positions.
pub mod exit_code {
    /// Any failure without a more specific code, including every
    /// rolled-back transaction.
    pub const GENERAL: u8 = 1;
    /// Invalid arguments (bad position, deck full).
    pub const INVALID_ARGS: u8 = 2;
    /// Manifest, slide directory, or slides not found.
    pub const NOT_FOUND: u8 = 3;
    /// A version-control operation failed outside a rolled-back
    /// transaction.
    pub const GIT: u8 = 4;
}

/// CLI error types.
#[derive(Error, Debug)]
pub enum CliError {
    /// A deck operation failed.
    #[error(transparent)]
    Deck(#[from] deckhand_core::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map the error to the process exit code.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        use deckhand_core::Error;
        match self {
            Self::Deck(e) => match e {
                Error::ManifestNotFound(_) | Error::SlideDirNotFound(_) | Error::EmptyDeck(_) => {
                    exit_code::NOT_FOUND
                }
                Error::PositionOutOfRange { .. } | Error::DeckFull => exit_code::INVALID_ARGS,
                Error::Git { .. } => exit_code::GIT,
                _ => exit_code::GENERAL,
            },
            Self::Json(_) => exit_code::GENERAL,
        }
    }
}
