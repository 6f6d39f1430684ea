//! User-facing deck operations.
//!
//! Each operation validates its preconditions, opens a [`Transaction`],
//! applies its mutations, verifies the result, and either commits or
//! rolls back. A rolled-back operation returns [`Error::RolledBack`]
//! wrapping the error that triggered the rollback.

mod add;
mod delete;
mod renumber;

pub use add::{add_slide, AddReport};
pub use delete::{delete_slide, DeleteReport};
pub use renumber::{renumber_deck, RenumberReport};

use std::fs;

use crate::error::{Error, Result};
use crate::manifest::Deck;
use crate::transaction::Transaction;
use crate::types::{parse_src, slide_filename, SlideRecord};

/// Shared precondition checks: the manifest and slide directory exist,
/// the manifest is writable, and it parses to a non-empty sequence.
fn validated_slides(deck: &Deck) -> Result<Vec<SlideRecord>> {
    let manifest = deck.manifest_path();
    if !manifest.exists() {
        return Err(Error::ManifestNotFound(manifest.to_path_buf()));
    }
    if !deck.slides_dir().is_dir() {
        return Err(Error::SlideDirNotFound(deck.slides_dir().to_path_buf()));
    }
    if fs::metadata(manifest)?.permissions().readonly() {
        return Err(Error::ManifestReadOnly(manifest.to_path_buf()));
    }

    let slides = deck.parse()?;
    if slides.is_empty() {
        return Err(Error::EmptyDeck(manifest.to_path_buf()));
    }
    Ok(slides)
}

/// Check a 1-based position against the operation's valid range.
fn check_position(position: usize, max: usize) -> Result<()> {
    if position < 1 || position > max {
        return Err(Error::PositionOutOfRange { position, max });
    }
    Ok(())
}

/// Renumber slides to consecutive numbers starting at `start`, renaming
/// backing files front to back and skipping slides whose number already
/// matches. Returns the number of files moved.
///
/// Front-to-back order means downward renames always step into a slot the
/// previous iteration has vacated. An upward rename can still collide
/// when two slides share a slug; the move then fails rather than
/// overwrites, and the operation rolls back.
fn renumber_sequential(
    tx: &mut Transaction<'_>,
    deck: &Deck,
    slides: &mut [SlideRecord],
    start: u32,
) -> Result<usize> {
    let mut moves = 0;
    for (i, slide) in slides.iter_mut().enumerate() {
        let new_number = start + i as u32;
        if slide.number == new_number {
            continue;
        }

        let (_, slug) = parse_src(&slide.src)?;
        let new_filename = slide_filename(new_number, &slug);
        let from = deck.resolve(&slide.src);
        let to = deck.slides_dir().join(&new_filename);
        tx.move_file(&from, &to)?;

        slide.number = new_number;
        slide.src = format!("slides/{new_filename}");
        moves += 1;
    }
    Ok(moves)
}
