//! Remove a slide from the deck.

use super::{check_position, renumber_sequential, validated_slides};
use crate::error::{Error, Result};
use crate::manifest::Deck;
use crate::transaction::{GapPolicy, Transaction};
use crate::types::SlideRecord;

/// What a delete operation did, for reporting.
#[derive(Debug)]
pub struct DeleteReport {
    /// The removed record.
    pub removed: SlideRecord,
    /// How many remaining backing files were renamed.
    pub renamed: usize,
}

/// Delete the slide at a 1-based position.
///
/// The position indexes list order, not the `number` field; the two can
/// diverge once gaps accumulate. Without `renumber`, the remaining
/// numbering is left as-is (gaps allowed); with it, the remaining slides
/// are renumbered to `1..=N`. The target's backing file is removed only
/// after the rewritten manifest has been verified, so an abort never
/// leaves the manifest pointing at a vanished file.
pub fn delete_slide(deck: &Deck, position: usize, renumber: bool) -> Result<DeleteReport> {
    let mut slides = validated_slides(deck)?;
    check_position(position, slides.len())?;

    let removed = slides.remove(position - 1);
    let target_path = deck.resolve(&removed.src);

    let mut tx = Transaction::begin(deck)?;
    let result = (|| -> Result<usize> {
        let renamed = if renumber { renumber_sequential(&mut tx, deck, &mut slides, 1)? } else { 0 };
        tx.rewrite_manifest(&slides)?;
        let policy = if renumber { GapPolicy::Sequential } else { GapPolicy::Lenient };
        tx.verify(slides.len(), policy)?;
        tx.remove_file(&target_path)?;
        Ok(renamed)
    })();

    match result {
        Ok(renamed) => {
            tx.commit();
            Ok(DeleteReport { removed, renamed })
        }
        Err(e) => {
            tx.rollback();
            Err(Error::RolledBack { source: Box::new(e) })
        }
    }
}
