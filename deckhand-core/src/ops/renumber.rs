//! Standalone numbering normalisation.

use super::{renumber_sequential, validated_slides};
use crate::error::{Error, Result};
use crate::gaps::find_gaps;
use crate::manifest::Deck;
use crate::transaction::{GapPolicy, Transaction};

/// What a renumber pass did, for reporting.
#[derive(Debug)]
pub struct RenumberReport {
    /// The gaps that were detected (leading offset ignored). Empty means
    /// the pass was a no-op.
    pub gaps: Vec<u32>,
    /// How many backing files were renamed.
    pub renamed: usize,
}

impl RenumberReport {
    /// Whether the pass changed anything.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.gaps.is_empty()
    }
}

/// Close every numbering gap after the second slide.
///
/// The first record's number stays fixed and every subsequent record is
/// renumbered sequentially from the current second record's number, so a
/// deliberate offset between slide one and slide two survives while every
/// later gap closes. A deck with one slide, or with no gaps beyond the
/// leading offset, is left untouched.
pub fn renumber_deck(deck: &Deck) -> Result<RenumberReport> {
    let mut slides = validated_slides(deck)?;
    if slides.len() < 2 {
        return Ok(RenumberReport { gaps: Vec::new(), renamed: 0 });
    }

    let numbers: Vec<u32> = slides.iter().map(|s| s.number).collect();
    let gaps = find_gaps(&numbers, true);
    if gaps.is_empty() {
        return Ok(RenumberReport { gaps, renamed: 0 });
    }

    let start = slides[1].number;

    let mut tx = Transaction::begin(deck)?;
    let result = (|| -> Result<usize> {
        let renamed = renumber_sequential(&mut tx, deck, &mut slides[1..], start)?;
        tx.rewrite_manifest(&slides)?;
        tx.verify(slides.len(), GapPolicy::IgnoreLeading)?;
        Ok(renamed)
    })();

    match result {
        Ok(renamed) => {
            tx.commit();
            Ok(RenumberReport { gaps, renamed })
        }
        Err(e) => {
            tx.rollback();
            Err(Error::RolledBack { source: Box::new(e) })
        }
    }
}
