//! Renumber command implementation.

use std::path::Path;

use deckhand_core::{renumber_deck, Deck};

use crate::error::Result;

/// Run the renumber command.
pub fn run(manifest: &Path) -> Result<()> {
    let deck = Deck::new(manifest);
    let report = renumber_deck(&deck)?;

    if report.is_noop() {
        println!("No numbering gaps found; nothing to do");
    } else {
        println!("Closed gaps {:?}", report.gaps);
        println!("Renumbered {} slide(s)", report.renamed);
    }
    Ok(())
}
