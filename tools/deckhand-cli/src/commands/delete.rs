//! Delete command implementation.

use std::path::Path;

use deckhand_core::{delete_slide, Deck};

use crate::error::Result;

/// Run the delete command.
pub fn run(manifest: &Path, position: usize, renumber: bool) -> Result<()> {
    let deck = Deck::new(manifest);
    let report = delete_slide(&deck, position, renumber)?;

    println!("Deleted slide {position}: {}", report.removed.title);
    println!("Removed {}", report.removed.src);
    if report.renamed > 0 {
        println!("Renumbered {} slide(s)", report.renamed);
    }
    Ok(())
}
