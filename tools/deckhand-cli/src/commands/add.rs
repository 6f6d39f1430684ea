//! Add command implementation.

use std::path::Path;

use deckhand_core::{add_slide, Deck};

use crate::error::Result;

/// Run the add command.
pub fn run(manifest: &Path, position: usize, title: &str, layout: &str, renumber: bool) -> Result<()> {
    println!("Adding slide at position {position}: {title}");

    let deck = Deck::new(manifest);
    let report = add_slide(&deck, position, title, layout, renumber)?;

    println!("Created {}", report.src);
    if report.renamed > 0 {
        println!("Renumbered {} slide(s)", report.renamed);
    } else if !renumber {
        println!("Assigned number {} (run `deckhand renumber` to normalise)", report.number);
    }
    println!("Successfully added slide at position {position}");
    Ok(())
}
