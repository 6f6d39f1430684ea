//! List command implementation.

use std::path::Path;

use deckhand_core::{find_gaps, Deck, Error};

use crate::error::Result;
use crate::output;
use crate::OutputFormat;

/// Run the list command. Read-only: no transaction is opened.
pub fn run(manifest: &Path, format: OutputFormat) -> Result<()> {
    if !manifest.exists() {
        return Err(Error::ManifestNotFound(manifest.to_path_buf()).into());
    }

    let deck = Deck::new(manifest);
    let slides = deck.parse()?;

    match format {
        OutputFormat::Table => {
            output::print_table(&slides);
            let numbers: Vec<u32> = slides.iter().map(|s| s.number).collect();
            let gaps = find_gaps(&numbers, true);
            if !gaps.is_empty() {
                println!("\nNumbering gaps: {gaps:?}");
            }
        }
        OutputFormat::Json => output::print_json(&slides)?,
    }
    Ok(())
}
