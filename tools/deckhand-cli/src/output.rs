//! Output formatting for the list command.

use deckhand_core::SlideRecord;

use crate::error::Result;

/// Print slides as an aligned plain-text table.
pub fn print_table(slides: &[SlideRecord]) {
    let title_width = slides.iter().map(|s| s.title.len()).max().unwrap_or(5).max(5);
    let src_width = slides.iter().map(|s| s.src.len()).max().unwrap_or(4).max(4);

    println!("{:>3}  {:>3}  {:<src_width$}  {:<title_width$}", "pos", "num", "file", "title");
    for (i, slide) in slides.iter().enumerate() {
        println!(
            "{:>3}  {:>3}  {:<src_width$}  {:<title_width$}",
            i + 1,
            slide.number,
            slide.src,
            slide.title,
        );
    }
}

/// Print slides as a JSON array.
pub fn print_json(slides: &[SlideRecord]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(slides)?);
    Ok(())
}
