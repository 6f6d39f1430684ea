//! Insert a new slide into the deck.

use std::path::Path;

use super::{check_position, renumber_sequential, validated_slides};
use crate::error::{Error, Result};
use crate::manifest::Deck;
use crate::slug::slugify;
use crate::transaction::{GapPolicy, Transaction};
use crate::types::{SlideRecord, MAX_SLIDES};

/// What an add operation did, for reporting.
#[derive(Debug)]
pub struct AddReport {
    /// Backing path of the new slide, relative to the deck root.
    pub src: String,
    /// The number assigned to the new slide.
    pub number: u32,
    /// How many existing backing files were renamed.
    pub renamed: usize,
}

/// Insert a slide at a 1-based position.
///
/// Without `renumber`, no existing file is touched: the new slide borrows
/// a number from its neighbours, possibly duplicating one. That duplicate
/// is an accepted transient that a later renumber pass cleans up. With
/// `renumber`, the whole sequence is renumbered to `1..=N` afterwards.
pub fn add_slide(
    deck: &Deck,
    position: usize,
    title: &str,
    layout: &str,
    renumber: bool,
) -> Result<AddReport> {
    let mut slides = validated_slides(deck)?;
    check_position(position, slides.len() + 1)?;
    if slides.len() >= MAX_SLIDES {
        return Err(Error::DeckFull);
    }

    let number = assign_number(&slides, position, renumber);
    let record = SlideRecord::new(number, &slugify(title), title);
    let src = record.src.clone();
    let path = deck.resolve(&src);
    slides.insert(position - 1, record);

    let mut tx = Transaction::begin(deck)?;
    let result = apply(&mut tx, deck, &mut slides, &path, title, layout, renumber);
    match result {
        Ok(renamed) => {
            tx.commit();
            Ok(AddReport { src, number, renamed })
        }
        Err(e) => {
            tx.rollback();
            Err(Error::RolledBack { source: Box::new(e) })
        }
    }
}

fn apply(
    tx: &mut Transaction<'_>,
    deck: &Deck,
    slides: &mut [SlideRecord],
    path: &Path,
    title: &str,
    layout: &str,
    renumber: bool,
) -> Result<usize> {
    tx.create_file(path, &slide_template(title, layout))?;
    let renamed = if renumber { renumber_sequential(tx, deck, slides, 1)? } else { 0 };
    tx.rewrite_manifest(slides)?;
    let policy = if renumber { GapPolicy::Sequential } else { GapPolicy::Lenient };
    tx.verify(slides.len(), policy)?;
    Ok(renamed)
}

/// Pick the new record's number.
///
/// - renumbering afterwards anyway: the target position;
/// - inserting at the front: reuse the current first number;
/// - appending: previous last number plus one;
/// - between two records: the first free number after the left neighbour
///   if a gap exists there, otherwise reuse the right neighbour's number.
fn assign_number(slides: &[SlideRecord], position: usize, renumber: bool) -> u32 {
    if renumber || slides.is_empty() {
        return position as u32;
    }
    if position == 1 {
        return slides[0].number;
    }
    if position == slides.len() + 1 {
        return slides[slides.len() - 1].number + 1;
    }

    let left = slides[position - 2].number;
    let right = slides[position - 1].number;
    if right > left + 1 {
        left + 1
    } else {
        right
    }
}

/// Fixed template for a freshly created slide file.
fn slide_template(title: &str, layout: &str) -> String {
    format!(
        "---\n\
         layout: {layout}\n\
         ---\n\
         \n\
         # {title}\n\
         \n\
         Content here\n\
         \n\
         <!--\n\
         Presenter notes\n\
         -->\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_with_numbers(numbers: &[u32]) -> Vec<SlideRecord> {
        numbers
            .iter()
            .map(|&n| SlideRecord::new(n, &format!("slide-{n}"), format!("Slide {n}")))
            .collect()
    }

    #[test]
    fn front_insert_reuses_the_first_number() {
        let slides = deck_with_numbers(&[3, 4, 5]);
        assert_eq!(assign_number(&slides, 1, false), 3);
    }

    #[test]
    fn append_takes_last_plus_one() {
        let slides = deck_with_numbers(&[1, 2, 5]);
        assert_eq!(assign_number(&slides, 4, false), 6);
    }

    #[test]
    fn middle_insert_fills_an_existing_gap() {
        let slides = deck_with_numbers(&[1, 2, 6]);
        assert_eq!(assign_number(&slides, 3, false), 3);
    }

    #[test]
    fn middle_insert_without_gap_reuses_the_right_neighbour() {
        let slides = deck_with_numbers(&[1, 2, 3]);
        assert_eq!(assign_number(&slides, 2, false), 2);
    }

    #[test]
    fn renumbering_mode_uses_the_position() {
        let slides = deck_with_numbers(&[4, 9]);
        assert_eq!(assign_number(&slides, 2, true), 2);
    }

    #[test]
    fn template_carries_layout_and_title() {
        let text = slide_template("Benchmarks", "two-cols");
        assert!(text.starts_with("---\nlayout: two-cols\n---\n"));
        assert!(text.contains("# Benchmarks\n"));
        assert!(text.contains("Presenter notes"));
    }
}
