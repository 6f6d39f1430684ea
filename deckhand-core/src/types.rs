//! Slide records and the backing filename convention.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

/// Maximum number of slides in one deck, imposed by the two-digit
/// zero-padded filename prefix.
pub const MAX_SLIDES: usize = 99;

/// Pattern for a backing path: `slides/NN-slug.md`.
static SRC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^slides/(\d+)-(.+)\.md$").unwrap());

/// A single entry in the deck manifest.
///
/// Identity is positional: a record is identified by its index in the
/// deck's ordered sequence, never by `number`. Between renumbering passes
/// two records may legally share a number, or the sequence may contain
/// gaps; renumbering restores the one-to-one mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideRecord {
    /// The slide's numeric label, encoded in its filename prefix.
    pub number: u32,
    /// Path to the backing file, relative to the manifest's directory.
    pub src: String,
    /// Title taken from the annotation comment.
    pub title: String,
}

impl SlideRecord {
    /// Create a record for a slide stored under the standard convention.
    #[must_use]
    pub fn new(number: u32, slug: &str, title: impl Into<String>) -> Self {
        Self {
            number,
            src: format!("slides/{}", slide_filename(number, slug)),
            title: title.into(),
        }
    }
}

/// Format a backing filename from a number and slug.
#[must_use]
pub fn slide_filename(number: u32, slug: &str) -> String {
    format!("{number:02}-{slug}.md")
}

/// Split a backing path of the form `slides/NN-slug.md` into its number
/// and slug components.
pub fn parse_src(src: &str) -> Result<(u32, String)> {
    let caps = SRC_PATTERN
        .captures(src)
        .ok_or_else(|| Error::MalformedSrc(src.to_string()))?;
    let number = caps[1]
        .parse()
        .map_err(|_| Error::MalformedSrc(src.to_string()))?;
    Ok((number, caps[2].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_zero_padded() {
        assert_eq!(slide_filename(3, "intro"), "03-intro.md");
        assert_eq!(slide_filename(42, "the-answer"), "42-the-answer.md");
    }

    #[test]
    fn parse_src_round_trips() {
        let (number, slug) = parse_src("slides/07-closing-remarks.md").unwrap();
        assert_eq!(number, 7);
        assert_eq!(slug, "closing-remarks");
    }

    #[test]
    fn parse_src_rejects_unconventional_paths() {
        assert!(parse_src("slides/intro.md").is_err());
        assert!(parse_src("07-intro.md").is_err());
        assert!(parse_src("slides/07-intro.txt").is_err());
    }

    #[test]
    fn record_new_derives_src() {
        let record = SlideRecord::new(5, "benchmarks", "Benchmarks");
        assert_eq!(record.src, "slides/05-benchmarks.md");
        assert_eq!(record.title, "Benchmarks");
    }
}
