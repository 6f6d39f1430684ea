//! Manifest parsing and rewriting.
//!
//! The manifest is a markdown document: a global frontmatter block
//! delimited by a pair of `---` separators, followed by one `---`-delimited
//! block per slide containing a `src:` line, each block followed by a
//! single-line annotation comment of the form `<!-- Slide N: Title -->`.
//! Rewriting preserves the global block verbatim and regenerates every
//! per-slide block in sequence order.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::types::SlideRecord;

static SLIDE_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<!--\s*Slide\s+(\d+):\s*(.+?)\s*-->").unwrap());

/// A deck on disk: the manifest file plus its slide directory.
#[derive(Debug, Clone)]
pub struct Deck {
    manifest: PathBuf,
    root: PathBuf,
    slides_dir: PathBuf,
}

impl Deck {
    /// Describe the deck rooted at the given manifest path.
    ///
    /// The slide directory is always `slides/` next to the manifest. No
    /// filesystem access happens here; existence is checked by the
    /// operation preconditions.
    #[must_use]
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        let manifest = manifest.into();
        let root = manifest.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        let slides_dir = root.join("slides");
        Self { manifest, root, slides_dir }
    }

    /// Path of the manifest file.
    #[must_use]
    pub fn manifest_path(&self) -> &Path {
        &self.manifest
    }

    /// Directory the manifest lives in; `src` paths are relative to it.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the backing slide files.
    #[must_use]
    pub fn slides_dir(&self) -> &Path {
        &self.slides_dir
    }

    /// Resolve a record's `src` against the deck root.
    #[must_use]
    pub fn resolve(&self, src: &str) -> PathBuf {
        self.root.join(src)
    }

    /// Parse the ordered slide sequence from the manifest on disk.
    pub fn parse(&self) -> Result<Vec<SlideRecord>> {
        let text = fs::read_to_string(&self.manifest)?;
        Ok(parse_manifest(&text))
    }

    /// Rewrite the manifest for the given slide sequence, preserving the
    /// global frontmatter verbatim.
    pub fn rewrite(&self, slides: &[SlideRecord]) -> Result<()> {
        let original = fs::read_to_string(&self.manifest)?;

        let mut out = String::with_capacity(original.len());
        let mut separators = 0;
        for line in original.lines() {
            out.push_str(line);
            out.push('\n');
            if line.trim() == "---" {
                separators += 1;
                if separators == 2 {
                    break;
                }
            }
        }

        for slide in slides {
            out.push('\n');
            out.push_str("---\n");
            out.push_str(&format!("src: ./{}\n", slide.src));
            out.push_str("---\n");
            out.push_str(&format!("<!-- Slide {}: {} -->\n", slide.number, slide.title));
        }

        fs::write(&self.manifest, out)?;
        Ok(())
    }
}

/// Parse slide records from manifest text, in document order.
///
/// A `src:` declaration inside a `---`-delimited block is associated with
/// the next slide-annotation comment encountered. An annotation with no
/// `src:` in scope is silently dropped; that is a documented quirk of the
/// format, not an error. Malformed documents
/// produce an empty sequence rather than a failure; callers must treat an
/// empty sequence as a fatal precondition.
#[must_use]
pub fn parse_manifest(text: &str) -> Vec<SlideRecord> {
    let mut slides = Vec::new();
    let mut current_src: Option<String> = None;
    let mut in_block = false;

    for line in text.lines() {
        let line = line.trim_end();
        if line == "---" {
            in_block = !in_block;
        } else if in_block && line.starts_with("src:") {
            let path = line["src:".len()..].trim();
            let path = path.strip_prefix("./").unwrap_or(path);
            current_src = Some(path.to_string());
        } else if let Some(caps) = SLIDE_ANNOTATION.captures(line) {
            let src = current_src.take();
            if let (Some(src), Ok(number)) = (src, caps[1].parse()) {
                slides.push(SlideRecord { number, src, title: caps[2].to_string() });
            }
        }
    }

    slides
}
