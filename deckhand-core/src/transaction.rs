//! Transactional mutation of a deck.
//!
//! One operation runs as one transaction. The manifest is snapshotted
//! before the first mutation; every file move and creation is appended to
//! an undo log as it succeeds; after all mutations the manifest is
//! re-parsed from disk and verified. Commit discards the snapshot. Any
//! failure between snapshot and commit triggers a full rollback that
//! restores the snapshot and un-does the logged mutations in reverse
//! order. Because a rename chain touches N files plus the manifest, the
//! undo logs give an exact, minimal-surface reversal instead of a
//! directory-wide diff and restore.
//!
//! Rollback itself never fails: undo steps that cannot be applied are
//! logged as warnings and skipped, leaving a best-effort-restored state.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::warn;

use crate::error::{Error, Result};
use crate::gaps::find_gaps;
use crate::git::GitContext;
use crate::manifest::Deck;
use crate::types::SlideRecord;

/// How strictly slide numbering is checked during verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapPolicy {
    /// Numbers must be exactly `1..=N` in sequence order.
    Sequential,
    /// Gaps are allowed only before the second slide (title-slide offset).
    IgnoreLeading,
    /// Gaps and duplicate numbers are allowed; counts and backing files
    /// are still checked.
    Lenient,
}

/// An in-flight mutation of a deck.
///
/// Created by [`Transaction::begin`], which takes the manifest snapshot.
/// The caller applies mutations through the logging methods, verifies, and
/// then either [`commit`](Transaction::commit)s or
/// [`rollback`](Transaction::rollback)s. Dropping a transaction without
/// doing either leaves the snapshot file behind deliberately: it is the
/// only record of the pre-mutation state.
pub struct Transaction<'a> {
    deck: &'a Deck,
    git: GitContext,
    snapshot: PathBuf,
    moved: Vec<(PathBuf, PathBuf)>,
    created: Vec<PathBuf>,
}

impl<'a> Transaction<'a> {
    /// Snapshot the manifest and open a transaction on the deck.
    ///
    /// Must be called after preconditions have been validated and before
    /// the first mutating call.
    pub fn begin(deck: &'a Deck) -> Result<Self> {
        let snapshot = snapshot_path(deck.manifest_path());
        fs::copy(deck.manifest_path(), &snapshot)?;
        Ok(Self {
            deck,
            git: GitContext::new(deck.root()),
            snapshot,
            moved: Vec::new(),
            created: Vec::new(),
        })
    }

    /// Move a backing file, recording the move in the undo log.
    pub fn move_file(&mut self, from: &Path, to: &Path) -> Result<()> {
        self.git.move_file(from, to)?;
        self.moved.push((from.to_path_buf(), to.to_path_buf()));
        Ok(())
    }

    /// Create a new file with the given contents, recording it in the
    /// undo log.
    ///
    /// The path must be vacant. A slug collision with an existing slide
    /// would otherwise replace that slide's file, and rollback would then
    /// delete it outright, so the collision aborts the transaction
    /// instead.
    pub fn create_file(&mut self, path: &Path, contents: &str) -> Result<()> {
        if path.exists() {
            return Err(Error::FileExists(path.to_path_buf()));
        }
        fs::write(path, contents)?;
        self.created.push(path.to_path_buf());
        Ok(())
    }

    /// Rewrite the manifest for the given slide sequence.
    ///
    /// The snapshot, not an undo-log entry, is what reverses this.
    pub fn rewrite_manifest(&self, slides: &[SlideRecord]) -> Result<()> {
        self.deck.rewrite(slides)
    }

    /// Remove a backing file, git-aware.
    ///
    /// Not recorded in the undo log: removals are ordered after
    /// verification, so a failure here is the final abort point and the
    /// file itself is still in place to be referenced by the restored
    /// manifest.
    pub fn remove_file(&self, path: &Path) -> Result<()> {
        self.git.remove_file(path)
    }

    /// Re-parse the manifest from disk and check post-operation
    /// invariants: entry count, the numbering policy, distinctness of the
    /// `src` references, and existence of every referenced backing file.
    ///
    /// Distinctness is checked under every policy. Duplicate numbers are
    /// a legal transient; two records sharing one backing file are not,
    /// since editing either slide would change both.
    pub fn verify(&self, expected_count: usize, policy: GapPolicy) -> Result<()> {
        let slides = self.deck.parse()?;

        if slides.len() != expected_count {
            return Err(Error::CountMismatch { expected: expected_count, found: slides.len() });
        }

        let mut seen = HashSet::with_capacity(slides.len());
        for slide in &slides {
            if !seen.insert(slide.src.as_str()) {
                return Err(Error::DuplicateBackingFile(slide.src.clone()));
            }
        }

        match policy {
            GapPolicy::Sequential => {
                for (i, slide) in slides.iter().enumerate() {
                    let expected = i as u32 + 1;
                    if slide.number != expected {
                        return Err(Error::OutOfSequence {
                            position: i + 1,
                            expected,
                            found: slide.number,
                        });
                    }
                }
            }
            GapPolicy::IgnoreLeading => {
                let numbers: Vec<u32> = slides.iter().map(|s| s.number).collect();
                let gaps = find_gaps(&numbers, true);
                if !gaps.is_empty() {
                    return Err(Error::GapsRemain(gaps));
                }
            }
            GapPolicy::Lenient => {}
        }

        for slide in &slides {
            let path = self.deck.resolve(&slide.src);
            if !path.exists() {
                return Err(Error::MissingBackingFile(path));
            }
        }

        Ok(())
    }

    /// Discard the snapshot and drop the undo logs.
    ///
    /// A snapshot that cannot be deleted is only warned about; the
    /// operation itself has already succeeded.
    pub fn commit(self) {
        if let Err(e) = fs::remove_file(&self.snapshot) {
            warn!("failed to remove backup {}: {e}", self.snapshot.display());
        }
    }

    /// Restore the snapshot over the manifest and undo every logged
    /// mutation in reverse order.
    ///
    /// Moves are undone with plain filesystem renames (never through git)
    /// and created files are deleted. Individual undo failures are warned
    /// about and skipped; rollback always returns.
    pub fn rollback(self) {
        warn!("rolling back changes");

        if self.snapshot.exists() {
            if let Err(e) = fs::rename(&self.snapshot, self.deck.manifest_path()) {
                warn!("failed to restore manifest from {}: {e}", self.snapshot.display());
            }
        }

        for (from, to) in self.moved.iter().rev() {
            if to.exists() {
                if let Err(e) = fs::rename(to, from) {
                    warn!("failed to undo move {} -> {}: {e}", to.display(), from.display());
                }
            }
        }

        for path in &self.created {
            if path.exists() {
                if let Err(e) = fs::remove_file(path) {
                    warn!("failed to remove {}: {e}", path.display());
                }
            }
        }
    }
}

fn snapshot_path(manifest: &Path) -> PathBuf {
    let mut name = manifest.file_name().map_or_else(String::new, |n| n.to_string_lossy().into_owned());
    name.push_str(&format!(".backup.{}", Utc::now().timestamp()));
    manifest.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MANIFEST: &str = "---\ntheme: default\n---\n\n---\nsrc: ./slides/01-a.md\n---\n<!-- Slide 1: A -->\n";

    fn fixture(dir: &Path) -> Deck {
        let manifest = dir.join("slides.md");
        fs::write(&manifest, MANIFEST).unwrap();
        fs::create_dir(dir.join("slides")).unwrap();
        fs::write(dir.join("slides/01-a.md"), "# A\n").unwrap();
        Deck::new(manifest)
    }

    #[test]
    fn commit_removes_the_snapshot() {
        let dir = tempdir().unwrap();
        let deck = fixture(dir.path());

        let tx = Transaction::begin(&deck).unwrap();
        let snapshot = tx.snapshot.clone();
        assert!(snapshot.exists());

        tx.commit();
        assert!(!snapshot.exists());
        assert_eq!(fs::read_to_string(deck.manifest_path()).unwrap(), MANIFEST);
    }

    #[test]
    fn rollback_restores_manifest_and_moves() {
        let dir = tempdir().unwrap();
        let deck = fixture(dir.path());

        let mut tx = Transaction::begin(&deck).unwrap();
        let from = dir.path().join("slides/01-a.md");
        let to = dir.path().join("slides/02-a.md");
        tx.move_file(&from, &to).unwrap();
        fs::write(deck.manifest_path(), "clobbered\n").unwrap();

        tx.rollback();
        assert_eq!(fs::read_to_string(deck.manifest_path()).unwrap(), MANIFEST);
        assert!(from.exists());
        assert!(!to.exists());
    }

    #[test]
    fn rollback_deletes_created_files() {
        let dir = tempdir().unwrap();
        let deck = fixture(dir.path());

        let mut tx = Transaction::begin(&deck).unwrap();
        let created = dir.path().join("slides/02-b.md");
        tx.create_file(&created, "# B\n").unwrap();
        assert!(created.exists());

        tx.rollback();
        assert!(!created.exists());
    }

    #[test]
    fn create_refuses_to_overwrite_an_existing_file() {
        let dir = tempdir().unwrap();
        let deck = fixture(dir.path());

        let mut tx = Transaction::begin(&deck).unwrap();
        let existing = dir.path().join("slides/01-a.md");
        let result = tx.create_file(&existing, "# Imposter\n");
        assert!(matches!(result, Err(Error::FileExists(_))));

        tx.rollback();
        assert_eq!(fs::read_to_string(&existing).unwrap(), "# A\n");
    }

    #[test]
    fn verify_rejects_a_shared_backing_file() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("slides.md");
        let text = "---\ntheme: default\n---\n\n\
---\nsrc: ./slides/01-a.md\n---\n<!-- Slide 1: A -->\n\n\
---\nsrc: ./slides/01-a.md\n---\n<!-- Slide 2: Also A -->\n";
        fs::write(&manifest, text).unwrap();
        fs::create_dir(dir.path().join("slides")).unwrap();
        fs::write(dir.path().join("slides/01-a.md"), "# A\n").unwrap();

        let deck = Deck::new(&manifest);
        let tx = Transaction::begin(&deck).unwrap();
        assert!(matches!(
            tx.verify(2, GapPolicy::Lenient),
            Err(Error::DuplicateBackingFile(ref src)) if src == "slides/01-a.md"
        ));
        tx.rollback();
    }

    #[test]
    fn verify_checks_count_and_files() {
        let dir = tempdir().unwrap();
        let deck = fixture(dir.path());
        let tx = Transaction::begin(&deck).unwrap();

        tx.verify(1, GapPolicy::Sequential).unwrap();
        assert!(matches!(
            tx.verify(2, GapPolicy::Sequential),
            Err(Error::CountMismatch { expected: 2, found: 1 })
        ));

        fs::remove_file(dir.path().join("slides/01-a.md")).unwrap();
        assert!(matches!(tx.verify(1, GapPolicy::Lenient), Err(Error::MissingBackingFile(_))));
        tx.rollback();
    }

    #[test]
    fn verify_applies_the_gap_policy() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("slides.md");
        let text = "---\ntheme: default\n---\n\n\
---\nsrc: ./slides/01-a.md\n---\n<!-- Slide 1: A -->\n\n\
---\nsrc: ./slides/05-b.md\n---\n<!-- Slide 5: B -->\n\n\
---\nsrc: ./slides/07-c.md\n---\n<!-- Slide 7: C -->\n";
        fs::write(&manifest, text).unwrap();
        fs::create_dir(dir.path().join("slides")).unwrap();
        for name in ["01-a.md", "05-b.md", "07-c.md"] {
            fs::write(dir.path().join("slides").join(name), "x\n").unwrap();
        }
        let deck = Deck::new(&manifest);
        let tx = Transaction::begin(&deck).unwrap();

        assert!(matches!(
            tx.verify(3, GapPolicy::Sequential),
            Err(Error::OutOfSequence { position: 2, expected: 2, found: 5 })
        ));
        assert!(matches!(tx.verify(3, GapPolicy::IgnoreLeading), Err(Error::GapsRemain(ref g)) if g == &vec![6]));
        tx.verify(3, GapPolicy::Lenient).unwrap();
        tx.rollback();
    }
}
