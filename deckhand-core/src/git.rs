//! Git-aware file moves and removals.
//!
//! Relocations go through `git mv` when the file is tracked so rename
//! history is preserved; untracked files fall back to plain filesystem
//! calls. The git CLI is invoked, never reimplemented.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Runs git subcommands with the deck directory as the working directory.
#[derive(Debug, Clone)]
pub struct GitContext {
    root: PathBuf,
}

impl GitContext {
    /// Create a context rooted at the deck directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Whether `path` is tracked in the enclosing git repository.
    ///
    /// A non-zero exit from `git ls-files --error-unmatch`, a directory
    /// outside any repository, and a missing `git` binary all count as
    /// untracked, so the tool stays usable without git.
    #[must_use]
    pub fn is_tracked(&self, path: &Path) -> bool {
        Command::new("git")
            .args(["ls-files", "--error-unmatch"])
            .arg(path)
            .current_dir(&self.root)
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    /// Move a file, going through `git mv` when the source is tracked.
    ///
    /// The destination must be vacant: two slides may legally share a
    /// slug, and a rename chain must abort on the collision instead of
    /// silently replacing the other slide's file. Failures propagate
    /// immediately; there is no partial-move retry.
    pub fn move_file(&self, from: &Path, to: &Path) -> Result<()> {
        if to.exists() {
            return Err(Error::FileExists(to.to_path_buf()));
        }
        if self.is_tracked(from) {
            let mut cmd = Command::new("git");
            cmd.arg("mv").arg(from).arg(to);
            self.run("git mv", cmd)
        } else {
            fs::rename(from, to).map_err(Error::from)
        }
    }

    /// Remove a file, going through `git rm` when it is tracked.
    pub fn remove_file(&self, path: &Path) -> Result<()> {
        if self.is_tracked(path) {
            let mut cmd = Command::new("git");
            cmd.args(["rm", "-f", "--quiet"]).arg(path);
            self.run("git rm", cmd)
        } else {
            fs::remove_file(path).map_err(Error::from)
        }
    }

    fn run(&self, label: &str, mut cmd: Command) -> Result<()> {
        let output = cmd.current_dir(&self.root).output()?;
        if !output.status.success() {
            return Err(Error::Git {
                command: label.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn untracked_files_move_through_the_filesystem() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("a.md");
        let to = dir.path().join("b.md");
        fs::write(&from, "content").unwrap();

        let git = GitContext::new(dir.path());
        assert!(!git.is_tracked(&from));
        git.move_file(&from, &to).unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read_to_string(&to).unwrap(), "content");
    }

    #[test]
    fn moving_a_missing_file_fails() {
        let dir = tempdir().unwrap();
        let git = GitContext::new(dir.path());
        let result = git.move_file(&dir.path().join("nope.md"), &dir.path().join("dest.md"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn moving_onto_an_existing_file_is_rejected() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("a.md");
        let to = dir.path().join("b.md");
        fs::write(&from, "a\n").unwrap();
        fs::write(&to, "b\n").unwrap();

        let git = GitContext::new(dir.path());
        let result = git.move_file(&from, &to);
        assert!(matches!(result, Err(Error::FileExists(_))));
        assert_eq!(fs::read_to_string(&to).unwrap(), "b\n");
    }

    #[test]
    fn untracked_files_are_removed_through_the_filesystem() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.md");
        fs::write(&path, "content").unwrap();

        let git = GitContext::new(dir.path());
        git.remove_file(&path).unwrap();
        assert!(!path.exists());
    }
}
