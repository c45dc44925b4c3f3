//! Filesystem existence probing for candidate resolution.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Existence probe with a per-resolution directory snapshot cache.
///
/// Direct probes use a plain file check. Case-folded extension matching needs
/// the directory contents, which are listed at most once per directory per
/// resolution. Unreadable or missing directories count as empty; the locator
/// treats probe failures as absence.
#[derive(Debug, Default)]
pub struct DirectoryProbe {
    listings: BTreeMap<PathBuf, Vec<OsString>>,
}

impl DirectoryProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe for `name` inside `dir`.
    ///
    /// An exact match always wins. With `fold_extension_case` set, a file
    /// whose name differs from the candidate only in the case of its
    /// extension also matches; ties between case variants resolve in sorted
    /// file-name order so repeated lookups stay deterministic.
    pub fn find(&mut self, dir: &Path, name: &str, fold_extension_case: bool) -> Option<PathBuf> {
        let direct = dir.join(name);
        if direct.is_file() {
            return Some(direct);
        }
        if !fold_extension_case {
            return None;
        }

        let (stem, extension) = name.rsplit_once('.')?;
        for entry in self.listing(dir) {
            let Some(entry_name) = entry.to_str() else {
                continue;
            };
            if let Some((entry_stem, entry_extension)) = entry_name.rsplit_once('.') {
                if entry_stem == stem && entry_extension.eq_ignore_ascii_case(extension) {
                    return Some(dir.join(entry_name));
                }
            }
        }
        None
    }

    fn listing(&mut self, dir: &Path) -> &[OsString] {
        self.listings
            .entry(dir.to_path_buf())
            .or_insert_with(|| {
                let mut names = Vec::new();
                if let Ok(entries) = fs::read_dir(dir) {
                    for entry in entries.flatten() {
                        if entry.file_type().is_ok_and(|kind| kind.is_file()) {
                            names.push(entry.file_name());
                        }
                    }
                }
                names.sort();
                names
            })
            .as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::DirectoryProbe;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_exact_matches_without_folding() {
        let temp = tempdir().expect("failed to create temp dir");
        fs::write(temp.path().join("Train.png"), b"png").expect("failed to write file");

        let mut probe = DirectoryProbe::new();
        assert!(probe.find(temp.path(), "Train.png", false).is_some());
        assert!(probe.find(temp.path(), "Train.jpg", false).is_none());
    }

    #[test]
    fn folds_extension_case_when_asked() {
        let temp = tempdir().expect("failed to create temp dir");
        fs::write(temp.path().join("Photo.PNG"), b"png").expect("failed to write file");

        let mut probe = DirectoryProbe::new();
        assert!(probe.find(temp.path(), "Photo.png", false).is_none());

        let found = probe
            .find(temp.path(), "Photo.png", true)
            .expect("case-folded probe should match");
        assert_eq!(found, temp.path().join("Photo.PNG"));
    }

    #[test]
    fn never_folds_the_stem() {
        let temp = tempdir().expect("failed to create temp dir");
        fs::write(temp.path().join("photo.png"), b"png").expect("failed to write file");

        let mut probe = DirectoryProbe::new();
        assert!(probe.find(temp.path(), "Photo.png", true).is_none());
    }

    #[test]
    fn missing_directories_count_as_empty() {
        let temp = tempdir().expect("failed to create temp dir");
        let mut probe = DirectoryProbe::new();
        assert!(
            probe
                .find(&temp.path().join("absent"), "Train.png", true)
                .is_none()
        );
    }
}
